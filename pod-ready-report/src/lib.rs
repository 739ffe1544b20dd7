use std::fs;
use std::io;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use pod_ready::ConditionEntry;
use pod_ready::ConditionType;
use pod_ready::PodList;
use pod_ready::PodRecord;
use pod_ready::TimestampError;
use time::Duration;
use time::OffsetDateTime;

pub use console::ConsoleFormatter;
pub use csv::CsvFormatter;
pub use readiness::ReadinessReport;
pub use readiness::ReadinessTimes;
pub use readiness::collect;

mod console;
mod csv;
mod readiness;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to decode pod listing: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
    #[error("failed to write {}: {source}", path.display())]
    File { path: PathBuf, source: io::Error },
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Where the readiness report goes
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// One line per pod on the given writer.
    Console,
    /// A CSV file, created or truncated.
    Csv(PathBuf),
}

impl Output {
    /// CSV output to `filename`, or to `pod_info_<namespace>.csv` when no
    /// name was given.
    pub fn csv(namespace: &str, filename: Option<PathBuf>) -> Self {
        Self::Csv(filename.unwrap_or_else(|| Self::default_csv_filename(namespace)))
    }

    pub fn default_csv_filename(namespace: &str) -> PathBuf {
        PathBuf::from(format!("pod_info_{namespace}.csv"))
    }
}

/// Turn captured `kubectl get pods -o json` output into a readiness report.
///
/// Console lines, or the CSV confirmation, are written to `out`. Returns
/// the number of pods reported.
///
/// # Examples
///
/// ```
/// use pod_ready_report::Output;
///
/// let json = r#"{"items": [{
///     "metadata": {"name": "web-0", "labels": {"app": "x"}},
///     "status": {"conditions": [
///         {"type": "PodScheduled", "lastTransitionTime": "2024-01-01T00:00:01Z"},
///         {"type": "Ready", "lastTransitionTime": "2024-01-01T00:00:05Z"}
///     ]}
/// }]}"#;
///
/// let mut out = Vec::new();
/// let count = pod_ready_report::report(&Output::Console, "shop", json, &mut out).unwrap();
/// assert_eq!(count, 1);
/// assert!(String::from_utf8(out).unwrap().ends_with("Duration until ready: 0:00:04\n"));
/// ```
pub fn report(
    output: &Output,
    namespace: &str,
    json: &str,
    out: &mut impl Write,
) -> Result<usize, ReportError> {
    let pods = PodList::from_json(json)?;
    tracing::debug!(pods = pods.len(), "Decoded pod listing");

    let reports = collect(&pods, namespace)?;
    match output {
        Output::Console => {
            for report in &reports {
                writeln!(out, "{}", ConsoleFormatter::format(report))?;
            }
        }
        Output::Csv(path) => {
            write_csv(path, &reports)?;
            writeln!(out, "CSV output saved to {}", path.display())?;
        }
    }

    tracing::debug!(reported = reports.len(), "Readiness report done");
    Ok(reports.len())
}

/// Write header and rows to `path`, replacing any existing file.
pub fn write_csv(path: &Path, reports: &[ReadinessReport]) -> Result<(), ReportError> {
    let file_error = |source| ReportError::File {
        path: path.to_path_buf(),
        source,
    };
    let file = fs::File::create(path).map_err(file_error)?;
    let mut writer = io::BufWriter::new(file);
    writer
        .write_all(CsvFormatter::format(reports).as_bytes())
        .map_err(file_error)?;
    writer.flush().map_err(file_error)
}
