use pod_ready_ext::DurationExt as _;
use pod_ready_ext::TimeExt as _;

use super::*;

const HEADER: [&str; 7] = [
    "Pod Name",
    "Namespace",
    "Labels",
    "Ready Time (UTC)",
    "PodScheduled Time (UTC)",
    "ContainersReady Time (UTC)",
    "Duration until ready",
];

const LINE_TERMINATOR: &str = "\r\n";

#[derive(Debug)]
pub struct CsvFormatter;

impl CsvFormatter {
    /// Header row followed by one row per report, each ending in `\r\n`.
    pub fn format(reports: &[ReadinessReport]) -> String {
        let mut text = String::new();
        push_row(&mut text, HEADER.map(str::to_string));
        for report in reports {
            push_row(&mut text, Self::row(report));
        }
        text
    }

    /// Missing times become empty cells.
    pub fn row(report: &ReadinessReport) -> [String; 7] {
        let time = |time: Option<OffsetDateTime>| {
            time.map_or_else(String::new, |time| time.to_utc_string())
        };
        [
            report.name.clone(),
            report.namespace.clone(),
            report.labels.clone(),
            time(report.ready),
            time(report.scheduled),
            time(report.containers_ready),
            report
                .duration
                .map_or_else(String::new, |duration| duration.to_clock_string()),
        ]
    }
}

fn push_row(text: &mut String, row: [String; 7]) {
    let escaped: Vec<String> = row.iter().map(String::as_str).map(escape).collect();
    text.push_str(&escaped.join(","));
    text.push_str(LINE_TERMINATOR);
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
