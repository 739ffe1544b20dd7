use std::io;
use std::io::Write;

use clap::Parser as _;
use pod_ready_kubectl::Kubectl;
use pod_ready_kubectl::KubectlError;

use args::Args;

mod args;

type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!(?args, "Starting pod-ready-time");

    run(&args, &mut io::stdout().lock()).await
}

async fn run(args: &Args, out: &mut impl Write) -> Result<(), Error> {
    let query = Kubectl::with_program(&args.kubectl)
        .context(args.context.clone())
        .get_pods(&args.namespace, args.label_selector.as_deref());

    let json = match query.output().await {
        Ok(json) => json,
        Err(KubectlError::Failed { stderr, .. }) => {
            writeln!(out, "Error retrieving pod information:")?;
            writeln!(out, "{stderr}")?;
            return Ok(());
        }
        Err(error) => return Err(error.into()),
    };

    let output = args.output();
    pod_ready_report::report(&output, &args.namespace, &json, out)?;

    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use std::ffi::OsStr;
    use std::path::Path;

    use clap::Parser as _;

    use super::*;

    fn args(kubectl: &str, csv: &Path) -> Args {
        Args::try_parse_from([
            OsStr::new("pod-ready-time"),
            OsStr::new("shop"),
            OsStr::new("--csv"),
            OsStr::new("--csv-filename"),
            csv.as_os_str(),
            OsStr::new("--kubectl"),
            OsStr::new(kubectl),
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn failed_query_writes_no_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pods.csv");
        let mut out = Vec::new();

        run(&args("false", &path), &mut out).await.unwrap();

        assert!(!path.exists());
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Error retrieving pod information:\n"));
        assert!(!out.contains("CSV output saved"));
    }

    #[tokio::test]
    async fn non_json_output_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pods.csv");
        let mut out = Vec::new();

        let result = run(&args("echo", &path), &mut out).await;

        assert!(result.is_err());
        assert!(!path.exists());
        assert!(out.is_empty());
    }
}
