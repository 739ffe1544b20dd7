use std::path::PathBuf;

use clap::Parser;
use pod_ready_report::Output;

#[derive(Debug, Parser)]
#[command(name = "pod-ready-time")]
#[command(
    version,
    about = "Find out when Kubernetes pods in a namespace are ready, scheduled, and containers are ready."
)]
pub(crate) struct Args {
    /// Namespace of the pods
    pub(crate) namespace: String,

    /// Label selector for the pods
    #[arg(short, long)]
    pub(crate) label_selector: Option<String>,

    /// Generate CSV output
    #[arg(long)]
    pub(crate) csv: bool,

    /// CSV filename [default: pod_info_<NAMESPACE>.csv]
    #[arg(long, requires = "csv")]
    pub(crate) csv_filename: Option<PathBuf>,

    /// Kubeconfig context to query
    #[arg(long)]
    pub(crate) context: Option<String>,

    /// kubectl binary to run
    #[arg(long, env = "KUBECTL", default_value = "kubectl")]
    pub(crate) kubectl: String,
}

impl Args {
    pub(crate) fn output(&self) -> Output {
        if self.csv {
            Output::csv(&self.namespace, self.csv_filename.clone())
        } else {
            Output::Console
        }
    }
}
