use pod_ready_ext::DurationExt as _;
use pod_ready_ext::TimeExt as _;

use super::*;

#[derive(Debug)]
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn format(report: &ReadinessReport) -> String {
        let ReadinessReport {
            name,
            namespace,
            labels,
            ready,
            scheduled,
            containers_ready,
            duration,
        } = report;
        let ready = time_or_none(ready.as_ref());
        let scheduled = time_or_none(scheduled.as_ref());
        let containers_ready = time_or_none(containers_ready.as_ref());
        let duration = duration.map_or_else(|| NONE.to_string(), |d| d.to_clock_string());
        format!(
            "Pod '{name}' in Namespace '{namespace}' - Labels: {labels}, Ready: {ready} UTC, PodScheduled: {scheduled} UTC, ContainersReady: {containers_ready} UTC, Duration until ready: {duration}"
        )
    }
}

const NONE: &str = "None";

fn time_or_none(time: Option<&OffsetDateTime>) -> String {
    time.map_or_else(|| NONE.to_string(), |time| time.to_utc_string())
}
