use pod_ready_ext::PodRecordExt as _;

use super::*;

/// Transition times of the three condition types the report cares about
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReadinessTimes {
    pub ready: Option<OffsetDateTime>,
    pub scheduled: Option<OffsetDateTime>,
    pub containers_ready: Option<OffsetDateTime>,
}

impl ReadinessTimes {
    /// Resolve all three times in one pass over the conditions.
    ///
    /// When a type is listed more than once the last entry wins.
    pub fn from_conditions(conditions: &[ConditionEntry]) -> Result<Self, TimestampError> {
        let mut times = Self::default();
        for condition in conditions {
            let Some(kind) = condition.kind() else {
                continue;
            };
            let Some(time) = condition.transition_time()? else {
                continue;
            };
            let slot = match kind {
                ConditionType::Ready => &mut times.ready,
                ConditionType::PodScheduled => &mut times.scheduled,
                ConditionType::ContainersReady => &mut times.containers_ready,
            };
            *slot = Some(time);
        }
        Ok(times)
    }

    /// `ready - scheduled`, when both are known.
    pub fn until_ready(&self) -> Option<Duration> {
        Some(self.ready? - self.scheduled?)
    }
}

/// `ReadinessReport` is one line of console output or one CSV row
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadinessReport {
    pub name: String,
    pub namespace: String,
    /// Labels rendered as `key=value,key=value`.
    pub labels: String,
    pub ready: Option<OffsetDateTime>,
    pub scheduled: Option<OffsetDateTime>,
    pub containers_ready: Option<OffsetDateTime>,
    /// Present only when both `ready` and `scheduled` are.
    pub duration: Option<Duration>,
}

impl ReadinessReport {
    pub fn from_pod(pod: &PodRecord, namespace: &str) -> Result<Self, TimestampError> {
        let times = ReadinessTimes::from_conditions(pod.conditions())?;
        Ok(Self {
            name: pod.name().to_string(),
            namespace: pod.namespace_or(namespace).to_string(),
            labels: pod.label_string(),
            ready: times.ready,
            scheduled: times.scheduled,
            containers_ready: times.containers_ready,
            duration: times.until_ready(),
        })
    }

    pub fn is_complete(&self) -> bool {
        self.duration.is_some()
    }
}

/// Build reports for every pod that has both a `Ready` and a
/// `PodScheduled` time, keeping the listing order. Other pods are dropped
/// without notice.
pub fn collect(pods: &PodList, namespace: &str) -> Result<Vec<ReadinessReport>, TimestampError> {
    let mut reports = Vec::with_capacity(pods.len());
    for pod in &pods.items {
        let report = ReadinessReport::from_pod(pod, namespace)?;
        if report.is_complete() {
            reports.push(report);
        } else {
            tracing::debug!(
                pod = report.name.as_str(),
                "Skipping pod without Ready and PodScheduled times"
            );
        }
    }
    Ok(reports)
}
