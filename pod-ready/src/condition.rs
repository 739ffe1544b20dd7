use std::fmt;

use time::OffsetDateTime;

use super::*;

/// `ConditionEntry` is one element of `status.conditions`
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionEntry {
    /// Condition type, e.g. `Ready` or `PodScheduled`.
    ///
    #[serde(rename = "type", default)]
    pub type_: String,

    /// Last time the condition transitioned from one status to another,
    /// ISO-8601 with a trailing `Z`.
    ///
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,
}

/// Condition types that take part in the readiness report
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConditionType {
    Ready,
    PodScheduled,
    ContainersReady,
}

impl ConditionType {
    pub const ALL: [Self; 3] = [Self::Ready, Self::PodScheduled, Self::ContainersReady];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::PodScheduled => "PodScheduled",
            Self::ContainersReady => "ContainersReady",
        }
    }

    pub fn from_type(type_: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == type_)
    }
}

impl fmt::Display for ConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl ConditionEntry {
    pub fn new(kind: impl ToString, last_transition_time: impl ToString) -> Self {
        Self {
            type_: kind.to_string(),
            last_transition_time: Some(last_transition_time.to_string()),
        }
    }

    /// `None` for condition types the report ignores.
    pub fn kind(&self) -> Option<ConditionType> {
        ConditionType::from_type(&self.type_)
    }

    pub fn transition_time(&self) -> Result<Option<OffsetDateTime>, TimestampError> {
        self.last_transition_time
            .as_deref()
            .map(parse_transition_time)
            .transpose()
    }
}
