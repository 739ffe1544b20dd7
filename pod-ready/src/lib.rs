use serde::Deserialize;
use serde::Serialize;

pub use condition::ConditionEntry;
pub use condition::ConditionType;
pub use timestamp::TimestampError;
pub use timestamp::parse_transition_time;

mod condition;
mod timestamp;

/// Pod labels, kept in the order they appear in the listing.
pub type Labels = serde_json::Map<String, serde_json::Value>;

/// `PodList` is the document printed by `kubectl get pods -o json`
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PodList {
    /// A missing `items` key is an empty listing, not an error.
    #[serde(default)]
    pub items: Vec<PodRecord>,
}

impl PodList {
    /// Decode the raw `kubectl` output.
    ///
    /// Malformed JSON is returned as an error; absent optional fields fall
    /// back to their empty defaults.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PodRecord {
    #[serde(default)]
    pub metadata: PodMetadata,
    #[serde(default)]
    pub status: PodStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PodMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default)]
    pub labels: Labels,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PodStatus {
    #[serde(default)]
    pub conditions: Vec<ConditionEntry>,
}

impl PodRecord {
    pub fn new(name: impl ToString) -> Self {
        let metadata = PodMetadata {
            name: name.to_string(),
            ..PodMetadata::default()
        };
        Self {
            metadata,
            ..Self::default()
        }
    }

    pub fn namespace(self, namespace: impl ToString) -> Self {
        let mut pod = self;
        pod.metadata.namespace = Some(namespace.to_string());
        pod
    }

    pub fn label(self, key: impl ToString, value: impl ToString) -> Self {
        let mut pod = self;
        pod.metadata
            .labels
            .insert(key.to_string(), value.to_string().into());
        pod
    }

    pub fn condition(self, condition: ConditionEntry) -> Self {
        let mut pod = self;
        pod.status.conditions.push(condition);
        pod
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn labels(&self) -> &Labels {
        &self.metadata.labels
    }

    pub fn conditions(&self) -> &[ConditionEntry] {
        &self.status.conditions
    }
}
