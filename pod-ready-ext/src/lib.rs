pub use pod_ready::Labels;
pub use pod_ready::PodRecord;

pub use clock::DurationExt;
pub use clock::TimeExt;

mod clock;

pub trait LabelsExt {
    /// `key=value` pairs joined by `,` in listing order.
    fn to_label_string(&self) -> String;
}

impl LabelsExt for Labels {
    fn to_label_string(&self) -> String {
        self.iter()
            // Non-string values print as JSON text.
            .map(|(key, value)| match value.as_str() {
                Some(value) => format!("{key}={value}"),
                None => format!("{key}={value}"),
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

pub trait PodRecordExt {
    /// Namespace from the pod metadata, or `fallback` when the listing
    /// left it out.
    fn namespace_or<'a>(&'a self, fallback: &'a str) -> &'a str;
    fn label_string(&self) -> String;
}

impl PodRecordExt for PodRecord {
    fn namespace_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.metadata.namespace.as_deref().unwrap_or(fallback)
    }

    fn label_string(&self) -> String {
        self.labels().to_label_string()
    }
}

pub fn default<T: Default>() -> T {
    T::default()
}
