use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire envelope wrapping every serialized message.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Envelope {
    /// Logical type tag: `name` or `name@qualifier`.
    #[serde(rename = "type")]
    pub tag: String,
    /// Serialized message body.
    pub body: Value,
}

/// Split a type tag into its simple name and optional build qualifier.
///
/// Resolution uses the simple name only. The qualifier carries build
/// metadata (version, revision) for diagnostics and is never matched.
pub fn split_tag(tag: &str) -> (&str, Option<&str>) {
    match tag.split_once('@') {
        Some((name, qualifier)) => (name, Some(qualifier)),
        None => (tag, None),
    }
}

pub(crate) fn format_tag(name: &str, qualifier: Option<&str>) -> String {
    match qualifier {
        Some(qualifier) => format!("{name}@{qualifier}"),
        None => name.to_string(),
    }
}
