use serde::de::DeserializeOwned;
use serde::Serialize;

/// A payload type exchanged over an object channel.
///
/// `TYPE_NAME` is the stable logical name both ends of a connection agree
/// on. It stands in for build-specific type identity: resolution happens by
/// name, never by the version of the crate that defines the type, so a host
/// and worker rebuilt independently keep interoperating.
pub trait Message: Serialize + DeserializeOwned {
    /// Stable logical type name, unique within a channel's read set.
    const TYPE_NAME: &'static str;
}
