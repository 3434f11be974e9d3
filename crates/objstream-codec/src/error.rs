/// Errors that can occur while encoding or decoding messages.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The outbound message could not be serialized.
    #[error("failed to serialize message: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The payload bytes do not decode to a valid message.
    #[error("failed to deserialize message: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// The payload's type tag resolves to no registered message type.
    #[error("unknown message type {0:?}")]
    UnknownType(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;
