/// Errors that can occur while framing or unframing messages.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// A length-prefix read returned fewer bytes than the prefix needs and
    /// byte-order-marker recovery did not apply. The stream is
    /// desynchronized and cannot be trusted for further framing.
    #[error("expected {expected} bytes but read {actual}")]
    ShortLengthPrefix { expected: usize, actual: usize },

    /// The length prefix decodes to a negative value.
    #[error("invalid frame length {0}")]
    InvalidLength(i32),

    /// The payload exceeds the configured maximum size.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// The stream ended before the declared payload length was fully read.
    #[error("payload truncated (declared {expected} bytes, received {actual})")]
    TruncatedPayload { expected: usize, actual: usize },

    /// The stream stopped accepting bytes while a frame was being written.
    #[error("connection closed (incomplete frame)")]
    ConnectionClosed,

    /// An I/O error occurred while reading or writing frames.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FrameError>;
