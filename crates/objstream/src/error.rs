/// Errors surfaced by channel operations.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// The channel has been closed; no further reads or writes are possible.
    #[error("channel is closed")]
    Closed,

    /// Framing or transport failure on the underlying streams.
    #[error("frame error: {0}")]
    Frame(#[from] objstream_frame::FrameError),

    /// The payload could not be serialized or deserialized.
    #[error("codec error: {0}")]
    Codec(#[from] objstream_codec::CodecError),
}

pub type Result<T> = std::result::Result<T, ChannelError>;
