//! Duplex, length-framed object channel for out-of-process workers.
//!
//! An [`ObjectChannel`] owns one inbound and one outbound byte stream
//! (possibly the two directions of the same transport) and exchanges
//! discrete, typed messages over them: reads block until a whole message
//! arrives or the stream ends, writes block until the framed message is
//! flushed. The read and write types may differ, so a host and its worker
//! each construct the channel with the roles swapped.
//!
//! ```no_run
//! use objstream::{DuplexChannel, Message};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Job { id: u32 }
//!
//! impl Message for Job {
//!     const TYPE_NAME: &'static str = "job";
//! }
//!
//! # fn main() -> Result<(), objstream::ChannelError> {
//! let (left, _right) = objstream::duplex();
//! let (rx, tx) = left.split();
//! let channel: DuplexChannel<Job, _, _> = DuplexChannel::new(rx, tx);
//! channel.write(&Job { id: 7 })?;
//! channel.close();
//! # Ok(())
//! # }
//! ```

pub mod channel;
pub mod error;
mod lifecycle;

pub use channel::{DuplexChannel, ObjectChannel};
pub use error::{ChannelError, Result};

pub use objstream_codec::{CodecError, Message, ObjectCodec, TaggedJsonCodec, TypeRegistry};
pub use objstream_frame::{FrameConfig, FrameError, FrameReader, FrameWriter};
pub use objstream_transport::{duplex, DuplexStream, PipeReader, PipeWriter, ReadHalf, WriteHalf};
