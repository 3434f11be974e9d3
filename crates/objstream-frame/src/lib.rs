//! Length-prefixed message framing for duplex object channels.
//!
//! Every message is framed as a 4-byte signed length prefix in network
//! (big-endian) byte order, followed by exactly that many payload bytes.
//! A zero-length prefix is the "no object" sentinel: readers treat it the
//! same as a cleanly ended stream.
//!
//! No partial reads, no buffer management in user code — [`FrameReader`]
//! reassembles payloads delivered across many short physical reads, and
//! [`FrameWriter`] flushes each frame as one complete transport-visible
//! unit.

pub mod error;
pub mod reader;
pub mod wire;
pub mod writer;

pub use error::{FrameError, Result};
pub use reader::FrameReader;
pub use wire::{FrameConfig, DEFAULT_MAX_PAYLOAD, LENGTH_PREFIX_SIZE, UTF8_BOM};
pub use writer::FrameWriter;
