//! Byte-stream abstraction for object channels.
//!
//! An object channel owns one inbound and one outbound stream. This crate
//! defines the two halves as traits — blocking [`Read`](std::io::Read) /
//! [`Write`](std::io::Write) plus advisory readability/writability flags and
//! a best-effort close — and implements them for the stream types a
//! host/worker pair actually uses: Unix sockets, TCP sockets, child-process
//! stdio, and the process's own stdio.
//!
//! [`duplex`] provides an in-memory blocking stream pair for tests and
//! loopback wiring.

pub mod duplex;
pub mod traits;

pub use duplex::{duplex, pipe, DuplexStream, PipeReader, PipeWriter};
pub use traits::{ReadHalf, WriteHalf};
