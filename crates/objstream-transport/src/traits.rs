use std::io::{Read, Write};
use std::net::{Shutdown, TcpStream};
#[cfg(unix)]
use std::os::unix::net::UnixStream;
use std::process::{ChildStdin, ChildStdout};

/// Inbound half of a channel transport.
///
/// `is_readable` is advisory: it reports whether the stream can currently
/// service reads, performs no I/O, and is not synchronized with a concurrent
/// close. `close` shuts down the read direction where the transport supports
/// it; it is best-effort and may be a no-op.
pub trait ReadHalf: Read {
    /// Whether the stream can currently service reads. Advisory only.
    fn is_readable(&self) -> bool {
        true
    }

    /// Close the read direction.
    fn close(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Outbound half of a channel transport.
///
/// The mirror of [`ReadHalf`] for the write direction.
pub trait WriteHalf: Write {
    /// Whether the stream can currently service writes. Advisory only.
    fn is_writable(&self) -> bool {
        true
    }

    /// Close the write direction.
    fn close(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(unix)]
impl ReadHalf for UnixStream {
    fn close(&mut self) -> std::io::Result<()> {
        self.shutdown(Shutdown::Read)
    }
}

#[cfg(unix)]
impl WriteHalf for UnixStream {
    fn close(&mut self) -> std::io::Result<()> {
        self.shutdown(Shutdown::Write)
    }
}

impl ReadHalf for TcpStream {
    fn close(&mut self) -> std::io::Result<()> {
        self.shutdown(Shutdown::Read)
    }
}

impl WriteHalf for TcpStream {
    fn close(&mut self) -> std::io::Result<()> {
        self.shutdown(Shutdown::Write)
    }
}

// Host side of a spawned worker: the worker's stdout is our inbound stream,
// its stdin our outbound stream. OS pipes have no half-close operation
// beyond dropping the handle, so close only flushes where that means
// anything; dropping the channel delivers EOF to the peer.

impl ReadHalf for ChildStdout {}

impl WriteHalf for ChildStdin {
    fn close(&mut self) -> std::io::Result<()> {
        self.flush()
    }
}

// Worker side: the channel runs over the process's own stdio.

impl ReadHalf for std::io::Stdin {}

impl WriteHalf for std::io::Stdout {
    fn close(&mut self) -> std::io::Result<()> {
        self.flush()
    }
}

// In-memory streams, mostly for tests and captures.

impl<T: AsRef<[u8]>> ReadHalf for std::io::Cursor<T> {}

impl WriteHalf for std::io::Cursor<Vec<u8>> {}

impl WriteHalf for Vec<u8> {}
