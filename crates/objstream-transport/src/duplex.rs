use std::collections::VecDeque;
use std::io::{self, Read, Write};
use std::sync::Arc;

use parking_lot::{Condvar, Mutex};

use crate::traits::{ReadHalf, WriteHalf};

/// One unidirectional in-memory byte pipe.
struct Pipe {
    state: Mutex<PipeState>,
    readable: Condvar,
}

#[derive(Default)]
struct PipeState {
    buf: VecDeque<u8>,
    write_closed: bool,
    read_closed: bool,
}

impl Pipe {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(PipeState::default()),
            readable: Condvar::new(),
        })
    }
}

/// Read end of an in-memory pipe. Blocks until bytes arrive or the write
/// end closes.
pub struct PipeReader {
    pipe: Arc<Pipe>,
}

/// Write end of an in-memory pipe.
pub struct PipeWriter {
    pipe: Arc<Pipe>,
}

/// Create a unidirectional in-memory pipe.
pub fn pipe() -> (PipeReader, PipeWriter) {
    let pipe = Pipe::new();
    (
        PipeReader {
            pipe: Arc::clone(&pipe),
        },
        PipeWriter { pipe },
    )
}

/// One end of an in-memory duplex byte stream.
///
/// Produced in connected pairs by [`duplex`]; what one end writes, the other
/// reads. [`split`](DuplexStream::split) separates the end into its two
/// halves so a channel can own them independently.
pub struct DuplexStream {
    reader: PipeReader,
    writer: PipeWriter,
}

/// Create a connected pair of in-memory duplex streams.
pub fn duplex() -> (DuplexStream, DuplexStream) {
    let (read_a, write_a) = pipe();
    let (read_b, write_b) = pipe();
    (
        DuplexStream {
            reader: read_a,
            writer: write_b,
        },
        DuplexStream {
            reader: read_b,
            writer: write_a,
        },
    )
}

impl DuplexStream {
    /// Split this end into its inbound and outbound halves.
    pub fn split(self) -> (PipeReader, PipeWriter) {
        (self.reader, self.writer)
    }
}

impl Read for PipeReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        let mut state = self.pipe.state.lock();
        while state.buf.is_empty() && !state.write_closed && !state.read_closed {
            self.pipe.readable.wait(&mut state);
        }

        if state.read_closed {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "read end closed",
            ));
        }
        if state.buf.is_empty() {
            return Ok(0); // write end closed, clean EOF
        }

        let n = buf.len().min(state.buf.len());
        for (slot, byte) in buf.iter_mut().zip(state.buf.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }
}

impl ReadHalf for PipeReader {
    fn is_readable(&self) -> bool {
        !self.pipe.state.lock().read_closed
    }

    fn close(&mut self) -> io::Result<()> {
        self.pipe.close_read();
        Ok(())
    }
}

impl Write for PipeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.pipe.state.lock();
        if state.read_closed {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "peer read end closed",
            ));
        }
        if state.write_closed {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "write end closed",
            ));
        }
        state.buf.extend(buf);
        drop(state);
        self.pipe.readable.notify_one();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl WriteHalf for PipeWriter {
    fn is_writable(&self) -> bool {
        let state = self.pipe.state.lock();
        !state.write_closed && !state.read_closed
    }

    fn close(&mut self) -> io::Result<()> {
        self.pipe.close_write();
        Ok(())
    }
}

impl Pipe {
    fn close_read(&self) {
        let mut state = self.state.lock();
        if !state.read_closed {
            state.read_closed = true;
            tracing::trace!("pipe read end closed");
        }
        drop(state);
        self.readable.notify_all();
    }

    fn close_write(&self) {
        let mut state = self.state.lock();
        if !state.write_closed {
            state.write_closed = true;
            tracing::trace!("pipe write end closed");
        }
        drop(state);
        self.readable.notify_all();
    }
}

impl Drop for PipeReader {
    fn drop(&mut self) {
        self.pipe.close_read();
    }
}

impl Drop for PipeWriter {
    fn drop(&mut self) {
        self.pipe.close_write();
    }
}

impl Read for DuplexStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl Write for DuplexStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl ReadHalf for DuplexStream {
    fn is_readable(&self) -> bool {
        self.reader.is_readable()
    }

    fn close(&mut self) -> io::Result<()> {
        self.reader.close()
    }
}

impl WriteHalf for DuplexStream {
    fn is_writable(&self) -> bool {
        self.writer.is_writable()
    }

    fn close(&mut self) -> io::Result<()> {
        self.writer.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_transfers_bytes() {
        let (mut reader, mut writer) = pipe();

        writer.write_all(b"hello").unwrap();
        let mut buf = [0u8; 5];
        reader.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"hello");
    }

    #[test]
    fn read_blocks_until_write() {
        let (mut reader, mut writer) = pipe();

        let handle = std::thread::spawn(move || {
            let mut buf = [0u8; 4];
            reader.read_exact(&mut buf).unwrap();
            buf
        });

        std::thread::sleep(std::time::Duration::from_millis(20));
        writer.write_all(b"late").unwrap();

        assert_eq!(&handle.join().unwrap(), b"late");
    }

    #[test]
    fn closed_write_end_yields_eof() {
        let (mut reader, mut writer) = pipe();
        writer.write_all(b"ab").unwrap();
        WriteHalf::close(&mut writer).unwrap();

        let mut buf = [0u8; 8];
        assert_eq!(reader.read(&mut buf).unwrap(), 2);
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn dropped_writer_yields_eof() {
        let (mut reader, writer) = pipe();
        drop(writer);

        let mut buf = [0u8; 1];
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn write_after_peer_read_close_fails() {
        let (mut reader, mut writer) = pipe();
        ReadHalf::close(&mut reader).unwrap();

        let err = writer.write(b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(!writer.is_writable());
    }

    #[test]
    fn duplex_ends_are_crossed() {
        let (mut left, mut right) = duplex();

        left.write_all(b"ping").unwrap();
        let mut buf = [0u8; 4];
        right.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"ping");

        right.write_all(b"pong").unwrap();
        left.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"pong");
    }

    #[test]
    fn split_halves_keep_working() {
        let (left, mut right) = duplex();
        let (mut rx, mut tx) = left.split();

        tx.write_all(b"out").unwrap();
        let mut buf = [0u8; 3];
        right.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"out");

        right.write_all(b"in!").unwrap();
        rx.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"in!");
    }

    #[test]
    fn dropped_end_unblocks_peer_reader() {
        let (left, mut right) = duplex();

        let handle = std::thread::spawn(move || {
            let mut buf = [0u8; 1];
            right.read(&mut buf).unwrap()
        });

        std::thread::sleep(std::time::Duration::from_millis(20));
        drop(left);

        assert_eq!(handle.join().unwrap(), 0);
    }
}
