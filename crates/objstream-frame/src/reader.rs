use std::io::{ErrorKind, Read};

use bytes::{Bytes, BytesMut};

use crate::error::{FrameError, Result};
use crate::wire::{decode_length, FrameConfig, LENGTH_PREFIX_SIZE, UTF8_BOM};

/// Reads complete frames from any `Read` stream.
///
/// Handles partial payload reads internally — callers always get a whole
/// payload or an error, never a short buffer.
pub struct FrameReader<T> {
    inner: T,
    config: FrameConfig,
}

impl<T: Read> FrameReader<T> {
    /// Create a new frame reader with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, FrameConfig::default())
    }

    /// Create a new frame reader with explicit configuration.
    pub fn with_config(inner: T, config: FrameConfig) -> Self {
        Self { inner, config }
    }

    /// Read the next frame (blocking).
    ///
    /// Returns `Ok(None)` when the stream has ended cleanly or the peer sent
    /// a zero-length frame. The two cases are indistinguishable on the wire;
    /// both mean "nothing more to read".
    pub fn read_frame(&mut self) -> Result<Option<Bytes>> {
        let len = match self.read_length()? {
            Some(len) => len,
            None => return Ok(None),
        };
        if len == 0 {
            return Ok(None);
        }
        self.read_payload(len).map(Some)
    }

    /// Read the 4-byte length prefix with a single `read` call.
    ///
    /// A short read is a protocol violation unless the bytes are exactly the
    /// UTF-8 byte-order marker, which some intermediaries prepend ahead of
    /// the first frame; the marker is discarded and the prefix re-read.
    fn read_length(&mut self) -> Result<Option<usize>> {
        loop {
            let mut prefix = [0u8; LENGTH_PREFIX_SIZE];
            let read = read_once(&mut self.inner, &mut prefix)?;
            if read == 0 {
                return Ok(None);
            }
            if read != LENGTH_PREFIX_SIZE {
                if prefix[..read] == UTF8_BOM {
                    tracing::trace!("discarded UTF-8 byte-order marker before length prefix");
                    continue;
                }
                return Err(FrameError::ShortLengthPrefix {
                    expected: LENGTH_PREFIX_SIZE,
                    actual: read,
                });
            }

            let len = decode_length(prefix)?;
            if len > self.config.max_payload_size {
                return Err(FrameError::PayloadTooLarge {
                    size: len,
                    max: self.config.max_payload_size,
                });
            }
            return Ok(Some(len));
        }
    }

    /// Accumulate exactly `len` payload bytes across partial reads.
    fn read_payload(&mut self, len: usize) -> Result<Bytes> {
        let mut data = BytesMut::zeroed(len);
        let mut filled = 0usize;
        while filled < len {
            let read = match self.inner.read(&mut data[filled..]) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FrameError::Io(err)),
            };
            if read == 0 {
                return Err(FrameError::TruncatedPayload {
                    expected: len,
                    actual: filled,
                });
            }
            filled += read;
        }
        Ok(data.freeze())
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Current frame reader configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}

fn read_once<T: Read>(stream: &mut T, buf: &mut [u8]) -> Result<usize> {
    loop {
        match stream.read(buf) {
            Ok(read) => return Ok(read),
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(FrameError::Io(err)),
        }
    }
}
