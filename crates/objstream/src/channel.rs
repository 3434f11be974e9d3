use std::marker::PhantomData;

use parking_lot::Mutex;

use objstream_codec::{ObjectCodec, TaggedJsonCodec};
use objstream_frame::{FrameConfig, FrameReader, FrameWriter};
use objstream_transport::{ReadHalf, WriteHalf};

use crate::error::{ChannelError, Result};
use crate::lifecycle::Lifecycle;

/// A duplex, length-framed object channel over a pair of byte streams.
///
/// The channel owns both streams exclusively for its lifetime. `R` is the
/// inbound message type, `W` the outbound one; a host and its worker
/// construct the channel with the two swapped. Reading and writing from two
/// separate threads is safe — the directions share no mutable state except
/// the lifecycle flag — while concurrent reads (or concurrent writes)
/// serialize on the per-direction lock.
///
/// There is no internal timeout or cancellation: operations block inside
/// the underlying stream calls, and a close concurrent with an in-flight
/// operation waits for it. Callers that need to interrupt a blocked peer
/// must shut the transport down through their own handle.
pub struct ObjectChannel<R, W, In, Out, C = TaggedJsonCodec<R, W>> {
    reader: Mutex<FrameReader<In>>,
    writer: Mutex<FrameWriter<Out>>,
    codec: C,
    lifecycle: Lifecycle,
    _types: PhantomData<fn(&W) -> R>,
}

/// Symmetric channel reading and writing the same message type.
pub type DuplexChannel<T, In, Out, C = TaggedJsonCodec<T, T>> = ObjectChannel<T, T, In, Out, C>;

impl<R, W, In, Out, C> ObjectChannel<R, W, In, Out, C>
where
    In: ReadHalf,
    Out: WriteHalf,
    C: ObjectCodec<R, W>,
{
    /// Create a channel over an inbound and an outbound stream.
    ///
    /// Performs no I/O; the channel starts open.
    pub fn new(input: In, output: Out) -> Self
    where
        C: Default,
    {
        Self::with_codec(input, output, C::default())
    }

    /// Create a channel with an explicit codec.
    pub fn with_codec(input: In, output: Out, codec: C) -> Self {
        Self::with_parts(input, output, codec, FrameConfig::default())
    }

    /// Create a channel with an explicit codec and frame configuration.
    pub fn with_parts(input: In, output: Out, codec: C, config: FrameConfig) -> Self {
        Self {
            reader: Mutex::new(FrameReader::with_config(input, config.clone())),
            writer: Mutex::new(FrameWriter::with_config(output, config)),
            codec,
            lifecycle: Lifecycle::new(),
            _types: PhantomData,
        }
    }

    /// Whether the channel is still open.
    pub fn is_open(&self) -> bool {
        self.lifecycle.is_open()
    }

    /// Whether a read can be expected to make progress. Advisory: performs
    /// no I/O and is not atomic with a concurrent close. If the inbound
    /// stream is busy with an in-flight read it is presumed usable.
    pub fn can_read(&self) -> bool {
        self.lifecycle.is_open()
            && self
                .reader
                .try_lock()
                .map_or(true, |reader| reader.get_ref().is_readable())
    }

    /// Whether a write can be expected to make progress. Advisory, like
    /// [`can_read`](Self::can_read).
    pub fn can_write(&self) -> bool {
        self.lifecycle.is_open()
            && self
                .writer
                .try_lock()
                .map_or(true, |writer| writer.get_ref().is_writable())
    }

    /// Read one message (blocking).
    ///
    /// Returns `Ok(None)` when the peer closed its write direction or sent
    /// a zero-length frame — the wire does not distinguish a deliberate
    /// empty message from a closed stream, so neither can the caller.
    pub fn read(&self) -> Result<Option<R>> {
        if !self.lifecycle.is_open() {
            return Err(ChannelError::Closed);
        }

        let payload = self.reader.lock().read_frame()?;
        match payload {
            Some(payload) => Ok(Some(self.codec.decode(&payload)?)),
            None => Ok(None),
        }
    }

    /// Write one message (blocking), flushing the whole frame before
    /// returning.
    pub fn write(&self, message: &W) -> Result<()> {
        if !self.lifecycle.is_open() {
            return Err(ChannelError::Closed);
        }

        // Serialize outside the writer lock; only the framed write holds it.
        let payload = self.codec.encode(message)?;
        self.writer.lock().write_frame(&payload)?;
        Ok(())
    }

    /// Close the channel. Idempotent: the second and later calls are no-ops.
    ///
    /// The first call flips the lifecycle flag, then attempts to close the
    /// outbound stream, then the inbound stream. The attempts are
    /// independent — a failure on one does not prevent the other — and
    /// close-time errors are swallowed; closing is best-effort cleanup, not
    /// a place to propagate transport errors.
    pub fn close(&self) {
        if !self.lifecycle.close() {
            return;
        }

        if let Err(err) = WriteHalf::close(self.writer.lock().get_mut()) {
            tracing::debug!(error = %err, "closing outbound stream failed");
        }
        if let Err(err) = ReadHalf::close(self.reader.lock().get_mut()) {
            tracing::debug!(error = %err, "closing inbound stream failed");
        }
    }
}
