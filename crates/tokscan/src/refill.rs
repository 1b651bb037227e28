//! Stream-to-buffer bridge: pulls bytes from a reader into the byte window on
//! demand and tracks end of stream.
//!
//! End of stream is effectively tri-state: while `exhausted` is false more
//! data may still arrive; once a read returns zero bytes the flag is set and
//! never cleared, and the window may still hold residual unread bytes; when
//! the flag is set and the window is empty the stream is fully drained.

use std::io::{self, Read};

use crate::buffer::ByteBuffer;

#[derive(Debug)]
pub(crate) struct Refiller<R> {
    reader: R,
    buf: ByteBuffer,
    exhausted: bool,
}

impl<R: Read> Refiller<R> {
    pub(crate) fn new(reader: R, capacity: usize) -> Self {
        Self {
            reader,
            buf: ByteBuffer::with_capacity(capacity),
            exhausted: false,
        }
    }

    /// Whether the source has reported end of stream. Residual bytes may
    /// still be buffered.
    #[inline]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    #[inline]
    pub(crate) fn buffer(&self) -> &ByteBuffer {
        &self.buf
    }

    #[inline]
    pub(crate) fn buffer_mut(&mut self) -> &mut ByteBuffer {
        &mut self.buf
    }

    pub(crate) fn into_reader(self) -> R {
        self.reader
    }

    /// Guarantees at least `min` unread bytes are buffered, or that end of
    /// stream has been reached (in which case fewer, possibly zero, remain).
    /// Returns the number of unread bytes now available.
    ///
    /// Short reads are retried until enough data arrives or the source is
    /// exhausted; `ErrorKind::Interrupted` is retried transparently.
    ///
    /// # Panics
    ///
    /// Panics if `min` exceeds the window capacity. The request can never be
    /// satisfied, so this is a programming error, not a data error; scanner
    /// construction rejects such configurations up front.
    pub(crate) fn ensure_lookahead(&mut self, min: usize) -> io::Result<usize> {
        assert!(
            min <= self.buf.capacity(),
            "lookahead of {min} bytes exceeds buffer capacity of {}",
            self.buf.capacity()
        );
        if self.buf.available() >= min || self.exhausted {
            return Ok(self.buf.available());
        }
        self.buf.compact();
        while self.buf.available() < min {
            match self.reader.read(self.buf.spare_mut()) {
                Ok(0) => {
                    self.exhausted = true;
                    break;
                }
                Ok(n) => self.buf.commit(n),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(self.buf.available())
    }
}
