//! Buffered output: formatted values accumulate in an owned buffer that is
//! pushed to the sink only when full, on explicit flush, or per logical write
//! in interactive mode.

use std::io::{self, Write};

use crate::options::{FlushPolicy, WriterOptions};

// Floor on the output buffer: a formatted value must always fit, and the
// widest fixed-size value is a signed 64-bit integer at 20 bytes.
const MIN_CAPACITY: usize = 32;

/// Buffered writer for whitespace-structured output.
///
/// Appends amortize the sink write cost: a flush happens only when the next
/// append would overflow the buffer (or after every logical write under
/// [`FlushPolicy::PerWrite`]). A payload larger than the whole buffer is
/// written straight through to the sink after a flush.
///
/// Dropping the writer flushes best-effort and swallows any error; call
/// [`flush`](Self::flush) (or [`into_inner`](Self::into_inner)) before the
/// writer goes out of scope, or buffered output can be silently lost.
///
/// Sink failures propagate immediately; bytes buffered but not yet flushed at
/// the point of failure are lost.
#[derive(Debug)]
pub struct Writer<W: Write> {
    sink: Option<W>,
    buf: Vec<u8>,
    capacity: usize,
    policy: FlushPolicy,
}

impl<W: Write> Writer<W> {
    /// Creates a writer with [`WriterOptions::default`].
    pub fn new(sink: W) -> Self {
        Self::with_options(sink, WriterOptions::default())
    }

    /// Creates a writer with explicit options.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is below 32 bytes: the buffer must always be able
    /// to hold one formatted value.
    pub fn with_options(sink: W, options: WriterOptions) -> Self {
        assert!(
            options.capacity >= MIN_CAPACITY,
            "writer capacity ({}) must be at least {MIN_CAPACITY} bytes",
            options.capacity
        );
        Self {
            sink: Some(sink),
            buf: Vec::with_capacity(options.capacity),
            capacity: options.capacity,
            policy: options.flush_policy,
        }
    }

    #[inline]
    fn sink_mut(&mut self) -> &mut W {
        self.sink.as_mut().expect("sink present until into_inner")
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        if let Some(sink) = self.sink.as_mut() {
            sink.write_all(&self.buf)?;
        }
        self.buf.clear();
        Ok(())
    }

    /// Appends bytes, flushing first if they would overflow the buffer. A
    /// payload at least as large as the buffer bypasses it entirely.
    fn append(&mut self, bytes: &[u8]) -> io::Result<()> {
        if self.buf.len() + bytes.len() > self.capacity {
            self.flush_buf()?;
        }
        if bytes.len() >= self.capacity {
            self.sink_mut().write_all(bytes)?;
        } else {
            self.buf.extend_from_slice(bytes);
        }
        Ok(())
    }

    /// One logical write has completed; in interactive mode that means push
    /// everything out now.
    fn end_record(&mut self) -> io::Result<()> {
        if self.policy == FlushPolicy::PerWrite {
            self.flush_buf()?;
            self.sink_mut().flush()?;
        }
        Ok(())
    }

    /// Appends a signed integer in decimal.
    ///
    /// # Errors
    ///
    /// Propagates sink write failures.
    pub fn write_i64(&mut self, value: i64) -> io::Result<()> {
        let mut tmp = [0u8; 20];
        let formatted = fmt_i64(value, &mut tmp);
        self.append(formatted)?;
        self.end_record()
    }

    /// Appends an unsigned integer in decimal.
    ///
    /// # Errors
    ///
    /// Propagates sink write failures.
    pub fn write_u64(&mut self, value: u64) -> io::Result<()> {
        let mut tmp = [0u8; 20];
        let len = fmt_digits(value, &mut tmp);
        let start = tmp.len() - len;
        self.append(&tmp[start..])?;
        self.end_record()
    }

    /// Appends a float using the shortest representation that round-trips.
    ///
    /// # Errors
    ///
    /// Propagates sink write failures.
    pub fn write_f64(&mut self, value: f64) -> io::Result<()> {
        write!(self, "{value}")?;
        self.end_record()
    }

    /// Appends raw bytes verbatim.
    ///
    /// # Errors
    ///
    /// Propagates sink write failures.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.append(bytes)?;
        self.end_record()
    }

    /// Appends a single `\n`.
    ///
    /// # Errors
    ///
    /// Propagates sink write failures.
    pub fn newline(&mut self) -> io::Result<()> {
        self.append(b"\n")?;
        self.end_record()
    }

    /// Writes all pending bytes to the sink and flushes the sink itself.
    /// Flushing an already-empty writer performs zero sink writes.
    ///
    /// # Errors
    ///
    /// Propagates sink write failures.
    pub fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.sink_mut().flush()
    }

    /// Flushes pending bytes and returns the sink.
    ///
    /// # Errors
    ///
    /// Propagates sink write failures; the writer is consumed either way.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.flush_buf()?;
        Ok(self.sink.take().expect("sink present until into_inner"))
    }
}

impl<W: Write> Write for Writer<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.append(data)?;
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Writer::flush(self)
    }
}

impl<W: Write> Drop for Writer<W> {
    fn drop(&mut self) {
        if self.sink.is_some() {
            // Errors at drop have nowhere to go; callers who need to observe
            // them must flush explicitly.
            let _ = self.flush_buf();
        }
    }
}

/// Formats `value` into the tail of `buf`, returning the digit count.
fn fmt_digits(mut value: u64, buf: &mut [u8; 20]) -> usize {
    let mut pos = buf.len();
    loop {
        pos -= 1;
        buf[pos] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    buf.len() - pos
}

/// Formats a signed value into the tail of `buf` (sign included), returning
/// the formatted suffix. `i64::MIN` formats via its unsigned magnitude.
fn fmt_i64(value: i64, buf: &mut [u8; 20]) -> &[u8] {
    let digits = fmt_digits(value.unsigned_abs(), buf);
    let mut start = buf.len() - digits;
    if value < 0 {
        start -= 1;
        buf[start] = b'-';
    }
    &buf[start..]
}
