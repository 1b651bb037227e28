//! Configuration for scanners and writers.
//!
//! Plain `Copy` structs consumed at construction; there is no runtime
//! reconfiguration. Capacity relationships are validated when the owning
//! component is built, and violations panic: they are programming errors, not
//! data errors.

/// Configuration for a [`Scanner`](crate::Scanner).
#[derive(Debug, Clone, Copy)]
pub struct ScannerOptions {
    /// Size in bytes of the reusable input window, allocated once.
    ///
    /// Larger windows amortize read syscalls over more tokens. Must be at
    /// least [`max_token_len`](Self::max_token_len).
    ///
    /// # Default
    ///
    /// 64 KiB.
    pub buffer_capacity: usize,

    /// Exclusive upper bound on the byte length of a single token.
    ///
    /// The scanner guarantees this much lookahead before scanning a token
    /// run, which is what makes a reported span trustworthy: a run can only
    /// end at a real delimiter or at true end of stream, never at a buffer
    /// boundary. That much lookahead can confirm completeness only for runs
    /// strictly shorter than itself, so any run reaching this length is
    /// reported as [`TokenError::TooLong`](crate::TokenError::TooLong) —
    /// uniformly, regardless of how reads happen to land. Valid tokens may be
    /// at most `max_token_len - 1` bytes.
    ///
    /// # Default
    ///
    /// 1200 bytes, comfortably above the longest valid numeric literal.
    pub max_token_len: usize,

    /// Whether bytes `0x80..=0xFF` are treated as additional delimiters.
    ///
    /// Useful when the input may carry encoding noise around otherwise clean
    /// ASCII tokens. Off by default: non-ASCII bytes are token-constituent
    /// and surface later as [`TokenError::NotUtf8`](crate::TokenError::NotUtf8)
    /// or a malformed number.
    ///
    /// # Default
    ///
    /// `false`.
    pub skip_non_ascii: bool,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            buffer_capacity: 1 << 16,
            max_token_len: 1200,
            skip_non_ascii: false,
        }
    }
}

/// When a [`Writer`](crate::Writer) pushes buffered bytes to its sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlushPolicy {
    /// Flush only when the buffer would overflow or on explicit
    /// [`flush`](crate::Writer::flush). The bulk-throughput mode.
    #[default]
    Buffered,

    /// Flush after every logical write (`write_i64`, `newline`, ...), trading
    /// throughput for responsiveness on interactive streams.
    PerWrite,
}

/// Configuration for a [`Writer`](crate::Writer).
#[derive(Debug, Clone, Copy)]
pub struct WriterOptions {
    /// Size in bytes of the output buffer, allocated once.
    ///
    /// Must exceed the longest formatted value the writer can produce (a
    /// small constant); the writer enforces a floor of 32 bytes.
    ///
    /// # Default
    ///
    /// 64 KiB.
    pub capacity: usize,

    /// When buffered bytes are pushed to the sink.
    ///
    /// # Default
    ///
    /// [`FlushPolicy::Buffered`].
    pub flush_policy: FlushPolicy,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            capacity: 1 << 16,
            flush_policy: FlushPolicy::Buffered,
        }
    }
}
