//! Token scanner: delimiter skipping and lookahead-guaranteed token spans.
//!
//! Why this exists
//! - Reading one byte at a time from a pipe is architecturally slow; the
//!   scanner reframes it as "ensure lookahead, then scan within the window".
//!   All per-token work happens against a buffer the refiller keeps fed.
//! - The end of buffered data is ambiguous: a run may stop there because a
//!   delimiter follows, or because the buffer ran dry mid-token. The scanner
//!   removes the ambiguity by establishing `max_token_len` bytes of lookahead
//!   before scanning a run, so every span it returns is bounded by a real
//!   delimiter or true end of stream. Downstream parsing never needs to
//!   re-check completeness.
//!
//! Invariants
//! - `max_token_len <= buffer_capacity`, enforced at construction.
//! - A returned span is valid only until the next scanner call (the next
//!   refill may compact the window underneath it).
//! - Each scanner exclusively owns its reader and window; instances are not
//!   shared across threads.

use std::io::Read;

use bstr::BString;

use crate::{
    ScanError, ScannerOptions, TokenError,
    numbers,
    refill::Refiller,
};


/// Streaming tokenizer over whitespace-delimited input.
///
/// Delimiters are the bytes `0x00..=0x20` (all ASCII control characters and
/// space); everything else is token-constituent. See
/// [`ScannerOptions::skip_non_ascii`] for the garbage-tolerant variant that
/// also skips `0x80..=0xFF`.
///
/// Reads from the source may block; the scanner is synchronous and performs
/// no internal concurrency.
#[derive(Debug)]
pub struct Scanner<R> {
    source: Refiller<R>,
    max_token_len: usize,
    skip_non_ascii: bool,
}

impl<R: Read> Scanner<R> {
    /// Creates a scanner with [`ScannerOptions::default`].
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ScannerOptions::default())
    }

    /// Creates a scanner with explicit options.
    ///
    /// # Panics
    ///
    /// Panics if `max_token_len` is zero or exceeds `buffer_capacity`: the
    /// lookahead guarantee would be unsatisfiable, which is a configuration
    /// bug rather than a runtime data error.
    pub fn with_options(reader: R, options: ScannerOptions) -> Self {
        assert!(options.max_token_len > 0, "max_token_len must be non-zero");
        assert!(
            options.max_token_len <= options.buffer_capacity,
            "max_token_len ({}) must not exceed buffer_capacity ({})",
            options.max_token_len,
            options.buffer_capacity
        );
        Self {
            source: Refiller::new(reader, options.buffer_capacity),
            max_token_len: options.max_token_len,
            skip_non_ascii: options.skip_non_ascii,
        }
    }

    /// Returns the reader, discarding any buffered but unconsumed input.
    pub fn into_inner(self) -> R {
        self.source.into_reader()
    }

    #[inline]
    fn is_delimiter(&self, byte: u8) -> bool {
        byte <= b' ' || (self.skip_non_ascii && !byte.is_ascii())
    }

    /// Skips delimiters and returns the span of the next token, or `Ok(None)`
    /// once the stream is fully drained.
    ///
    /// The span borrows the internal window and is invalidated by the next
    /// call; parse it immediately. A non-delimiter run that reaches the end
    /// of buffered data while the source is still open triggers a refill and
    /// rescan rather than a truncated span.
    ///
    /// # Errors
    ///
    /// [`ScanError::Io`] if the source fails, or
    /// [`TokenError::TooLong`] if a run reaches the configured maximum token
    /// length; the ceiling is exclusive and applies identically however the
    /// source chunks its reads.
    pub fn next_token(&mut self) -> Result<Option<&[u8]>, ScanError> {
        loop {
            self.source.ensure_lookahead(self.max_token_len)?;
            let unread = self.source.buffer().unread();
            let skip = unread.iter().position(|&b| !self.is_delimiter(b));
            let buffered = unread.len();
            match skip {
                Some(n) => {
                    self.source.buffer_mut().advance(n);
                    break;
                }
                None => {
                    self.source.buffer_mut().advance(buffered);
                    if self.source.is_exhausted() {
                        return Ok(None);
                    }
                }
            }
        }

        // Skipping may have eaten into the lookahead window; re-establish it
        // so the token run can only end at a delimiter or true end of stream.
        let available = self.source.ensure_lookahead(self.max_token_len)?;
        let unread = self.source.buffer().unread();
        let run = unread
            .iter()
            .position(|&b| self.is_delimiter(b))
            .unwrap_or(available);
        if run >= self.max_token_len {
            // The ceiling is exclusive: a window of `max_token_len` bytes can
            // only prove completeness for runs strictly shorter than itself,
            // so a run that reaches it is rejected no matter where the
            // bounding delimiter would fall.
            return Err(TokenError::TooLong(self.max_token_len).into());
        }
        debug_assert!(run < available || self.source.is_exhausted());
        Ok(Some(self.source.buffer_mut().take(run)))
    }

    /// Reads the next token and parses it fully as a signed integer.
    ///
    /// `-0` yields `0`.
    ///
    /// # Errors
    ///
    /// [`ScanError::EndOfInput`] if no token remains, [`ScanError::Io`] on
    /// source failure, or [`ScanError::Malformed`] if the token is not
    /// entirely a valid `i64` (including trailing non-digit bytes).
    pub fn read_i64(&mut self) -> Result<i64, ScanError> {
        let span = self.next_token()?.ok_or(ScanError::EndOfInput)?;
        let (value, consumed) = numbers::parse_i64(span)?;
        if consumed < span.len() {
            return Err(TokenError::TrailingBytes(BString::from(span)).into());
        }
        Ok(value)
    }

    /// Reads the next token and parses it fully as an unsigned integer.
    ///
    /// # Errors
    ///
    /// As [`read_i64`](Self::read_i64); a leading `-` is malformed here.
    pub fn read_u64(&mut self) -> Result<u64, ScanError> {
        let span = self.next_token()?.ok_or(ScanError::EndOfInput)?;
        let (value, consumed) = numbers::parse_u64(span)?;
        if consumed < span.len() {
            return Err(TokenError::TrailingBytes(BString::from(span)).into());
        }
        Ok(value)
    }

    /// Reads the next token and parses it fully as a float.
    ///
    /// `-0` yields IEEE-754 negative zero.
    ///
    /// # Errors
    ///
    /// As [`read_i64`](Self::read_i64), with the float grammar of
    /// [`parse_f64`](crate::parse_f64).
    pub fn read_f64(&mut self) -> Result<f64, ScanError> {
        let span = self.next_token()?.ok_or(ScanError::EndOfInput)?;
        let (value, consumed) = numbers::parse_f64(span)?;
        if consumed < span.len() {
            return Err(TokenError::TrailingBytes(BString::from(span)).into());
        }
        Ok(value)
    }

    /// Reads the next token as UTF-8 text.
    ///
    /// The returned slice borrows the internal window and is invalidated by
    /// the next scanner call.
    ///
    /// # Errors
    ///
    /// [`ScanError::EndOfInput`] if no token remains, [`ScanError::Io`] on
    /// source failure, or [`TokenError::NotUtf8`] if the token bytes are not
    /// valid UTF-8.
    pub fn read_str(&mut self) -> Result<&str, ScanError> {
        let span = self.next_token()?.ok_or(ScanError::EndOfInput)?;
        match std::str::from_utf8(span) {
            Ok(text) => Ok(text),
            Err(_) => Err(TokenError::NotUtf8(BString::from(span)).into()),
        }
    }
}
