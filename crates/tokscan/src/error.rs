//! Error taxonomy for scanning and parsing.

use std::io;

use bstr::BString;
use thiserror::Error;

/// Failure surfaced while pulling or parsing tokens from a stream.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The underlying source failed mid-read.
    #[error("read failed: {0}")]
    Io(#[from] io::Error),

    /// A token was requested but the stream holds no more. This is the
    /// ordinary end-of-input condition, distinct from a malformed token.
    #[error("end of input")]
    EndOfInput,

    /// A complete token was found but its bytes do not form the requested
    /// value.
    #[error(transparent)]
    Malformed(#[from] TokenError),
}

/// Why a complete token failed to parse as the requested value.
///
/// Variants carry the offending bytes as a [`BString`] so diagnostics stay
/// readable even when the input is not valid UTF-8.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// No ASCII digits where at least one was required (e.g. a bare `-`).
    #[error("no digits in token '{0}'")]
    NoDigits(BString),

    /// The value does not fit the target integer type.
    #[error("integer overflow in token '{0}'")]
    Overflow(BString),

    /// A full-token parse was requested but bytes remained after the number
    /// (e.g. `12a`).
    #[error("trailing bytes after number in token '{0}'")]
    TrailingBytes(BString),

    /// A decimal point with no digit after it.
    #[error("decimal point with no following digits in token '{0}'")]
    EmptyFraction(BString),

    /// An exponent marker with no digit after it (e.g. `1e` or `1e+`).
    #[error("exponent with no digits in token '{0}'")]
    EmptyExponent(BString),

    /// A textual token was requested but the bytes are not valid UTF-8.
    #[error("token is not valid UTF-8: '{0}'")]
    NotUtf8(BString),

    /// A non-delimiter run reached the configured maximum token length
    /// (an exclusive ceiling), so its true end cannot be trusted within the
    /// buffer window. Unlike the other variants this one carries no token
    /// bytes: the run may extend past what was ever buffered, and a prefix
    /// would misrepresent the token.
    #[error("token reached the maximum length of {0} bytes")]
    TooLong(usize),
}
