//! Streaming whitespace-delimited token scanning and buffered output.
//!
//! The crate reads tokens (numbers or words separated by ASCII control and
//! space bytes) directly out of a fixed-capacity byte window refilled from any
//! [`std::io::Read`] source, and writes formatted output through a
//! fixed-capacity buffer flushed to any [`std::io::Write`] sink. Neither path
//! allocates per token.
//!
//! The central correctness hazard is the read boundary: a token that ends at
//! the edge of buffered data may end there because a delimiter follows, or
//! merely because the buffer ran dry mid-token. [`Scanner`] resolves this by
//! guaranteeing a full token's worth of lookahead before scanning a run, so a
//! span is only ever reported complete when bounded by an actual delimiter or
//! true end of stream. Parsed results are therefore independent of how the
//! source chunks its reads.
//!
//! ```
//! use std::io::Cursor;
//!
//! use tokscan::{Scanner, Writer};
//!
//! let mut scanner = Scanner::new(Cursor::new("  42   17\n-5"));
//! let mut out = Vec::new();
//! {
//!     let mut writer = Writer::new(&mut out);
//!     while let Ok(n) = scanner.read_i64() {
//!         writer.write_i64(n * 2).unwrap();
//!         writer.newline().unwrap();
//!     }
//!     writer.flush().unwrap();
//! }
//! assert_eq!(out, b"84\n34\n-10\n");
//! ```

mod buffer;
mod error;
mod numbers;
mod options;
mod refill;
mod scanner;
mod writer;

#[cfg(test)]
mod tests;

pub use error::{ScanError, TokenError};
pub use numbers::{parse_f64, parse_i64, parse_u64};
pub use options::{FlushPolicy, ScannerOptions, WriterOptions};
pub use scanner::Scanner;
pub use writer::Writer;
