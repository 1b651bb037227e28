//! Property tests: parsed results must not depend on how the source chunks
//! its reads, and writer output must survive a scan round trip.

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use super::chunk_helpers::ChunkReader;
use crate::{ScanError, Scanner, ScannerOptions, Writer, WriterOptions};

const DELIMITERS: [&str; 4] = [" ", "\n", "\t", " \r\n  "];

fn render(values: &[i64], separators: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    for (i, v) in values.iter().enumerate() {
        let sep = DELIMITERS[usize::from(*separators.get(i).unwrap_or(&0)) % DELIMITERS.len()];
        out.extend_from_slice(sep.as_bytes());
        out.extend_from_slice(v.to_string().as_bytes());
    }
    out
}

/// Property: scanning reproduces the integer sequence exactly for every
/// combination of separators and read-chunk sizes.
#[test]
fn integer_sequence_independent_of_chunking() {
    fn prop(values: Vec<i64>, separators: Vec<u8>, sizes: Vec<usize>) -> bool {
        let input = render(&values, &separators);
        let sizes: Vec<usize> = if sizes.is_empty() {
            vec![1]
        } else {
            sizes.into_iter().map(|s| 1 + s % 97).collect()
        };
        let mut scanner = Scanner::with_options(
            ChunkReader::scripted(&input, sizes),
            ScannerOptions {
                buffer_capacity: 256,
                max_token_len: 64,
                skip_non_ascii: false,
            },
        );
        for expected in &values {
            match scanner.read_i64() {
                Ok(v) if v == *expected => {}
                _ => return false,
            }
        }
        matches!(scanner.read_i64(), Err(ScanError::EndOfInput))
    }

    QuickCheck::new()
        .tests(1000)
        .quickcheck(prop as fn(Vec<i64>, Vec<u8>, Vec<usize>) -> bool);
}

/// Property: writer output scans back to the values that were written,
/// regardless of output buffer capacity.
#[quickcheck]
fn writer_output_scans_back(values: Vec<i64>, capacity: usize) -> bool {
    let capacity = 32 + capacity % 512;
    let mut writer = Writer::with_options(
        Vec::new(),
        WriterOptions {
            capacity,
            ..WriterOptions::default()
        },
    );
    for v in &values {
        writer.write_i64(*v).unwrap();
        writer.newline().unwrap();
    }
    let out = writer.into_inner().unwrap();

    let mut scanner = Scanner::new(ChunkReader::fixed(&out, 3));
    for expected in &values {
        match scanner.read_i64() {
            Ok(v) if v == *expected => {}
            _ => return false,
        }
    }
    matches!(scanner.read_i64(), Err(ScanError::EndOfInput))
}

/// Property: float tokens produced by the writer parse back bit-exactly
/// (shortest round-trip formatting on one side, `str::parse` on the other).
#[quickcheck]
fn float_tokens_round_trip(values: Vec<f64>) -> bool {
    let values: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
    let mut writer = Writer::new(Vec::new());
    for v in &values {
        writer.write_f64(*v).unwrap();
        writer.newline().unwrap();
    }
    let out = writer.into_inner().unwrap();

    let mut scanner = Scanner::new(ChunkReader::fixed(&out, 5));
    for expected in &values {
        match scanner.read_f64() {
            Ok(v) if v == *expected || (v == 0.0 && *expected == 0.0) => {}
            _ => return false,
        }
    }
    true
}
