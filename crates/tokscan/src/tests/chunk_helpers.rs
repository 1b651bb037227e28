//! Test doubles for the source/sink seams.
//!
//! `ChunkReader` serves a byte payload in caller-chosen read sizes so tests
//! can place refill boundaries anywhere, including mid-token. `CountingSink`
//! records every write call so flush-amortization claims are checkable.

use std::io::{self, Read, Write};

/// Serves `data` in reads of prescribed sizes, then signals end of stream.
#[derive(Debug)]
pub(crate) struct ChunkReader {
    data: Vec<u8>,
    pos: usize,
    sizes: Vec<usize>,
    next_size: usize,
}

impl ChunkReader {
    /// Every read returns at most `size` bytes.
    pub(crate) fn fixed(data: &[u8], size: usize) -> Self {
        Self::scripted(data, vec![size])
    }

    /// Read sizes follow `sizes`, cycling once the script runs out. Sizes are
    /// clamped to at least one byte so a scripted `0` never fakes an EOF.
    pub(crate) fn scripted(data: &[u8], sizes: Vec<usize>) -> Self {
        assert!(!sizes.is_empty());
        Self {
            data: data.to_vec(),
            pos: 0,
            sizes,
            next_size: 0,
        }
    }
}

impl Read for ChunkReader {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.data.len() {
            return Ok(0);
        }
        let scripted = self.sizes[self.next_size % self.sizes.len()].max(1);
        self.next_size += 1;
        let n = scripted.min(out.len()).min(self.data.len() - self.pos);
        out[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// Sink that records write-call count and the concatenated payload.
#[derive(Debug, Default)]
pub(crate) struct CountingSink {
    pub(crate) writes: usize,
    pub(crate) bytes: Vec<u8>,
}

impl Write for CountingSink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.writes += 1;
        self.bytes.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn chunk_reader_respects_script_and_eof() {
    let mut reader = ChunkReader::scripted(b"abcdef", vec![2, 3]);
    let mut buf = [0u8; 16];
    assert_eq!(reader.read(&mut buf).unwrap(), 2);
    assert_eq!(&buf[..2], b"ab");
    assert_eq!(reader.read(&mut buf).unwrap(), 3);
    assert_eq!(&buf[..3], b"cde");
    // Script cycles back to 2 but only one byte remains.
    assert_eq!(reader.read(&mut buf).unwrap(), 1);
    assert_eq!(reader.read(&mut buf).unwrap(), 0);
}
