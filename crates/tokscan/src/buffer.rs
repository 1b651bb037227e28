//! Fixed-capacity byte window over the unread tail of a stream.
//!
//! The window is allocated once and reused for the life of the scanner; the
//! refill path compacts the unread slice to the front and appends fresh bytes
//! after it, so token spans are always contiguous in memory.
//!
//! Invariant: `0 <= offset <= len <= capacity`. `storage[offset..len]` is
//! valid unread data, `storage[len..]` is the append region.

#[derive(Debug)]
pub(crate) struct ByteBuffer {
    storage: Box<[u8]>,
    offset: usize,
    len: usize,
}

impl ByteBuffer {
    /// Allocates a window of exactly `capacity` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; a zero-sized window can never satisfy a
    /// lookahead request.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "buffer capacity must be non-zero");
        Self {
            storage: vec![0u8; capacity].into_boxed_slice(),
            offset: 0,
            len: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Number of unread bytes currently in the window.
    #[inline]
    pub(crate) fn available(&self) -> usize {
        self.len - self.offset
    }

    /// The unread slice `storage[offset..len]`.
    #[inline]
    pub(crate) fn unread(&self) -> &[u8] {
        &self.storage[self.offset..self.len]
    }

    /// Marks `n` unread bytes as consumed.
    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.available());
        self.offset += n;
    }

    /// Consumes `n` unread bytes and returns them as a span.
    ///
    /// The span stays valid until the next compaction, i.e. until the next
    /// refill; callers must not retain it across scanner calls.
    #[inline]
    pub(crate) fn take(&mut self, n: usize) -> &[u8] {
        debug_assert!(n <= self.available());
        let start = self.offset;
        self.offset += n;
        &self.storage[start..self.offset]
    }

    /// Moves the unread slice to the front so the append region is maximal.
    pub(crate) fn compact(&mut self) {
        if self.offset == 0 {
            return;
        }
        self.storage.copy_within(self.offset..self.len, 0);
        self.len -= self.offset;
        self.offset = 0;
    }

    /// The writable region after the valid data.
    #[inline]
    pub(crate) fn spare_mut(&mut self) -> &mut [u8] {
        &mut self.storage[self.len..]
    }

    /// Declares `n` bytes of the spare region as freshly read valid data.
    #[inline]
    pub(crate) fn commit(&mut self, n: usize) {
        debug_assert!(self.len + n <= self.capacity());
        self.len += n;
    }
}
