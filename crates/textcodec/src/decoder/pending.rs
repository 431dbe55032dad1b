//! Bounded staging area for decoded code units.
//!
//! Units are written into a working buffer whose capacity is fixed when the
//! decode starts. When the working buffer cannot take the next write it is
//! retired into an ordered list of chunks and a fresh one is started, so no
//! single allocation grows past the configured bound while the input is
//! being walked. [`PendingUnits::finish`] concatenates the chunks.
//!
//! Invariants
//! - `pending.len() <= capacity` at all times; `pending` never reallocates.
//! - `capacity >= 2`, so a surrogate pair always fits in one working buffer.
//! - The concatenation of `chunks` followed by `pending` is the output so far.

use alloc::vec::Vec;
use core::{cmp, mem};

#[derive(Debug)]
pub(crate) struct PendingUnits {
    pending: Vec<u16>,
    capacity: usize,
    chunks: Vec<Vec<u16>>,
}

impl PendingUnits {
    /// Sizes the working buffer for an input of `input_len` bytes.
    ///
    /// UTF-8 to UTF-16 never produces more units than there are bytes, so the
    /// buffer is `min(limit, input_len + 1)` entries, but at least two.
    pub(crate) fn for_input(input_len: usize, limit: usize) -> Self {
        let capacity = cmp::max(2, cmp::min(limit, input_len.saturating_add(1)));
        Self {
            pending: Vec::with_capacity(capacity),
            capacity,
            chunks: Vec::new(),
        }
    }

    #[inline]
    fn room(&self) -> usize {
        self.capacity - self.pending.len()
    }

    /// Makes sure the working buffer can take `n` more units (`n <= 2`).
    #[inline]
    fn reserve(&mut self, n: usize) {
        debug_assert!(n <= self.capacity);
        if self.room() < n {
            self.flush();
        }
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let full = mem::replace(&mut self.pending, Vec::with_capacity(self.capacity));
        self.chunks.push(full);
    }

    #[inline]
    pub(crate) fn push(&mut self, unit: u16) {
        self.reserve(1);
        self.pending.push(unit);
    }

    #[inline]
    pub(crate) fn push_pair(&mut self, high: u16, low: u16) {
        self.reserve(2);
        self.pending.push(high);
        self.pending.push(low);
    }

    /// Widens a run of ASCII bytes into code units.
    pub(crate) fn extend_ascii(&mut self, mut run: &[u8]) {
        debug_assert!(run.is_ascii());
        while !run.is_empty() {
            self.reserve(1);
            let (head, rest) = run.split_at(cmp::min(self.room(), run.len()));
            self.pending.extend(head.iter().copied().map(u16::from));
            run = rest;
        }
    }

    /// Number of retired chunks, not counting the working buffer.
    #[cfg(test)]
    pub(crate) fn retired(&self) -> usize {
        self.chunks.len()
    }

    pub(crate) fn finish(mut self) -> Vec<u16> {
        if self.chunks.is_empty() {
            return self.pending;
        }
        self.flush();
        self.chunks.concat()
    }
}
