// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Counting-sort buckets with head/tail insertion cursors.
//!
//! Every alphabet symbol owns a contiguous slot range `[start, end)` of the
//! suffix array, sized by its frequency. Induction pushes L-type suffixes at
//! the head (left to right) and S-type suffixes at the tail (right to left).
//!
//! ```text
//! text: b a n a n a $      (alphabet $ < a < b < n)
//!
//!         $ | a  a  a | b | n  n
//!  slot   0 | 1  2  3 | 4 | 5  6
//!           ^head   ^tail
//! ```
//!
//! The tail cursor is kept exclusive (one past the next free slot) so that an
//! empty bucket at slot 0 needs no signed arithmetic.

use crate::error::{Error, Result};

/// Slot range and insertion cursors for one symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bucket {
    pub start: usize,
    pub end: usize,
    head: usize,
    tail: usize,
}

impl Bucket {
    fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            head: start,
            tail: end,
        }
    }

    /// Number of slots owned by this symbol.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Next free slot from the left.
    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Next free slot from the right, `None` once the bucket is exhausted
    /// from that side.
    #[inline]
    pub fn tail(&self) -> Option<usize> {
        self.tail.checked_sub(1)
    }

    fn reset(&mut self) {
        self.head = self.start;
        self.tail = self.end;
    }
}

/// One [`Bucket`] per alphabet symbol.
#[derive(Clone, Debug)]
pub struct BucketTable {
    buckets: Vec<Bucket>,
    len: usize,
}

impl BucketTable {
    /// Histogram `text` and prefix-sum the counts into slot ranges.
    ///
    /// Fails with [`Error::AlphabetOverflow`] on the first symbol that is not
    /// below `alphabet_size`, and with [`Error::InvalidInput`] when the table
    /// for `alphabet_size` symbols cannot be allocated.
    pub fn build(text: &[usize], alphabet_size: usize) -> Result<Self> {
        if let Some(position) = text.iter().position(|&symbol| symbol >= alphabet_size) {
            return Err(Error::AlphabetOverflow {
                position,
                symbol: text[position],
                alphabet_size,
            });
        }

        let mut counts: Vec<usize> = Vec::new();
        let mut buckets: Vec<Bucket> = Vec::new();
        counts
            .try_reserve_exact(alphabet_size)
            .and_then(|()| buckets.try_reserve_exact(alphabet_size))
            .map_err(|e| {
                Error::invalid_input(format!(
                    "alphabet size {} too large for a bucket table: {}",
                    alphabet_size, e
                ))
            })?;

        counts.resize(alphabet_size, 0);
        for &symbol in text {
            counts[symbol] += 1;
        }

        let mut sum = 0;
        for count in counts {
            buckets.push(Bucket::new(sum, sum + count));
            sum += count;
        }

        Ok(Self {
            buckets,
            len: text.len(),
        })
    }

    /// Restore every cursor to its initial value. O(alphabet size).
    pub fn reset(&mut self) {
        for bucket in &mut self.buckets {
            bucket.reset();
        }
    }

    #[inline]
    pub fn bucket(&self, symbol: usize) -> &Bucket {
        &self.buckets[symbol]
    }

    pub fn alphabet_size(&self) -> usize {
        self.buckets.len()
    }

    /// Write `pos` at the head of `symbol`'s bucket and advance the head.
    #[inline]
    pub fn push_front(
        &mut self,
        sa: &mut [usize],
        symbol: usize,
        pos: usize,
        phase: &'static str,
    ) -> Result<()> {
        let bucket = &mut self.buckets[symbol];
        let slot = bucket.head;
        if slot >= bucket.end || slot >= self.len {
            return Err(Error::InternalInvariantViolation {
                phase,
                slot,
                len: self.len,
            });
        }
        sa[slot] = pos;
        bucket.head += 1;
        Ok(())
    }

    /// Write `pos` at the tail of `symbol`'s bucket and retreat the tail.
    #[inline]
    pub fn push_back(
        &mut self,
        sa: &mut [usize],
        symbol: usize,
        pos: usize,
        phase: &'static str,
    ) -> Result<()> {
        let bucket = &mut self.buckets[symbol];
        let slot = match bucket.tail.checked_sub(1) {
            Some(slot) if slot >= bucket.start && slot < self.len => slot,
            other => {
                return Err(Error::InternalInvariantViolation {
                    phase,
                    slot: other.unwrap_or(usize::MAX),
                    len: self.len,
                })
            }
        };
        sa[slot] = pos;
        bucket.tail = slot;
        Ok(())
    }
}
