// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! S/L suffix classification.
//!
//! ```text
//! text:   m  m  i  s  s  i  s  s  i  i  s  s  i  p  p  i  $
//! type:   L  L  S  L  L  S  L  L  S  S  L  L  S  L  L  L  S
//! LMS:          *        *        *           *           *
//! ```
//!
//! One bit per position: set means S-type. LMS is never stored, it is read
//! off two adjacent bits.

use bitvec::prelude::*;

/// Packed S/L classification of every position of a text.
#[derive(Clone, Debug)]
pub struct SuffixTypes {
    is_s: BitVec,
}

impl SuffixTypes {
    /// Classify every position of `text`, scanning right to left.
    ///
    /// The last position is always S-type: it holds the sentinel, the unique
    /// minimum. Equal neighbours inherit the type of the right neighbour.
    pub fn classify<T: Ord>(text: &[T]) -> Self {
        let n = text.len();
        let mut is_s = bitvec![0; n];
        if n == 0 {
            return Self { is_s };
        }

        is_s.set(n - 1, true);
        for i in (0..n - 1).rev() {
            let s_type = match text[i].cmp(&text[i + 1]) {
                std::cmp::Ordering::Less => true,
                std::cmp::Ordering::Greater => false,
                std::cmp::Ordering::Equal => is_s[i + 1],
            };
            is_s.set(i, s_type);
        }

        Self { is_s }
    }

    /// Number of classified positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.is_s.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.is_s.is_empty()
    }

    #[inline]
    pub fn is_s(&self, i: usize) -> bool {
        self.is_s[i]
    }

    #[inline]
    pub fn is_l(&self, i: usize) -> bool {
        !self.is_s[i]
    }

    /// S-type position whose left neighbour is L-type. Position 0 never is.
    #[inline]
    pub fn is_lms(&self, i: usize) -> bool {
        i > 0 && i < self.is_s.len() && self.is_s[i] && !self.is_s[i - 1]
    }

    /// LMS positions in ascending text order.
    pub fn lms_positions(&self) -> impl Iterator<Item = usize> + '_ {
        (1..self.len()).filter(move |&i| self.is_lms(i))
    }

    /// Number of LMS positions.
    pub fn lms_count(&self) -> usize {
        self.lms_positions().count()
    }
}
