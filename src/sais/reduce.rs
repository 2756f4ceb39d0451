// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! LMS-substring naming.
//!
//! After the first induced pass, LMS substrings appear in SA in sorted
//! order. Walking SA once and comparing each LMS substring with the previous
//! one gives every substring a rank ("name"). Writing the names back in text
//! order yields the reduced text the next recursion level sorts.
//!
//! ```text
//! text:   c  a  b  b  a  g  e  $
//! LMS:       1        4        7
//! substr:    abba     age$     $
//! names:     1        2        0
//! reduced:   [1, 2, 0]   offsets: [1, 4, 7]
//! ```

use super::classify::SuffixTypes;
use super::EMPTY;

/// The reduced problem handed to the next recursion level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReducedText {
    /// One name per LMS position, in text order
    pub text: Vec<usize>,
    /// `offsets[k]` is the original position of `text[k]`
    pub offsets: Vec<usize>,
    /// Highest name plus one
    pub alphabet_size: usize,
}

impl ReducedText {
    /// Every LMS substring got its own name; the order is already total.
    #[inline]
    pub fn names_are_unique(&self) -> bool {
        self.alphabet_size == self.text.len()
    }
}

/// Name the LMS substrings in the order `sa` lists them.
pub fn reduce(text: &[usize], sa: &[usize], types: &SuffixTypes) -> ReducedText {
    let n = text.len();
    let mut names = vec![EMPTY; n];
    let mut name = 0usize;
    let mut prev: Option<usize> = None;

    for &pos in sa {
        if pos == EMPTY || !types.is_lms(pos) {
            continue;
        }
        if let Some(prev) = prev {
            if !lms_substrings_equal(text, types, prev, pos) {
                name += 1;
            }
        }
        names[pos] = name;
        prev = Some(pos);
    }

    let mut reduced = Vec::new();
    let mut offsets = Vec::new();
    for (pos, &name) in names.iter().enumerate() {
        if name != EMPTY {
            reduced.push(name);
            offsets.push(pos);
        }
    }

    let alphabet_size = if reduced.is_empty() { 0 } else { name + 1 };
    ReducedText {
        text: reduced,
        offsets,
        alphabet_size,
    }
}

/// Compare the LMS substrings starting at `a` and `b`, each running up to
/// and including the next LMS position.
///
/// Equal means every symbol matches and both close at the same offset. The
/// sentinel's substring equals nothing, and a comparison that runs off the
/// end of the text before both sides close is unequal.
pub fn lms_substrings_equal(text: &[usize], types: &SuffixTypes, a: usize, b: usize) -> bool {
    let n = text.len();
    if a == n - 1 || b == n - 1 {
        return false;
    }

    let mut k = 0;
    loop {
        let (pa, pb) = (a + k, b + k);
        if pa >= n || pb >= n {
            return false;
        }
        if text[pa] != text[pb] {
            return false;
        }
        if k > 0 {
            match (types.is_lms(pa), types.is_lms(pb)) {
                (true, true) => return true,
                (false, false) => {}
                _ => return false,
            }
        }
        k += 1;
    }
}
