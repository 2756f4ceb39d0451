// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! SA-IS: Suffix Array by Induced Sorting
//!
//! Linear-time O(n) suffix array construction algorithm.
//!
//! # Algorithm Overview
//!
//! ```text
//! Input: "banana"
//!
//! Step 1: Shift every byte up by one, append sentinel (0), classify
//! ┌───┬───┬───┬───┬───┬───┬───┐
//! │ b │ a │ n │ a │ n │ a │ $ │   ($ = sentinel, value 0)
//! ├───┼───┼───┼───┼───┼───┼───┤
//! │ L │ S │ L │ S │ L │ L │ S │   (S = smaller than next, L = larger)
//! └───┴───┴───┴───┴───┴───┴───┘
//!
//! Step 2: Find LMS (Leftmost S-type) positions
//!         LMS = S-type preceded by L-type
//!         Positions: 1, 3, 6
//!
//! Step 3: Induced sorting (approximate pass)
//!         - Place LMS suffixes at bucket tails
//!         - Induce L-type positions (left-to-right)
//!         - Induce S-type positions (right-to-left)
//!
//! Step 4: Name LMS substrings; if names repeat, recurse on the names
//!
//! Step 5: Seed the sorted LMS order and induce the final suffix array
//!
//! Output: [5, 3, 1, 0, 4, 2]   (sentinel rank dropped)
//! ```
//!
//! # Complexity
//!
//! - Time: O(n)
//! - Space: O(n); each level's reduced text is at most half as long
//!
//! # References
//!
//! - Nong, Zhang, Chan (2009): "Linear Suffix Array Construction by Almost Pure Induced-Sorting"
//! - <https://doi.org/10.1109/DCC.2009.42>

pub mod bucket;
pub mod classify;
pub mod induce;
pub mod reduce;

use crate::error::{Error, Result};
use crate::verify::contracts;

use bucket::BucketTable;
use classify::SuffixTypes;
use induce::induced_sort;
use reduce::reduce;

/// Empty suffix array slot.
pub const EMPTY: usize = usize::MAX;

/// Sentinel symbol appended to byte input (bytes are shifted up by one).
pub const SENTINEL: usize = 0;

/// Alphabet size of sentinel-terminated byte input: 256 bytes plus sentinel.
pub const BYTE_ALPHABET: usize = 257;

/// Build the suffix array of `bytes` in O(n) time.
///
/// `sa[i]` is the start of the i-th smallest suffix. A suffix that is a
/// strict prefix of another sorts first.
pub fn build_suffix_array(bytes: &[u8]) -> Result<Vec<usize>> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }

    let text = with_sentinel(bytes);
    let mut sa = sais_level(&text, BYTE_ALPHABET, 0)?;

    // The sentinel is the smallest suffix, always at rank 0
    debug_assert_eq!(sa[0], bytes.len());
    sa.remove(0);

    contracts::check_permutation(&sa, bytes.len());
    Ok(sa)
}

/// Build the suffix array of an integer text.
///
/// `text` must end with its sentinel: a final symbol strictly smaller than
/// every other symbol. Every symbol must be below `alphabet_size`. The
/// sentinel's own rank (always `n - 1` at index 0) is kept.
pub fn build_suffix_array_with_alphabet(text: &[usize], alphabet_size: usize) -> Result<Vec<usize>> {
    let Some((&sentinel, body)) = text.split_last() else {
        return Ok(Vec::new());
    };
    if let Some(position) = body.iter().position(|&c| c <= sentinel) {
        return Err(Error::invalid_input(format!(
            "last symbol {} is not a unique minimum sentinel (position {} holds {})",
            sentinel, position, body[position]
        )));
    }

    sais_level(text, alphabet_size, 0)
}

/// Shift every byte up by one and append [`SENTINEL`].
pub fn with_sentinel(bytes: &[u8]) -> Vec<usize> {
    let mut text = Vec::with_capacity(bytes.len() + 1);
    text.extend(bytes.iter().map(|&b| b as usize + 1));
    text.push(SENTINEL);
    text
}

/// One recursion level over a sentinel-terminated text.
fn sais_level(text: &[usize], alphabet_size: usize, depth: usize) -> Result<Vec<usize>> {
    let n = text.len();
    let mut buckets = BucketTable::build(text, alphabet_size)?;
    if n == 1 {
        return Ok(vec![0]);
    }

    let types = SuffixTypes::classify(text);

    // First pass orders the LMS substrings
    let approx = induced_sort(text, &mut buckets, &types, None)?;
    let reduced = reduce(text, &approx, &types);
    drop(approx);

    log::debug!(
        "sais level {}: n={} alphabet={} lms={} names={}",
        depth,
        n,
        buckets.alphabet_size(),
        types.lms_count(),
        reduced.alphabet_size
    );

    let reduced_sa = if reduced.names_are_unique() {
        log::trace!("sais level {}: LMS names unique, no recursion", depth);
        let mut reduced_sa = vec![0; reduced.text.len()];
        for (k, &name) in reduced.text.iter().enumerate() {
            reduced_sa[name] = k;
        }
        reduced_sa
    } else {
        sais_level(&reduced.text, reduced.alphabet_size, depth + 1)?
    };

    let sorted_lms: Vec<usize> = reduced_sa.iter().map(|&k| reduced.offsets[k]).collect();
    let sa = induced_sort(text, &mut buckets, &types, Some(&sorted_lms))?;

    contracts::check_permutation(&sa, n);
    Ok(sa)
}
