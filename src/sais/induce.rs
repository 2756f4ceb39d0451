// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Induced sorting passes.
//!
//! Always applied in the order seed -> induce L -> induce S on a buffer
//! filled with [`EMPTY`]. Every pass runs over the whole array before the
//! next one starts: the bucket cursors are shared state whose meaning depends
//! on scan order.

use super::bucket::BucketTable;
use super::classify::SuffixTypes;
use super::EMPTY;
use crate::error::Result;

/// Place every LMS position at its bucket tail, in ascending text order.
///
/// Later LMS positions within a bucket end up left of earlier ones. The
/// order is only approximate; the two induction passes repair it.
pub fn seed_lms(
    text: &[usize],
    sa: &mut [usize],
    buckets: &mut BucketTable,
    types: &SuffixTypes,
) -> Result<()> {
    for pos in types.lms_positions() {
        buckets.push_back(sa, text[pos], pos, "seed LMS")?;
    }
    Ok(())
}

/// Place LMS positions whose relative order is already final.
///
/// `sorted_lms` is in ascending suffix order; it is walked from the largest
/// suffix down so each bucket's tail receives its largest LMS suffix first.
pub fn seed_sorted_lms(
    text: &[usize],
    sa: &mut [usize],
    buckets: &mut BucketTable,
    sorted_lms: &[usize],
) -> Result<()> {
    for &pos in sorted_lms.iter().rev() {
        buckets.push_back(sa, text[pos], pos, "seed sorted LMS")?;
    }
    Ok(())
}

/// Left-to-right pass: every filled slot `p > 0` whose predecessor `p - 1`
/// is L-type pushes `p - 1` at the head of its bucket.
pub fn induce_l(
    text: &[usize],
    sa: &mut [usize],
    buckets: &mut BucketTable,
    types: &SuffixTypes,
) -> Result<()> {
    for i in 0..sa.len() {
        let p = sa[i];
        if p == EMPTY || p == 0 {
            continue;
        }
        let j = p - 1;
        if types.is_l(j) {
            buckets.push_front(sa, text[j], j, "induce L")?;
        }
    }
    Ok(())
}

/// Right-to-left pass: resets the cursors, then every filled slot `p > 0`
/// whose predecessor is S-type (LMS included) pushes `p - 1` at the tail.
pub fn induce_s(
    text: &[usize],
    sa: &mut [usize],
    buckets: &mut BucketTable,
    types: &SuffixTypes,
) -> Result<()> {
    buckets.reset();
    for i in (0..sa.len()).rev() {
        let p = sa[i];
        if p == EMPTY || p == 0 {
            continue;
        }
        let j = p - 1;
        if types.is_s(j) {
            buckets.push_back(sa, text[j], j, "induce S")?;
        }
    }
    Ok(())
}

/// Seed, induce L, induce S on a fresh buffer. `sorted_lms` selects the
/// final pass; `None` is the first, approximate pass.
pub fn induced_sort(
    text: &[usize],
    buckets: &mut BucketTable,
    types: &SuffixTypes,
    sorted_lms: Option<&[usize]>,
) -> Result<Vec<usize>> {
    let mut sa = vec![EMPTY; text.len()];

    buckets.reset();
    match sorted_lms {
        Some(lms) => seed_sorted_lms(text, &mut sa, buckets, lms)?,
        None => seed_lms(text, &mut sa, buckets, types)?,
    }
    induce_l(text, &mut sa, buckets, types)?;
    induce_s(text, &mut sa, buckets, types)?;

    Ok(sa)
}
