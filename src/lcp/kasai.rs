// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kasai's linear-time LCP construction.

/// Inverse suffix array: `rank[sa[i]] = i`.
pub fn inverse_suffix_array(sa: &[usize]) -> Vec<usize> {
    let mut rank = vec![0; sa.len()];
    for (i, &pos) in sa.iter().enumerate() {
        rank[pos] = i;
    }
    rank
}

/// Kasai et al. (2001).
///
/// Visits suffixes in text order. If suffix `i` shares `l` symbols with its
/// SA predecessor, suffix `i + 1` shares at least `l - 1` with its own, so
/// `l` drops by at most one per step and the total work is O(n).
///
/// At the smallest suffix (`rank[i] == 0`) there is no predecessor to
/// compare with; `l` is reset to 0 there rather than carried over, the same
/// as the Φ variant does at its missing predecessor.
pub fn kasai(text: &[u8], sa: &[usize]) -> Vec<usize> {
    let n = text.len();
    let rank = inverse_suffix_array(sa);
    let mut lcp = vec![0; n];
    let mut l = 0usize;

    for i in 0..n {
        if rank[i] == 0 {
            // Smallest suffix: no predecessor, and no bound carries over
            l = 0;
            continue;
        }
        let j = sa[rank[i] - 1];
        while i + l < n && j + l < n && text[i + l] == text[j + l] {
            l += 1;
        }
        lcp[rank[i]] = l;
        l = l.saturating_sub(1);
    }

    lcp
}
