// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Direct-comparison LCP construction, the reference for the linear-time
//! strategies. Each output slot depends only on two suffixes, so with the
//! `parallel` feature the slots are filled by rayon.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Length of the common prefix of two byte strings.
#[inline]
pub fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

pub fn naive(text: &[u8], sa: &[usize]) -> Vec<usize> {
    let mut lcp: Vec<usize> = vec![0; sa.len()];
    if sa.len() < 2 {
        return lcp;
    }

    #[cfg(feature = "parallel")]
    {
        lcp.par_iter_mut()
            .enumerate()
            .skip(1)
            .for_each(|(i, slot)| {
                *slot = common_prefix_len(&text[sa[i - 1]..], &text[sa[i]..]);
            });
    }

    #[cfg(not(feature = "parallel"))]
    {
        for i in 1..sa.len() {
            lcp[i] = common_prefix_len(&text[sa[i - 1]..], &text[sa[i]..]);
        }
    }

    lcp
}
