// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Φ-based LCP construction (Kärkkäinen, Manzini, Puglisi 2009).
//!
//! `phi[sa[i]] = sa[i - 1]` links every suffix to its SA predecessor. Scanning
//! text positions in order with the same decreasing-by-at-most-one bound as
//! Kasai fills the permuted LCP array in place; one gather step then puts the
//! values in SA order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// `phi` entry of the smallest suffix, which has no predecessor.
const NO_PREDECESSOR: usize = usize::MAX;

pub fn phi(text: &[u8], sa: &[usize]) -> Vec<usize> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }

    let mut plcp = vec![0; n];
    plcp[sa[0]] = NO_PREDECESSOR;
    for i in 1..n {
        plcp[sa[i]] = sa[i - 1];
    }

    // Overwrite each predecessor pointer with its match length
    let mut l = 0usize;
    for i in 0..n {
        let j = plcp[i];
        if j == NO_PREDECESSOR {
            plcp[i] = 0;
            l = 0;
            continue;
        }
        while i + l < n && j + l < n && text[i + l] == text[j + l] {
            l += 1;
        }
        plcp[i] = l;
        l = l.saturating_sub(1);
    }

    // Gather into SA order; every slot is independent
    #[cfg(feature = "parallel")]
    {
        sa.par_iter().map(|&pos| plcp[pos]).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        sa.iter().map(|&pos| plcp[pos]).collect()
    }
}
