// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for construction output.
//!
//! These are debug-mode assertions that run at the end of every build:
//!
//! 1. **Zero-cost in release builds** (the bodies are behind `debug_assertions`)
//! 2. **Early failure** at the recursion level that broke, not three levels up
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function      | Property                                       |
//! |------------------------|------------------------------------------------|
//! | `check_permutation`    | SA holds every position in `[0, n)` once       |
//! | `check_lcp_shape`      | `lcp.len() == sa.len()` and `lcp[0] == 0`      |
//!
//! Full sortedness is the validator's job ([`super::validate`]); it is too
//! expensive to assert on every recursion level.

use bitvec::prelude::*;

/// Check that `sa` is a permutation of `[0, n)`.
///
/// # Panics (debug builds only)
/// Panics on a wrong length, an out-of-range entry, or a repeated entry.
#[inline]
pub fn check_permutation(sa: &[usize], n: usize) {
    if !cfg!(debug_assertions) {
        return;
    }

    debug_assert_eq!(
        sa.len(),
        n,
        "Contract violation: Permutation - sa.len() {} != n {}",
        sa.len(),
        n
    );

    let mut seen = bitvec![0; n];
    for (i, &pos) in sa.iter().enumerate() {
        debug_assert!(
            pos < n,
            "Contract violation: Permutation - sa[{}] = {} outside [0, {})",
            i,
            pos,
            n
        );
        if pos < n {
            debug_assert!(
                !seen[pos],
                "Contract violation: Permutation - position {} appears twice (again at sa[{}])",
                pos,
                i
            );
            seen.set(pos, true);
        }
    }
}

/// Check the structural shape of an LCP array.
///
/// # Panics (debug builds only)
/// Panics if lengths differ or `lcp[0]` is not 0.
#[inline]
pub fn check_lcp_shape(n: usize, sa: &[usize], lcp: &[usize]) {
    debug_assert_eq!(
        lcp.len(),
        sa.len(),
        "Contract violation: LcpShape - lcp.len() {} != sa.len() {}",
        lcp.len(),
        sa.len()
    );
    debug_assert_eq!(lcp.len(), n, "Contract violation: LcpShape - lcp.len() != n");

    if let Some(&first) = lcp.first() {
        debug_assert_eq!(
            first, 0,
            "Contract violation: LcpShape - lcp[0] = {} (expected 0)",
            first
        );
    }
}
