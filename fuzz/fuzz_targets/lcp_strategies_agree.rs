// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for LCP construction.
//!
//! Kasai and Φ must produce identical arrays on every input. Small inputs
//! are also checked against the naive strategy.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sufsort::{build_suffix_array, compute_lcp_array, LcpStrategy};

/// Above this the quadratic strategy slows the fuzzer down too much.
const NAIVE_LIMIT: usize = 4096;

fuzz_target!(|data: &[u8]| {
    let sa = build_suffix_array(data).expect("byte input always builds");

    let kasai = compute_lcp_array(data, &sa, LcpStrategy::Kasai).expect("valid suffix array");
    let phi = compute_lcp_array(data, &sa, LcpStrategy::Phi).expect("valid suffix array");
    assert_eq!(kasai, phi);

    if data.len() <= NAIVE_LIMIT {
        let naive = compute_lcp_array(data, &sa, LcpStrategy::Naive).expect("valid suffix array");
        assert_eq!(kasai, naive);
    }
});
