// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for suffix array construction.
//!
//! Any byte string must produce a suffix array the independent checker
//! accepts. Construction must never panic or return an error for bytes.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sufsort::{build_suffix_array, validate};

fuzz_target!(|data: &[u8]| {
    let sa = build_suffix_array(data).expect("byte input always builds");
    assert_eq!(sa.len(), data.len());

    let result = validate(data, &sa);
    assert!(result.is_ok(), "checker rejected constructed array: {}", result);

    // Swapping two ranks must always be caught
    if sa.len() >= 2 {
        let mut broken = sa.clone();
        let i = data[0] as usize % sa.len();
        let j = (i + 1 + data[data.len() - 1] as usize % (sa.len() - 1)) % sa.len();
        broken.swap(i, j);
        assert!(!validate(data, &broken).is_ok(), "swap {} <-> {} went unnoticed", i, j);
    }
});
