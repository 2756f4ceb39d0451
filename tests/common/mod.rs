//! Shared test utilities and fixtures.

#![allow(dead_code)]

// ============================================================================
// ORACLES
// ============================================================================

/// Suffix array by comparison sort. O(n² log n), fine for test sizes.
pub fn oracle_suffix_array(text: &[u8]) -> Vec<usize> {
    let mut sa: Vec<usize> = (0..text.len()).collect();
    sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
    sa
}

/// LCP array by comparing each adjacent pair directly.
pub fn oracle_lcp(text: &[u8], sa: &[usize]) -> Vec<usize> {
    let mut lcp = vec![0; sa.len()];
    for i in 1..sa.len() {
        lcp[i] = text[sa[i - 1]..]
            .iter()
            .zip(&text[sa[i]..])
            .take_while(|(a, b)| a == b)
            .count();
    }
    lcp
}

/// Panics unless every adjacent pair of suffixes is strictly increasing.
pub fn assert_sorted(text: &[u8], sa: &[usize]) {
    for i in 1..sa.len() {
        assert!(
            text[sa[i - 1]..] < text[sa[i]..],
            "suffixes out of order at rank {}: sa[{}] = {}, sa[{}] = {}",
            i,
            i - 1,
            sa[i - 1],
            i,
            sa[i]
        );
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

/// A text with its known suffix array and (where known) LCP array.
pub struct Scenario {
    pub name: &'static str,
    pub text: &'static [u8],
    pub sa: &'static [usize],
    pub lcp: Option<&'static [usize]>,
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "A",
        text: b"ababcabcabba$",
        sa: &[12, 11, 0, 8, 5, 2, 10, 1, 9, 6, 3, 7, 4],
        lcp: Some(&[0, 0, 1, 2, 2, 5, 0, 2, 1, 1, 4, 0, 3]),
    },
    Scenario {
        name: "B",
        text: b"immissiissippi$",
        sa: &[14, 13, 6, 0, 10, 3, 7, 2, 1, 12, 11, 5, 9, 4, 8],
        lcp: Some(&[0, 0, 1, 1, 1, 1, 4, 0, 1, 0, 1, 0, 2, 1, 3]),
    },
    Scenario {
        name: "C",
        text: b"abcabc",
        sa: &[3, 0, 4, 1, 5, 2],
        lcp: Some(&[0, 3, 0, 2, 0, 1]),
    },
    Scenario {
        name: "D",
        text: b"",
        sa: &[],
        lcp: Some(&[]),
    },
    Scenario {
        name: "E",
        text: b"ABANANABANDANA$",
        sa: &[14, 13, 0, 6, 11, 4, 2, 8, 1, 7, 10, 12, 5, 3, 9],
        lcp: Some(&[0, 0, 1, 4, 1, 3, 3, 2, 0, 3, 0, 0, 2, 2, 1]),
    },
    Scenario {
        name: "mississippi",
        text: b"mississippi",
        sa: &[10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2],
        lcp: Some(&[0, 1, 1, 4, 0, 0, 1, 0, 2, 1, 3]),
    },
    Scenario {
        name: "banana",
        text: b"banana",
        sa: &[5, 3, 1, 0, 4, 2],
        lcp: Some(&[0, 1, 3, 0, 0, 2]),
    },
];

/// Deterministic pseudo-random bytes over the first `sigma` letters.
pub fn pseudo_random_text(len: usize, sigma: u8, seed: u64) -> Vec<u8> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            b'a' + ((state >> 33) % sigma as u64) as u8
        })
        .collect()
}
