//! Suffix array construction against fixed scenarios and the sort oracle.

use super::common::{assert_sorted, oracle_suffix_array, pseudo_random_text, SCENARIOS};
use sufsort::sais::with_sentinel;
use sufsort::{build_suffix_array, build_suffix_array_with_alphabet, Error};

#[test]
fn test_scenarios() {
    for scenario in SCENARIOS {
        let sa = build_suffix_array(scenario.text).unwrap();
        assert_eq!(sa, scenario.sa, "scenario {}", scenario.name);
    }
}

#[test]
fn test_empty_text_has_empty_suffix_array() {
    assert_eq!(build_suffix_array(b"").unwrap(), Vec::<usize>::new());
}

#[test]
fn test_single_byte() {
    assert_eq!(build_suffix_array(b"x").unwrap(), vec![0]);
    assert_eq!(build_suffix_array(&[0]).unwrap(), vec![0]);
    assert_eq!(build_suffix_array(&[255]).unwrap(), vec![0]);
}

#[test]
fn test_runs_of_one_symbol() {
    for len in [2, 3, 17, 256] {
        let text = vec![b'a'; len];
        let expected: Vec<usize> = (0..len).rev().collect();
        assert_eq!(build_suffix_array(&text).unwrap(), expected, "len {}", len);
    }
}

#[test]
fn test_full_byte_range() {
    let text: Vec<u8> = (0..=255u8).rev().chain(0..=255u8).collect();
    let sa = build_suffix_array(&text).unwrap();
    assert_eq!(sa, oracle_suffix_array(&text));
}

#[test]
fn test_periodic_texts_recurse_correctly() {
    for period in [b"ab".as_slice(), b"abc", b"aab", b"abaab", b"abracadabra"] {
        let text: Vec<u8> = period.iter().copied().cycle().take(600).collect();
        let sa = build_suffix_array(&text).unwrap();
        assert_sorted(&text, &sa);
        assert_eq!(sa, oracle_suffix_array(&text));
    }
}

#[test]
fn test_fibonacci_word() {
    let mut a = b"a".to_vec();
    let mut b = b"ab".to_vec();
    while b.len() < 2000 {
        let next = [b.as_slice(), a.as_slice()].concat();
        a = std::mem::replace(&mut b, next);
    }
    let sa = build_suffix_array(&b).unwrap();
    assert_eq!(sa, oracle_suffix_array(&b));
}

#[test]
fn test_pseudo_random_texts_match_oracle() {
    for seed in 0..50 {
        for sigma in [1, 2, 4, 26] {
            let text = pseudo_random_text(1 + (seed as usize * 37) % 500, sigma, seed);
            let sa = build_suffix_array(&text).unwrap();
            assert_eq!(
                sa,
                oracle_suffix_array(&text),
                "seed {} sigma {}",
                seed,
                sigma
            );
        }
    }
}

#[test]
fn test_construction_is_deterministic() {
    let text = pseudo_random_text(5000, 3, 7);
    let first = build_suffix_array(&text).unwrap();
    let second = build_suffix_array(&text).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_integer_alphabet_keeps_sentinel_rank() {
    let text = with_sentinel(b"banana");
    let sa = build_suffix_array_with_alphabet(&text, 257).unwrap();
    assert_eq!(sa, vec![6, 5, 3, 1, 0, 4, 2]);
}

#[test]
fn test_integer_alphabet_compact_symbols() {
    // mississippi over {i=1, m=2, p=3, s=4} plus sentinel 0
    let text = [2, 1, 4, 4, 1, 4, 4, 1, 3, 3, 1, 0];
    let sa = build_suffix_array_with_alphabet(&text, 5).unwrap();
    assert_eq!(sa, vec![11, 10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]);
}

#[test]
fn test_integer_alphabet_rejects_bad_input() {
    // last symbol is not the minimum
    let err = build_suffix_array_with_alphabet(&[0, 1], 2).unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));

    // symbol outside the alphabet
    let err = build_suffix_array_with_alphabet(&[1, 7, 0], 3).unwrap_err();
    assert!(matches!(err, Error::AlphabetOverflow { position: 1, .. }));

    // a lone sentinel is still checked against the alphabet
    let err = build_suffix_array_with_alphabet(&[5], 3).unwrap_err();
    assert!(matches!(err, Error::AlphabetOverflow { position: 0, symbol: 5, .. }));
    let err = build_suffix_array_with_alphabet(&[0], 0).unwrap_err();
    assert!(matches!(err, Error::AlphabetOverflow { position: 0, .. }));
    assert_eq!(build_suffix_array_with_alphabet(&[0], 1).unwrap(), vec![0]);

    // an alphabet no bucket table can hold is an error, not an abort
    let err = build_suffix_array_with_alphabet(&[1, 0], usize::MAX).unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
}
