//! LCP strategies against fixed scenarios and each other.

use super::common::{oracle_lcp, pseudo_random_text, SCENARIOS};
use sufsort::lcp::{kasai, naive, phi};
use sufsort::{build_suffix_array, compute_lcp_array, inverse_suffix_array, Error, LcpStrategy};

#[test]
fn test_scenarios_every_strategy() {
    for scenario in SCENARIOS {
        let Some(expected) = scenario.lcp else { continue };
        for strategy in LcpStrategy::ALL {
            let lcp = compute_lcp_array(scenario.text, scenario.sa, strategy).unwrap();
            assert_eq!(lcp, expected, "scenario {} strategy {}", scenario.name, strategy);
        }
    }
}

#[test]
fn test_strategies_agree_on_repetitive_text() {
    let text: Vec<u8> = b"abaababaab".iter().copied().cycle().take(3000).collect();
    let sa = build_suffix_array(&text).unwrap();
    let expected = oracle_lcp(&text, &sa);
    assert_eq!(kasai(&text, &sa), expected);
    assert_eq!(phi(&text, &sa), expected);
    assert_eq!(naive(&text, &sa), expected);
}

#[test]
fn test_strategies_agree_on_pseudo_random_text() {
    for seed in 0..20 {
        let text = pseudo_random_text(700, 2 + (seed % 5) as u8, seed);
        let sa = build_suffix_array(&text).unwrap();
        let expected = oracle_lcp(&text, &sa);
        for strategy in LcpStrategy::ALL {
            assert_eq!(
                compute_lcp_array(&text, &sa, strategy).unwrap(),
                expected,
                "seed {} strategy {}",
                seed,
                strategy
            );
        }
    }
}

#[test]
fn test_single_symbol_run() {
    let text = vec![b'z'; 100];
    let sa = build_suffix_array(&text).unwrap();
    let lcp = compute_lcp_array(&text, &sa, LcpStrategy::Phi).unwrap();
    // sa = [99, 98, ..., 0], each suffix a prefix of the next
    let expected: Vec<usize> = (0..100).collect();
    assert_eq!(lcp, expected);
}

#[test]
fn test_first_entry_is_zero() {
    let text = b"zzzzzz";
    let sa = build_suffix_array(text).unwrap();
    for strategy in LcpStrategy::ALL {
        assert_eq!(compute_lcp_array(text, &sa, strategy).unwrap()[0], 0);
    }
}

#[test]
fn test_inverse_suffix_array() {
    let sa = [5, 3, 1, 0, 4, 2];
    let rank = inverse_suffix_array(&sa);
    assert_eq!(rank, vec![3, 2, 5, 1, 4, 0]);
    for (i, &pos) in sa.iter().enumerate() {
        assert_eq!(rank[pos], i);
    }
}

#[test]
fn test_rejects_mismatched_input() {
    let err = compute_lcp_array(b"banana", &[0, 1, 2], LcpStrategy::Kasai).unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));

    let err = compute_lcp_array(b"abc", &[0, 1, 9], LcpStrategy::Naive).unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
}
