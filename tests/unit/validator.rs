//! The suffix array checker on correct and corrupted arrays.

use super::common::{pseudo_random_text, SCENARIOS};
use sufsort::{build_suffix_array, validate, ValidationResult};

#[test]
fn test_accepts_every_scenario() {
    for scenario in SCENARIOS {
        assert_eq!(
            validate(scenario.text, scenario.sa),
            ValidationResult::Ok,
            "scenario {}",
            scenario.name
        );
    }
}

#[test]
fn test_rejects_every_adjacent_swap() {
    for scenario in SCENARIOS {
        for i in 1..scenario.sa.len() {
            let mut sa = scenario.sa.to_vec();
            sa.swap(i - 1, i);
            let result = validate(scenario.text, &sa);
            assert!(
                matches!(
                    result,
                    ValidationResult::WrongOrder { .. } | ValidationResult::WrongPosition { .. }
                ),
                "scenario {} swap at {}: {}",
                scenario.name,
                i,
                result
            );
        }
    }
}

#[test]
fn test_rejects_distant_swaps() {
    let text = pseudo_random_text(300, 3, 11);
    let sa = build_suffix_array(&text).unwrap();
    for (a, b) in [(0, 299), (10, 200), (150, 151), (42, 43)] {
        let mut broken = sa.clone();
        broken.swap(a, b);
        assert!(!validate(&text, &broken).is_ok(), "swap {} <-> {}", a, b);
    }
}

#[test]
fn test_banana_swaps_report_specific_kinds() {
    // first characters fall out of order
    let result = validate(b"banana", &[5, 3, 1, 4, 0, 2]);
    assert_eq!(result, ValidationResult::WrongOrder { index: 4 });
    assert_eq!(result.code(), -3);

    // first characters still grouped, relative order broken
    let result = validate(b"banana", &[5, 1, 3, 0, 4, 2]);
    assert!(matches!(result, ValidationResult::WrongPosition { .. }));
    assert_eq!(result.code(), -4);
}

#[test]
fn test_structural_failures() {
    assert_eq!(
        validate(b"abc", &[0, 1]),
        ValidationResult::InvalidArguments {
            text_len: 3,
            sa_len: 2
        }
    );
    assert_eq!(
        validate(b"abc", &[0, 3, 1]),
        ValidationResult::OutOfRange { index: 1, value: 3 }
    );
    assert_eq!(
        validate(b"abc", &[2, 2, 1]),
        ValidationResult::Duplicate { value: 2 }
    );
}

#[test]
fn test_codes_are_stable() {
    assert_eq!(ValidationResult::Ok.code(), 0);
    assert_eq!(
        ValidationResult::InvalidArguments {
            text_len: 1,
            sa_len: 0
        }
        .code(),
        -1
    );
    assert_eq!(ValidationResult::OutOfRange { index: 0, value: 9 }.code(), -2);
    assert_eq!(ValidationResult::Duplicate { value: 0 }.code(), -5);
}
