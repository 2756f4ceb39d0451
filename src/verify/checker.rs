// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Independent suffix array checker, after Yuta Mori's `sufcheck`.
//!
//! Never panics and never returns `Err`: it is meant to be pointed at
//! arbitrary candidate arrays, including broken ones, and say what is wrong.
//!
//! The positional check (step 4) replays the counting sort. Walking SA in
//! order, the suffix `sa[i] - 1` must sit at the next unfilled slot of the
//! bucket for `text[sa[i] - 1]`: if `sa` is sorted, prepending one symbol to
//! every suffix in order visits each bucket's members in order too. The last
//! suffix (length 1) is the first of its bucket and is matched when the scan
//! reaches `sa[i] == 0`.

use std::fmt;

use serde::Serialize;

const BYTE_VALUES: usize = 256;

/// Outcome of [`validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationResult {
    /// `sa` is the suffix array of `text`
    Ok,
    /// `sa` and `text` differ in length
    InvalidArguments { text_len: usize, sa_len: usize },
    /// `sa[index]` is not a text position
    OutOfRange { index: usize, value: usize },
    /// `value` occurs more than once
    Duplicate { value: usize },
    /// First symbols of `sa[index - 1]` and `sa[index]` are out of order
    WrongOrder { index: usize },
    /// The suffix induced from `sa[index]` is not where sorting puts it
    WrongPosition { index: usize },
}

impl ValidationResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, ValidationResult::Ok)
    }

    /// Numeric code of the classic checker: 0 for success, negative otherwise.
    pub fn code(&self) -> i32 {
        match self {
            ValidationResult::Ok => 0,
            ValidationResult::InvalidArguments { .. } => -1,
            ValidationResult::OutOfRange { .. } => -2,
            ValidationResult::WrongOrder { .. } => -3,
            ValidationResult::WrongPosition { .. } => -4,
            ValidationResult::Duplicate { .. } => -5,
        }
    }

    /// Short name for reports.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationResult::Ok => "ok",
            ValidationResult::InvalidArguments { .. } => "invalid_arguments",
            ValidationResult::OutOfRange { .. } => "out_of_range",
            ValidationResult::Duplicate { .. } => "duplicate",
            ValidationResult::WrongOrder { .. } => "wrong_order",
            ValidationResult::WrongPosition { .. } => "wrong_position",
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationResult::Ok => write!(f, "suffix array is valid"),
            ValidationResult::InvalidArguments { text_len, sa_len } => {
                write!(f, "sa.len() {} != text.len() {}", sa_len, text_len)
            }
            ValidationResult::OutOfRange { index, value } => {
                write!(f, "sa[{}] = {} is out of range", index, value)
            }
            ValidationResult::Duplicate { value } => {
                write!(f, "position {} appears more than once", value)
            }
            ValidationResult::WrongOrder { index } => {
                write!(f, "suffixes in wrong order at sa[{}]", index)
            }
            ValidationResult::WrongPosition { index } => {
                write!(f, "suffixes in wrong position at sa[{}]", index)
            }
        }
    }
}

/// Check that `sa` is the suffix array of `text`.
pub fn validate(text: &[u8], sa: &[usize]) -> ValidationResult {
    let result = run_checks(text, sa);
    if !result.is_ok() {
        log::debug!("sufcheck: {}", result);
    }
    result
}

fn run_checks(text: &[u8], sa: &[usize]) -> ValidationResult {
    let n = text.len();
    if sa.len() != n {
        return ValidationResult::InvalidArguments {
            text_len: n,
            sa_len: sa.len(),
        };
    }
    if n == 0 {
        return ValidationResult::Ok;
    }

    // 1. range [0, n)
    if let Some(index) = sa.iter().position(|&p| p >= n) {
        return ValidationResult::OutOfRange {
            index,
            value: sa[index],
        };
    }

    // 2. each position once
    let mut seen = vec![false; n];
    for &p in sa {
        if seen[p] {
            return ValidationResult::Duplicate { value: p };
        }
        seen[p] = true;
    }

    // 3. first symbols ascend
    for i in 1..n {
        if text[sa[i - 1]] > text[sa[i]] {
            return ValidationResult::WrongOrder { index: i };
        }
    }

    // 4. positions replay the counting sort
    let mut counts = [0usize; BYTE_VALUES];
    for &c in text {
        counts[c as usize] += 1;
    }
    let mut cursor: Vec<Option<usize>> = Vec::with_capacity(BYTE_VALUES);
    let mut sum = 0;
    for count in counts {
        cursor.push(Some(sum));
        sum += count;
    }

    let last = text[n - 1] as usize;
    let q = sum_before(&counts, last);
    cursor[last] = Some(q + 1);

    for (i, &suffix) in sa.iter().enumerate() {
        let (p, c, slot) = if suffix > 0 {
            let p = suffix - 1;
            let c = text[p] as usize;
            (p, c, cursor[c])
        } else {
            (n - 1, last, Some(q))
        };

        match slot {
            Some(t) if sa.get(t) == Some(&p) => {
                if t != q {
                    let next = t + 1;
                    cursor[c] = if next < n && text[sa[next]] as usize == c {
                        Some(next)
                    } else {
                        None
                    };
                }
            }
            _ => return ValidationResult::WrongPosition { index: i },
        }
    }

    ValidationResult::Ok
}

fn sum_before(counts: &[usize; BYTE_VALUES], symbol: usize) -> usize {
    counts[..symbol].iter().sum()
}
