// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Construction errors.
//!
//! Construction fails fast. Once an induction invariant is broken the
//! partially filled suffix array is meaningless, so nothing here is
//! recoverable mid-algorithm: every variant aborts the whole build.
//!
//! The validator in [`crate::verify`] does not use this type. It reports
//! structured [`ValidationResult`](crate::verify::ValidationResult) kinds
//! because it has to inspect arbitrary, possibly broken arrays.

use thiserror::Error;

/// Errors raised while building a suffix array or an LCP array.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input does not satisfy the entry point's preconditions.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input
        reason: String,
    },

    /// A text symbol is not below the declared alphabet size.
    #[error("symbol {symbol} at position {position} does not fit alphabet of size {alphabet_size}")]
    AlphabetOverflow {
        /// Text position holding the symbol
        position: usize,
        /// The offending symbol
        symbol: usize,
        /// Declared alphabet size
        alphabet_size: usize,
    },

    /// A bucket cursor left the suffix array during induction.
    #[error("internal invariant violated during {phase}: slot {slot} outside [0, {len})")]
    InternalInvariantViolation {
        /// Induction phase that produced the slot
        phase: &'static str,
        /// The computed slot (saturated at `usize::MAX` on underflow)
        slot: usize,
        /// Suffix array length
        len: usize,
    },
}

impl Error {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
