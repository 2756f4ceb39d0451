// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: an independent checker and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **The checker** ([`validate`]) inspects any candidate suffix array and
//!    reports a structured [`ValidationResult`]. It never panics, so tests and
//!    fuzzers can throw broken arrays at it.
//!
//! 2. **Runtime contracts** ([`contracts`]) panic in debug builds when a
//!    construction step produces something malformed. Zero-cost in release,
//!    but they catch algorithmic errors when tests run.
//!
//! Use both. The contracts are cheap and local; the checker is thorough.

mod checker;
pub mod contracts;

pub use checker::{validate, ValidationResult};
