//! Linear-time suffix arrays and LCP arrays.
//!
//! This crate builds the suffix array of a byte string with SA-IS (induced
//! sorting, O(n)) and derives its LCP array with one of three strategies.
//! An independent checker verifies any candidate suffix array.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ sais::       │────▶│ sais::       │────▶│ sais::       │
//! │ classify     │     │ bucket       │     │ induce       │
//! │ (S/L/LMS)    │     │ (head/tail)  │     │ (seed, L, S) │
//! └──────────────┘     └──────────────┘     └──────┬───────┘
//!                                                  │
//!        ┌─────────────── recurse ◀────────────────┤
//!        ▼                                         ▼
//! ┌──────────────┐                          ┌──────────────┐
//! │ sais         │◀─────── names ───────────│ sais::reduce │
//! │ (builder)    │                          │ (LMS names)  │
//! └──────┬───────┘                          └──────────────┘
//!        │ suffix array
//!        ▼
//! ┌──────────────┐     ┌─────────────────────────────────┐
//! │ lcp          │     │ verify (checker + contracts)    │
//! │ naive/kasai/ │     │ tests and debug builds only     │
//! │ phi          │     │                                 │
//! └──────────────┘     └─────────────────────────────────┘
//! ```
//!
//! Construction is single-threaded. With the `parallel` feature (default)
//! the naive LCP strategy and the Φ gather step run on rayon.
//!
//! # Usage
//!
//! ```
//! use sufsort::{build_suffix_array, compute_lcp_array, validate, LcpStrategy};
//!
//! let text = b"abcabc";
//! let sa = build_suffix_array(text).unwrap();
//! assert_eq!(sa, vec![3, 0, 4, 1, 5, 2]);
//! assert!(validate(text, &sa).is_ok());
//!
//! let lcp = compute_lcp_array(text, &sa, LcpStrategy::Kasai).unwrap();
//! assert_eq!(lcp, vec![0, 3, 0, 2, 0, 1]);
//! ```

pub mod error;
pub mod lcp;
pub mod sais;
pub mod verify;

pub use error::{Error, Result};
pub use lcp::{compute_lcp_array, inverse_suffix_array, LcpStrategy};
pub use sais::{build_suffix_array, build_suffix_array_with_alphabet};
pub use verify::{validate, ValidationResult};
