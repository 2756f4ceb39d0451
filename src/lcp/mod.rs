// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Longest common prefix (LCP) arrays.
//!
//! `lcp[i]` is the length of the common prefix of the suffixes at `sa[i - 1]`
//! and `sa[i]`; `lcp[0]` is 0 because the smallest suffix has no predecessor.
//!
//! ```text
//! text: abcabc      sa: [3, 0, 4, 1, 5, 2]
//!
//!   i  sa[i]  suffix   lcp[i]
//!   0    3    abc        0
//!   1    0    abcabc     3
//!   2    4    bc         0
//!   3    1    bcabc      2
//!   4    5    c          0
//!   5    2    cabc       1
//! ```
//!
//! Three strategies share one contract and must agree on every input:
//!
//! | Strategy | Time     | Notes                                           |
//! |----------|----------|-------------------------------------------------|
//! | `Kasai`  | O(n)     | walks text order through the inverse SA         |
//! | `Phi`    | O(n)     | walks text order through predecessor pointers   |
//! | `Naive`  | O(n²)    | direct comparison, reference oracle, parallel   |

mod kasai;
mod naive;
mod phi;

pub use kasai::{inverse_suffix_array, kasai};
pub use naive::{common_prefix_len, naive};
pub use phi::phi;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::verify::contracts;

/// LCP construction algorithm, chosen by the caller.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LcpStrategy {
    /// Direct comparison of adjacent suffixes, O(n²) worst case
    Naive,
    /// Kasai et al. (2001), inverse suffix array
    Kasai,
    /// Kärkkäinen, Manzini, Puglisi (2009), permuted LCP via Φ
    Phi,
}

impl LcpStrategy {
    /// Every strategy, in reporting order.
    pub const ALL: [LcpStrategy; 3] = [LcpStrategy::Naive, LcpStrategy::Kasai, LcpStrategy::Phi];

    pub fn name(self) -> &'static str {
        match self {
            LcpStrategy::Naive => "naive",
            LcpStrategy::Kasai => "kasai",
            LcpStrategy::Phi => "phi",
        }
    }

    /// Run this strategy. See [`compute_lcp_array`].
    pub fn compute(self, text: &[u8], sa: &[usize]) -> Result<Vec<usize>> {
        compute_lcp_array(text, sa, self)
    }
}

impl fmt::Display for LcpStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LcpStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "naive" => Ok(LcpStrategy::Naive),
            "kasai" => Ok(LcpStrategy::Kasai),
            "phi" => Ok(LcpStrategy::Phi),
            other => Err(Error::invalid_input(format!("unknown LCP strategy '{}'", other))),
        }
    }
}

/// Compute the LCP array of `text` for its suffix array `sa`.
///
/// `sa` must have one entry per text position, each below `text.len()`.
/// Sortedness is not checked: for anything other than the suffix array of
/// `text` the values are unspecified and the strategies may disagree.
pub fn compute_lcp_array(text: &[u8], sa: &[usize], strategy: LcpStrategy) -> Result<Vec<usize>> {
    if sa.len() != text.len() {
        return Err(Error::invalid_input(format!(
            "suffix array length {} != text length {}",
            sa.len(),
            text.len()
        )));
    }
    if let Some(rank) = sa.iter().position(|&pos| pos >= text.len()) {
        return Err(Error::invalid_input(format!(
            "suffix array entry sa[{}] = {} is outside the text",
            rank, sa[rank]
        )));
    }

    log::debug!("lcp {}: n={}", strategy, text.len());

    let lcp = match strategy {
        LcpStrategy::Naive => naive(text, sa),
        LcpStrategy::Kasai => kasai(text, sa),
        LcpStrategy::Phi => phi(text, sa),
    };

    contracts::check_lcp_shape(text.len(), sa, &lcp);
    Ok(lcp)
}
