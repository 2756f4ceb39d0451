// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Timing report for one run.
//!
//! Memory is reported as the size of the arrays each step produced. The
//! library keeps no telemetry state; everything here is measured around
//! single synchronous calls.

use serde::Serialize;
use sufsort::{LcpStrategy, ValidationResult};

/// One LCP strategy's measurements.
#[derive(Debug, Clone, Serialize)]
pub struct LcpTiming {
    pub strategy: LcpStrategy,
    pub time_ms: u128,
    pub bytes: usize,
}

/// Everything measured for one input file.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub name: &'static str,
    pub file: String,
    pub text_len: usize,
    pub sa_construction_time_ms: u128,
    pub sa_bytes: usize,
    /// `None` when the check was skipped
    pub sa_check: Option<ValidationResult>,
    pub lcp: Vec<LcpTiming>,
    /// Whether every strategy that ran produced the same array
    pub lcp_agree: bool,
}

/// Bytes held by a `usize` array of `len` entries.
pub fn array_bytes(len: usize) -> usize {
    len * std::mem::size_of::<usize>()
}

impl Report {
    /// `RESULT key=value ...` line, one per run.
    pub fn result_line(&self) -> String {
        let mut line = format!(
            "RESULT name={} text_len={} sa_construction_time={} sa_construction_memory={}",
            self.name, self.text_len, self.sa_construction_time_ms, self.sa_bytes
        );
        if let Some(check) = &self.sa_check {
            line.push_str(&format!(" sa_check={}", check.kind()));
        }
        for timing in &self.lcp {
            line.push_str(&format!(
                " lcp_{}_construction_time={} lcp_{}_construction_memory={}",
                timing.strategy, timing.time_ms, timing.strategy, timing.bytes
            ));
        }
        if self.lcp.len() > 1 {
            line.push_str(&format!(" lcp_agree={}", self.lcp_agree));
        }
        line
    }

    /// Failed check or disagreeing strategies.
    pub fn has_failure(&self) -> bool {
        self.sa_check.is_some_and(|check| !check.is_ok()) || !self.lcp_agree
    }
}
