// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sufsort command-line interface.
//!
//! One file in, one report out: build the suffix array, check it, run the
//! selected LCP strategies, and print how long each step took.

pub mod display;
pub mod report;

use clap::Parser;
use std::path::PathBuf;
use sufsort::LcpStrategy;

#[derive(Parser, Debug)]
#[command(
    name = "sufsort",
    about = "Build a suffix array (SA-IS) and LCP arrays for a file and time each step",
    version
)]
pub struct Cli {
    /// File to build the suffix array for
    pub file: PathBuf,

    /// Skip the quadratic naive LCP strategy
    #[arg(short = 'n', long)]
    pub no_naive: bool,

    /// LCP strategies to run (repeatable; default: all)
    #[arg(short, long = "strategy", value_enum)]
    pub strategies: Vec<LcpStrategy>,

    /// Skip validating the suffix array
    #[arg(long)]
    pub no_check: bool,

    /// Print the report as JSON instead of a RESULT line
    #[arg(long)]
    pub json: bool,

    /// Log construction details to stderr (same as RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Strategies to run, in reporting order, honoring `--no-naive`.
    pub fn selected_strategies(&self) -> Vec<LcpStrategy> {
        LcpStrategy::ALL
            .into_iter()
            .filter(|s| self.strategies.is_empty() || self.strategies.contains(s))
            .filter(|s| !(self.no_naive && *s == LcpStrategy::Naive))
            .collect()
    }
}
