// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the sufsort CLI.
//!
//! The RESULT line goes to stdout untouched so scripts can grep it. The
//! human summary goes to stderr, colored when stderr is a TTY and `NO_COLOR`
//! is unset.

use super::report::Report;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
}

pub use colors::*;

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stderr)
}

/// Apply color if TTY, otherwise return plain text
pub fn color(c: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", c, text, RESET)
    } else {
        text.to_string()
    }
}

/// Format bytes as human-readable size
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Color-coded timing value in ms (green=fast, yellow=medium, red=slow)
pub fn timing_ms(value: u128) -> String {
    let text = format!("{:>8} ms", value);
    let c = if value < 100 {
        GREEN
    } else if value < 1000 {
        YELLOW
    } else {
        RED
    };
    color(c, &text)
}

/// Print the human-readable summary to stderr.
pub fn print_summary(report: &Report) {
    eprintln!(
        "{} {} ({})",
        color(BOLD, "sufsort"),
        report.file,
        format_size(report.text_len)
    );
    eprintln!(
        "  {:<10}{}  {}",
        "sa-is",
        timing_ms(report.sa_construction_time_ms),
        color(DIM, &format_size(report.sa_bytes))
    );

    match &report.sa_check {
        Some(check) if check.is_ok() => eprintln!("  {:<10}{}", "check", color(GREEN, "ok")),
        Some(check) => eprintln!("  {:<10}{}", "check", color(RED, &check.to_string())),
        None => eprintln!("  {:<10}{}", "check", color(DIM, "skipped")),
    }

    for timing in &report.lcp {
        eprintln!(
            "  {:<10}{}  {}",
            format!("lcp {}", timing.strategy),
            timing_ms(timing.time_ms),
            color(DIM, &format_size(timing.bytes))
        );
    }

    if !report.lcp_agree {
        eprintln!("  {}", color(RED, "LCP strategies disagree"));
    }
}
