use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::time::Instant;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use sufsort::{build_suffix_array, compute_lcp_array, validate};

mod cli;
use cli::display;
use cli::report::{array_bytes, LcpTiming, Report};
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let report = match run(&cli) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("❌ failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", report.result_line());
        display::print_summary(&report);
    }

    if report.has_failure() {
        std::process::exit(2);
    }
}

/// `-v` forces debug output; otherwise `RUST_LOG` decides, defaulting to warn.
fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

#[cfg(feature = "parallel")]
fn create_progress(steps: usize) -> ProgressBar {
    if !atty::is(atty::Stream::Stderr) {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(steps as u64);
    let style = ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸");
    pb.set_style(style);
    pb.set_prefix("sufsort");
    pb
}

fn run(cli: &Cli) -> Result<Report> {
    let text = fs::read(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let strategies = cli.selected_strategies();
    log::info!(
        "{}: {} bytes, strategies {:?}",
        cli.file.display(),
        text.len(),
        strategies
    );

    #[cfg(feature = "parallel")]
    let pb = create_progress(1 + usize::from(!cli.no_check) + strategies.len());

    #[cfg(feature = "parallel")]
    pb.set_message("suffix array");
    let start = Instant::now();
    let sa = build_suffix_array(&text).context("suffix array construction failed")?;
    let sa_construction_time_ms = start.elapsed().as_millis();
    #[cfg(feature = "parallel")]
    pb.inc(1);

    let sa_check = if cli.no_check {
        None
    } else {
        #[cfg(feature = "parallel")]
        pb.set_message("check");
        let check = validate(&text, &sa);
        if !check.is_ok() {
            log::warn!("suffix array failed validation: {}", check);
        }
        #[cfg(feature = "parallel")]
        pb.inc(1);
        Some(check)
    };

    let mut lcp = Vec::with_capacity(strategies.len());
    let mut first: Option<Vec<usize>> = None;
    let mut lcp_agree = true;
    for strategy in strategies {
        #[cfg(feature = "parallel")]
        pb.set_message(format!("lcp {}", strategy));
        let start = Instant::now();
        let array = compute_lcp_array(&text, &sa, strategy)
            .with_context(|| format!("LCP strategy {} failed", strategy))?;
        let time_ms = start.elapsed().as_millis();
        lcp.push(LcpTiming {
            strategy,
            time_ms,
            bytes: array_bytes(array.len()),
        });
        match &first {
            Some(expected) if *expected != array => {
                log::warn!("LCP strategy {} disagrees with {}", strategy, lcp[0].strategy);
                lcp_agree = false;
            }
            Some(_) => {}
            None => first = Some(array),
        }
        #[cfg(feature = "parallel")]
        pb.inc(1);
    }

    #[cfg(feature = "parallel")]
    pb.finish_and_clear();

    Ok(Report {
        name: env!("CARGO_PKG_NAME"),
        file: cli.file.display().to_string(),
        text_len: text.len(),
        sa_construction_time_ms,
        sa_bytes: array_bytes(sa.len()),
        sa_check,
        lcp,
        lcp_agree,
    })
}
