// src/main.rs

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use indicatif::ProgressBar;
use pair_tenure::analyzer::analyze_with_progress;
use pair_tenure::cli::{Args, OutputFormat};
use pair_tenure::parser::{ensure_csv, parse_records_at};
use pair_tenure::renderer::render_report;
use std::fs;
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let start_time = Instant::now();

    let file_name = args.input.to_string_lossy();
    ensure_csv(&file_name)?;

    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let now = args.now.unwrap_or_else(Utc::now);
    let records = parse_records_at(&content, now)?;

    let bar = match args.format {
        OutputFormat::Text => ProgressBar::new(0),
        OutputFormat::Json => ProgressBar::hidden(),
    };
    let report = analyze_with_progress(&records, &bar);

    println!("{}", render_report(&report, &args)?);
    debug!(elapsed = ?start_time.elapsed(), "analysis finished");
    Ok(())
}
