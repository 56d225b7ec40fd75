// src/cli.rs

use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Find the pair of employees who worked together the longest", long_about = None)]
pub struct Args {
    /// Path to the timesheet CSV export
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Instant that open-ended (NULL) assignments end at, as RFC 3339.
    /// Defaults to the current time.
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,

    /// Also list the total shared days of every pair
    #[arg(long)]
    pub all_pairs: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human readable tables
    Text,
    /// The full report as JSON
    Json,
}
