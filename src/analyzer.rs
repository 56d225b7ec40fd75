// src/analyzer.rs

use crate::aggregate::aggregate;
use crate::error::AnalysisError;
use crate::model::*;
use crate::overlap::find_overlaps_with_progress;
use crate::parser::load_assignments_at;
use crate::projector::project;
use chrono::{DateTime, Utc};
use indicatif::ProgressBar;
use tracing::info;

pub fn analyze(records: &[AssignmentRecord]) -> AnalysisReport {
    analyze_with_progress(records, &ProgressBar::hidden())
}

/// Runs the overlap, aggregation and projection passes over one record set.
/// Nothing is carried over between calls.
pub fn analyze_with_progress(records: &[AssignmentRecord], bar: &ProgressBar) -> AnalysisReport {
    let entries = find_overlaps_with_progress(records, bar);
    let aggregation = aggregate(&entries);
    let (summary, projects) = project(aggregation.winner, &entries);

    match &summary {
        Some(s) => info!(
            first = s.first_employee,
            second = s.second_employee,
            days = s.total_overlap_days,
            projects = s.project_count,
            "found longest working pair"
        ),
        None => info!(records = records.len(), "no pair of employees shares any time"),
    }

    AnalysisReport {
        record_count: records.len(),
        summary,
        projects,
        pairs: aggregation.ranked(),
    }
}

/// Checks the file type, parses the content and analyses it. Parse errors stop
/// the pipeline before any pairs are compared.
pub fn analyze_file(file_name: &str, content: &str, now: DateTime<Utc>) -> Result<AnalysisReport, AnalysisError> {
    let records = load_assignments_at(file_name, content, now)?;
    Ok(analyze(&records))
}
