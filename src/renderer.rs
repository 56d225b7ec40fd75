// src/renderer.rs

use crate::cli::{Args, OutputFormat};
use crate::model::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use std::fmt::Write;

const NO_PAIRS_MESSAGE: &str = "No pairs of employees found in the provided file!";

pub fn render_report(report: &AnalysisReport, args: &Args) -> Result<String, serde_json::Error> {
    match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Text => Ok(render_text(report, &args.input.display().to_string(), args.all_pairs)),
    }
}

pub fn render_text(report: &AnalysisReport, file_name: &str, all_pairs: bool) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "Selected file: {file_name}");

    match &report.summary {
        Some(summary) => {
            let _ = writeln!(out, "{}", summary_table(summary));
            let _ = writeln!(out, "All projects worked on together");
            let _ = writeln!(out, "{}", projects_table(&report.projects));
        }
        None => {
            let _ = writeln!(out, "{NO_PAIRS_MESSAGE}");
        }
    }

    if all_pairs && !report.pairs.is_empty() {
        let _ = writeln!(out, "All pairs");
        let _ = writeln!(out, "{}", pairs_table(&report.pairs));
    }

    out
}

fn summary_table(summary: &WinningPairSummary) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.add_row(vec![
        "Employee pair".to_string(),
        format!("{} & {}", summary.first_employee, summary.second_employee),
    ]);
    table.add_row(vec![
        "Total days worked together".to_string(),
        summary.total_overlap_days.to_string(),
    ]);
    table.add_row(vec![
        "Total projects worked together".to_string(),
        summary.project_count.to_string(),
    ]);
    table
}

fn projects_table(projects: &[ProjectedEntry]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Employee ID #1", "Employee ID #2", "Project ID", "Days worked"]);
    for entry in projects {
        table.add_row(vec![
            entry.first_employee.to_string(),
            entry.second_employee.to_string(),
            entry.project_id.to_string(),
            entry.overlap_days.to_string(),
        ]);
    }
    table
}

fn pairs_table(pairs: &[RankedPair]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Employee pair", "Days together", "Shared assignments"]);
    for ranked in pairs {
        table.add_row(vec![
            ranked.pair.to_string(),
            ranked.aggregate.total_overlap_days.to_string(),
            ranked.aggregate.entry_count.to_string(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn report() -> AnalysisReport {
        let pair = PairKey::new(1, 2).unwrap();
        AnalysisReport {
            record_count: 3,
            summary: Some(WinningPairSummary {
                first_employee: 1,
                second_employee: 2,
                total_overlap_days: 8,
                project_count: 2,
            }),
            projects: vec![
                ProjectedEntry {
                    first_employee: 1,
                    second_employee: 2,
                    project_id: 10,
                    overlap_days: 5,
                },
                ProjectedEntry {
                    first_employee: 1,
                    second_employee: 2,
                    project_id: 11,
                    overlap_days: 3,
                },
            ],
            pairs: vec![RankedPair {
                pair,
                aggregate: PairAggregate {
                    total_overlap_days: 8,
                    entry_count: 2,
                },
            }],
        }
    }

    fn args(format: OutputFormat) -> Args {
        Args {
            input: PathBuf::from("team.csv"),
            format,
            now: None,
            all_pairs: true,
        }
    }

    #[test]
    fn text_output_shows_summary_and_projects() {
        let out = render_report(&report(), &args(OutputFormat::Text)).unwrap();

        assert!(out.contains("Selected file: team.csv"));
        assert!(out.contains("1 & 2"));
        assert!(out.contains("Total days worked together"));
        assert!(out.contains("Days worked"));
        assert!(out.contains("Shared assignments"));
        assert!(!out.contains(NO_PAIRS_MESSAGE));
    }

    #[test]
    fn text_output_without_winner() {
        let empty = AnalysisReport {
            record_count: 0,
            summary: None,
            projects: Vec::new(),
            pairs: Vec::new(),
        };
        let out = render_text(&empty, "team.csv", false);
        assert!(out.contains(NO_PAIRS_MESSAGE));
        assert!(!out.contains("Employee ID #1"));
    }

    #[test]
    fn json_output_carries_the_full_report() {
        let out = render_report(&report(), &args(OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["summary"]["total_overlap_days"], 8);
        assert_eq!(value["projects"][1]["project_id"], 11);
        assert_eq!(value["pairs"][0]["pair"]["second_employee"], 2);
        assert_eq!(value["pairs"][0]["entry_count"], 2);
    }
}
