// src/parser.rs

use crate::error::{AnalysisError, RecordDefect};
use crate::model::*;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::path::Path;
use tracing::debug;

const NULL_DATE: &str = "NULL";

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Checks the upload's file type, then parses its content.
/// Open-ended assignments end at the current instant.
pub fn load_assignments(file_name: &str, content: &str) -> Result<Vec<AssignmentRecord>, AnalysisError> {
    load_assignments_at(file_name, content, Utc::now())
}

pub fn load_assignments_at(
    file_name: &str,
    content: &str,
    now: DateTime<Utc>,
) -> Result<Vec<AssignmentRecord>, AnalysisError> {
    ensure_csv(file_name)?;
    parse_records_at(content, now)
}

/// Rejects anything that is not declared as CSV, without reading it
pub fn ensure_csv(file_name: &str) -> Result<(), AnalysisError> {
    let is_csv = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        Ok(())
    } else {
        Err(AnalysisError::UnsupportedFileType {
            file_name: file_name.to_string(),
        })
    }
}

pub fn parse_records(content: &str) -> Result<Vec<AssignmentRecord>, AnalysisError> {
    parse_records_at(content, Utc::now())
}

/// Parses one record per line: `employeeId projectId dateFrom dateTo`.
///
/// Fields are separated by whitespace and/or commas. Blank lines are skipped,
/// and every `NULL` end date resolves to `now`. Records come back in file order.
pub fn parse_records_at(content: &str, now: DateTime<Utc>) -> Result<Vec<AssignmentRecord>, AnalysisError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut records = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let fields: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|field| !field.is_empty())
            .collect();

        if fields.is_empty() {
            continue;
        }

        let record = parse_fields(&fields, now).map_err(|reason| AnalysisError::MalformedRecord {
            line: index + 1,
            reason,
        })?;
        records.push(record);
    }

    debug!(records = records.len(), "parsed timesheet");
    Ok(records)
}

fn parse_fields(fields: &[&str], now: DateTime<Utc>) -> Result<AssignmentRecord, RecordDefect> {
    let &[employee, project, from, to] = fields else {
        return Err(RecordDefect::FieldCount { found: fields.len() });
    };

    Ok(AssignmentRecord {
        employee_id: parse_id("employee id", employee)?,
        project_id: parse_id("project id", project)?,
        date_from: parse_date("start date", from, now)?,
        date_to: parse_date("end date", to, now)?,
    })
}

fn parse_id(field: &'static str, value: &str) -> Result<u64, RecordDefect> {
    value.parse().map_err(|_| RecordDefect::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

fn parse_date(field: &'static str, value: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, RecordDefect> {
    if value.eq_ignore_ascii_case(NULL_DATE) {
        return Ok(now);
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }

    // Zone-less timestamps are read as UTC
    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date.and_time(NaiveTime::MIN).and_utc());
        }
    }

    Err(RecordDefect::InvalidDate {
        field,
        value: value.to_string(),
    })
}
