// src/model.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Identifies an employee in the timesheet export
pub type EmployeeId = u64;

/// Identifies a project in the timesheet export
pub type ProjectId = u64;

/// One row of the timesheet: an employee's tenure on a project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentRecord {
    pub employee_id: EmployeeId,
    pub project_id: ProjectId,
    pub date_from: DateTime<Utc>,
    /// Open-ended assignments carry the instant the file was parsed
    pub date_to: DateTime<Utc>,
}

/// Order-independent identity of two distinct employees.
///
/// The ids are sorted on construction, so `PairKey::new(a, b)` and
/// `PairKey::new(b, a)` compare and hash identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PairKey {
    #[serde(rename = "first_employee")]
    low: EmployeeId,
    #[serde(rename = "second_employee")]
    high: EmployeeId,
}

impl PairKey {
    /// Returns `None` when both ids name the same employee.
    pub fn new(a: EmployeeId, b: EmployeeId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Some(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn first(&self) -> EmployeeId {
        self.low
    }

    pub fn second(&self) -> EmployeeId {
        self.high
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & {}", self.low, self.high)
    }
}

/// Days two employees spent together on one project, from one pair of records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapEntry {
    pub pair: PairKey,
    pub project_id: ProjectId,
    pub overlap_days: u64,
}

/// Running total of shared days for one pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PairAggregate {
    pub total_overlap_days: u64,
    /// Number of overlap entries folded into the total
    pub entry_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WinningPairSummary {
    pub first_employee: EmployeeId,
    pub second_employee: EmployeeId,
    pub total_overlap_days: u64,
    pub project_count: usize,
}

/// An overlap entry of the winning pair with both employee ids spelled out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectedEntry {
    pub first_employee: EmployeeId,
    pub second_employee: EmployeeId,
    pub project_id: ProjectId,
    pub overlap_days: u64,
}

/// A pair and its aggregate, as listed in the full ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedPair {
    pub pair: PairKey,
    #[serde(flatten)]
    pub aggregate: PairAggregate,
}

/// The complete result of analysing one timesheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub record_count: usize,
    pub summary: Option<WinningPairSummary>,
    pub projects: Vec<ProjectedEntry>,
    pub pairs: Vec<RankedPair>,
}
