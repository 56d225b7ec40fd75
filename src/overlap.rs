// src/overlap.rs

use crate::model::*;
use indicatif::ProgressBar;
use std::collections::BTreeMap;
use tracing::{debug, trace};

pub fn find_overlaps(records: &[AssignmentRecord]) -> Vec<OverlapEntry> {
    find_overlaps_with_progress(records, &ProgressBar::hidden())
}

/// Emits one entry for every record pair `(i, j)`, `i < j`, where two
/// different employees worked on the same project.
///
/// Records are bucketed by project so only candidates are compared, but the
/// entries come out in the order a plain double loop over `records` would
/// produce them. Pairs whose ranges do not intersect still get an entry with
/// zero days.
pub fn find_overlaps_with_progress(records: &[AssignmentRecord], bar: &ProgressBar) -> Vec<OverlapEntry> {
    let mut buckets: BTreeMap<ProjectId, Vec<usize>> = BTreeMap::new();
    for (index, record) in records.iter().enumerate() {
        buckets.entry(record.project_id).or_default().push(index);
    }
    debug!(records = records.len(), projects = buckets.len(), "bucketed records by project");

    bar.set_length(buckets.len() as u64);
    bar.set_message("Comparing assignments");

    let mut found: Vec<((usize, usize), OverlapEntry)> = Vec::new();
    for indices in buckets.values() {
        for (pos, &i) in indices.iter().enumerate() {
            for &j in &indices[pos + 1..] {
                if let Some(entry) = overlap_between(&records[i], &records[j]) {
                    found.push(((i, j), entry));
                }
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    // Index pairs are unique, so an unstable sort is enough
    found.sort_unstable_by_key(|&(order, _)| order);
    debug!(entries = found.len(), "collected overlap entries");

    found.into_iter().map(|(_, entry)| entry).collect()
}

/// `None` unless the records share a project and belong to different employees
pub fn overlap_between(a: &AssignmentRecord, b: &AssignmentRecord) -> Option<OverlapEntry> {
    if a.project_id != b.project_id {
        return None;
    }
    let pair = PairKey::new(a.employee_id, b.employee_id)?;

    Some(OverlapEntry {
        pair,
        project_id: a.project_id,
        overlap_days: overlap_days(a, b),
    })
}

/// Whole days in the intersection of both tenures; partial days are dropped.
pub fn overlap_days(a: &AssignmentRecord, b: &AssignmentRecord) -> u64 {
    let start = a.date_from.max(b.date_from);
    let end = a.date_to.min(b.date_to);

    if start > end {
        trace!(project = a.project_id, first = a.employee_id, second = b.employee_id, "no shared time");
        return 0;
    }

    (end - start).num_days().unsigned_abs()
}
