// src/projector.rs

use crate::model::*;

/// Keeps the winning pair's entries in emission order and summarises them.
///
/// `project_count` counts entries, so two stretches on the same project
/// count twice.
pub fn project(winner: Option<PairKey>, entries: &[OverlapEntry]) -> (Option<WinningPairSummary>, Vec<ProjectedEntry>) {
    let Some(pair) = winner else {
        return (None, Vec::new());
    };

    let projects: Vec<ProjectedEntry> = entries
        .iter()
        .filter(|entry| entry.pair == pair)
        .map(|entry| ProjectedEntry {
            first_employee: pair.first(),
            second_employee: pair.second(),
            project_id: entry.project_id,
            overlap_days: entry.overlap_days,
        })
        .collect();

    let summary = WinningPairSummary {
        first_employee: pair.first(),
        second_employee: pair.second(),
        total_overlap_days: projects.iter().map(|p| p.overlap_days).sum(),
        project_count: projects.len(),
    };

    (Some(summary), projects)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(a: u64, b: u64, project_id: u64, overlap_days: u64) -> OverlapEntry {
        OverlapEntry {
            pair: PairKey::new(a, b).unwrap(),
            project_id,
            overlap_days,
        }
    }

    #[test]
    fn keeps_only_winning_pair_in_order() {
        let entries = [entry(2, 1, 30, 5), entry(3, 4, 10, 6), entry(1, 2, 20, 3), entry(1, 3, 20, 1)];
        let (summary, projects) = project(PairKey::new(1, 2), &entries);

        assert_eq!(
            summary,
            Some(WinningPairSummary {
                first_employee: 1,
                second_employee: 2,
                total_overlap_days: 8,
                project_count: 2,
            })
        );
        let ids: Vec<u64> = projects.iter().map(|p| p.project_id).collect();
        assert_eq!(ids, vec![30, 20]);
        assert!(projects.iter().all(|p| p.first_employee == 1 && p.second_employee == 2));
    }

    #[test]
    fn repeated_project_is_counted_per_entry() {
        let entries = [entry(1, 2, 10, 4), entry(1, 2, 10, 2)];
        let (summary, projects) = project(PairKey::new(1, 2), &entries);

        assert_eq!(summary.map(|s| s.project_count), Some(2));
        assert_eq!(projects.len(), 2);
    }

    #[test]
    fn no_winner_projects_nothing() {
        let (summary, projects) = project(None, &[entry(1, 2, 10, 0)]);
        assert!(summary.is_none());
        assert!(projects.is_empty());
    }
}
