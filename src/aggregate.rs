// src/aggregate.rs

use crate::model::*;
use std::collections::HashMap;
use tracing::debug;

/// Per-pair totals and the pair with the largest one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    pub winner: Option<PairKey>,
    pub max_total: u64,
    pub totals: HashMap<PairKey, PairAggregate>,
}

impl Aggregation {
    /// Every pair, largest total first; equal totals are ordered by pair key.
    pub fn ranked(&self) -> Vec<RankedPair> {
        let mut ranked: Vec<RankedPair> = self
            .totals
            .iter()
            .map(|(&pair, &aggregate)| RankedPair { pair, aggregate })
            .collect();
        ranked.sort_by(|a, b| {
            b.aggregate
                .total_overlap_days
                .cmp(&a.aggregate.total_overlap_days)
                .then(a.pair.cmp(&b.pair))
        });
        ranked
    }
}

/// Sums overlap days per pair in a single pass.
///
/// A pair only takes the lead when its total strictly exceeds the current
/// maximum, so on a tie the pair that got there first keeps it. Totals of
/// zero never win.
pub fn aggregate(entries: &[OverlapEntry]) -> Aggregation {
    let mut result = Aggregation::default();

    for entry in entries {
        let total = result.totals.entry(entry.pair).or_default();
        total.total_overlap_days += entry.overlap_days;
        total.entry_count += 1;

        if total.total_overlap_days > result.max_total {
            result.max_total = total.total_overlap_days;
            result.winner = Some(entry.pair);
        }
    }

    debug!(pairs = result.totals.len(), max_total = result.max_total, "aggregated pair totals");
    result
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
    fn sums_across_projects_and_picks_largest() {
        let result = aggregate(&[entry(1, 2, 10, 5), entry(3, 4, 11, 6), entry(2, 1, 12, 3)]);

        assert_eq!(result.winner, PairKey::new(1, 2));
        assert_eq!(result.max_total, 8);
        assert_eq!(
            result.totals[&PairKey::new(1, 2).unwrap()],
            PairAggregate {
                total_overlap_days: 8,
                entry_count: 2,
            }
        );
        assert_eq!(result.totals[&PairKey::new(3, 4).unwrap()].total_overlap_days, 6);
    }

    #[test]
    fn first_pair_to_reach_maximum_keeps_it() {
        let result = aggregate(&[entry(5, 6, 1, 4), entry(1, 2, 1, 4)]);
        assert_eq!(result.winner, PairKey::new(5, 6));

        let result = aggregate(&[entry(1, 2, 1, 4), entry(5, 6, 1, 2), entry(5, 6, 2, 2)]);
        assert_eq!(result.winner, PairKey::new(1, 2));
    }

    #[test]
    fn zero_totals_produce_no_winner() {
        let result = aggregate(&[entry(1, 2, 10, 0), entry(3, 4, 10, 0)]);
        assert_eq!(result.winner, None);
        assert_eq!(result.max_total, 0);
        assert_eq!(result.totals.len(), 2);
    }

    #[test]
    fn empty_input_has_no_winner() {
        assert_eq!(aggregate(&[]), Aggregation::default());
    }

    #[test]
    fn ranking_orders_by_total_then_pair() {
        let result = aggregate(&[entry(3, 4, 1, 2), entry(1, 2, 1, 2), entry(7, 8, 1, 9)]);
        let order: Vec<PairKey> = result.ranked().iter().map(|r| r.pair).collect();
        assert_eq!(
            order,
            vec![
                PairKey::new(7, 8).unwrap(),
                PairKey::new(1, 2).unwrap(),
                PairKey::new(3, 4).unwrap(),
            ]
        );
    }
}
