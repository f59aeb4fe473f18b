use std::cmp::Ordering;

use super::tiebreakers::Tiebreakers;
use crate::domain::Points;

/// Ledger indices in final standing order. The sort is stable, so players
/// equal on points and every tiebreaker keep their first-appearance order.
pub fn rank_order(points: &[Points], tiebreakers: &[Tiebreakers]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| compare(a, b, points, tiebreakers));
    order
}

fn compare(a: usize, b: usize, points: &[Points], tiebreakers: &[Tiebreakers]) -> Ordering {
    let (ta, tb) = (&tiebreakers[a], &tiebreakers[b]);

    points[b]
        .cmp(&points[a])
        .then_with(|| tb.omw.total_cmp(&ta.omw))
        .then_with(|| tb.gw.total_cmp(&ta.gw))
        .then_with(|| tb.ogw.total_cmp(&ta.ogw))
        .then_with(|| tb.mw.total_cmp(&ta.mw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tb(omw: f64, gw: f64, ogw: f64, mw: f64) -> Tiebreakers {
        Tiebreakers { omw, gw, ogw, mw }
    }

    #[test]
    fn test_rank_order_uses_tiebreakers_in_sequence() {
        let points = vec![3, 6, 3, 3, 3];
        let tiebreakers = vec![
            tb(0.5, 0.5, 0.5, 0.5),
            tb(0.4, 0.4, 0.4, 0.4),
            tb(0.6, 0.4, 0.4, 0.4),
            tb(0.5, 0.5, 0.5, 0.6),
            tb(0.5, 0.5, 0.5, 0.5),
        ];

        // 1 on points, 2 on OMW, 3 on MW, then 0 and 4 in input order
        assert_eq!(rank_order(&points, &tiebreakers), vec![1, 2, 3, 0, 4]);
    }
}
