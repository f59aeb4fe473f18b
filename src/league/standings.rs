use super::grid::ScoreGrid;
use super::selection::{BestN, Selection};
use super::types::LeagueStandingRow;
use crate::domain::Points;

/// Row indices by total, highest first; ties keep input order
pub fn standing_order(selections: &[Selection]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..selections.len()).collect();
    order.sort_by(|&a, &b| selections[b].total.cmp(&selections[a].total));
    order
}

/// Tied totals share a rank and the next distinct total takes the next
/// integer (dense ranking).
pub fn build_standings(
    grid: &ScoreGrid,
    selections: &[Selection],
    order: &[usize],
    best_n: BestN,
) -> Vec<LeagueStandingRow> {
    let mut rows = Vec::with_capacity(order.len());
    let mut rank = 0;
    let mut previous = None;

    for &idx in order {
        let selection = &selections[idx];
        if previous != Some(selection.total) {
            rank += 1;
            previous = Some(selection.total);
        }

        let row = &grid.rows[idx];
        let participations = row.participations();
        let record = row.player.record;

        rows.push(LeagueStandingRow {
            rank,
            name: row.player.player.clone(),
            points: selection.total,
            history: grid
                .tournaments
                .iter()
                .cloned()
                .zip(row.scores.iter().copied())
                .collect(),
            tournaments_played: participations,
            counted: selection.counted_count,
            lowest_counting: lowest_counting(selection, participations, best_n),
            wins: record.wins,
            losses: record.losses,
            draws: record.draws,
            matches: record.matches(),
        });
    }

    rows
}

/// Nothing is at risk of being dropped until the player has N results
fn lowest_counting(selection: &Selection, participations: usize, best_n: BestN) -> Points {
    match best_n.value() {
        Some(limit) if participations < limit => 0,
        _ => selection.lowest_counted.unwrap_or(0),
    }
}
