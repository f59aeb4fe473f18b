use super::grid::ScoreGrid;
use super::selection::{select, BestN};
use super::types::{HistoryStep, PlayerTotal};

/// Point-in-time best-N totals after each tournament.
///
/// Each step re-selects from the scores seen so far, so a counted result can
/// later be displaced by a better one. Steps depend on chronological order;
/// players within a step are independent.
pub fn build_history(grid: &ScoreGrid, best_n: BestN) -> Vec<HistoryStep> {
    grid.tournaments
        .iter()
        .enumerate()
        .map(|(pos, id)| HistoryStep {
            tournament_id: id.clone(),
            totals: grid
                .rows
                .iter()
                .map(|row| PlayerTotal {
                    name: row.player.player.clone(),
                    points: select(&row.scores[..=pos], best_n).total,
                })
                .collect(),
        })
        .collect()
}
