use super::grid::ScoreGrid;
use super::selection::Selection;
use super::types::{MatrixCell, MatrixRow};

/// Rows follow standings order; cells follow the chronological tournament list
pub fn build_matrix(grid: &ScoreGrid, selections: &[Selection], order: &[usize]) -> Vec<MatrixRow> {
    order
        .iter()
        .map(|&idx| build_row(grid, &selections[idx], idx))
        .collect()
}

fn build_row(grid: &ScoreGrid, selection: &Selection, idx: usize) -> MatrixRow {
    let row = &grid.rows[idx];

    let cells = grid
        .tournaments
        .iter()
        .enumerate()
        .map(|(pos, id)| MatrixCell {
            tournament_id: id.clone(),
            score: row.scores[pos],
            participated: row.present[pos],
            counted: selection.counted[pos],
        })
        .collect();

    MatrixRow {
        name: row.player.player.clone(),
        cells,
    }
}
