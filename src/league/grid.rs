use std::collections::HashSet;

use super::types::PlayerScores;
use crate::domain::{Points, TournamentId};
use crate::errors::{EngineResult, MalformedInput};

/// Aggregator input laid out chronologically: one score slot per tournament
pub struct ScoreGrid<'a> {
    pub tournaments: &'a [TournamentId],
    pub rows: Vec<GridRow<'a>>,
}

pub struct GridRow<'a> {
    pub player: &'a PlayerScores,
    /// Zero where the player has no entry
    pub scores: Vec<Points>,
    pub present: Vec<bool>,
}

impl GridRow<'_> {
    pub fn participations(&self) -> usize {
        self.present.iter().filter(|&&p| p).count()
    }
}

impl<'a> ScoreGrid<'a> {
    pub fn build(tournaments: &'a [TournamentId], players: &'a [PlayerScores]) -> EngineResult<Self> {
        let mut seen = HashSet::new();
        for id in tournaments {
            if !seen.insert(id) {
                return Err(MalformedInput::DuplicateTournament {
                    tournament: id.clone(),
                }
                .into());
            }
        }

        let rows = players
            .iter()
            .map(|player| build_row(tournaments, &seen, player))
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(Self { tournaments, rows })
    }
}

fn build_row<'a>(
    tournaments: &[TournamentId],
    known: &HashSet<&TournamentId>,
    player: &'a PlayerScores,
) -> EngineResult<GridRow<'a>> {
    if let Some(unknown) = player.scores.keys().find(|id| !known.contains(id)) {
        return Err(MalformedInput::UnknownTournament {
            player: player.player.clone(),
            tournament: unknown.clone(),
        }
        .into());
    }

    let scores = tournaments
        .iter()
        .map(|id| player.scores.get(id).copied().unwrap_or(0))
        .collect();
    let present = tournaments
        .iter()
        .map(|id| player.scores.contains_key(id))
        .collect();

    Ok(GridRow {
        player,
        scores,
        present,
    })
}
