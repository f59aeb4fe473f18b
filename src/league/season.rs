use std::collections::HashMap;

use super::selection::BestN;
use super::types::{LeagueReport, PlayerScores};
use crate::domain::{LeagueSeason, PlayerId, TournamentCollection, TournamentRecord};
use crate::errors::{EngineResult, MalformedInput};

/// Build aggregator input from resolved tournaments, oldest first.
/// Players keep the order in which they first appear.
pub fn collect_scores<'a>(tournaments: impl IntoIterator<Item = &'a TournamentRecord>) -> Vec<PlayerScores> {
    let mut players: Vec<PlayerScores> = Vec::new();
    let mut index: HashMap<PlayerId, usize> = HashMap::new();

    for tournament in tournaments {
        for result in &tournament.standings {
            let slot = *index.entry(result.name.clone()).or_insert_with(|| {
                players.push(PlayerScores::new(result.name.clone()));
                players.len() - 1
            });

            let entry = &mut players[slot];
            entry.scores.insert(tournament.id.clone(), result.points);
            entry.record.add(result);
        }
    }

    players
}

/// Aggregate a season straight from its resolved tournaments
pub fn aggregate_season(season: &LeagueSeason, collection: &TournamentCollection) -> EngineResult<LeagueReport> {
    BestN::from_raw(season.best_n)?;

    let tournaments = season
        .tournaments
        .iter()
        .map(|id| {
            collection.get(id).ok_or_else(|| MalformedInput::MissingTournament {
                tournament: id.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let scores = collect_scores(tournaments);
    super::aggregate(&season.tournaments, &scores, season.best_n)
}
