use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{PlayerId, PlayerTournamentResult, Points, TournamentId};

/// Match record summed over a season
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl SeasonRecord {
    pub fn matches(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    pub fn add(&mut self, result: &PlayerTournamentResult) {
        self.wins += result.wins;
        self.losses += result.losses;
        self.draws += result.draws;
    }
}

/// Aggregator input: one player's raw score per tournament entered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScores {
    pub player: PlayerId,
    pub scores: BTreeMap<TournamentId, Points>,
    #[serde(default)]
    pub record: SeasonRecord,
}

impl PlayerScores {
    pub fn new(player: impl Into<PlayerId>) -> Self {
        Self {
            player: player.into(),
            scores: BTreeMap::new(),
            record: SeasonRecord::default(),
        }
    }

    pub fn with_score(mut self, tournament: impl Into<TournamentId>, score: Points) -> Self {
        self.scores.insert(tournament.into(), score);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueStandingRow {
    pub rank: usize,
    pub name: PlayerId,
    pub points: Points,
    /// Raw score for every season tournament, zero where absent
    pub history: BTreeMap<TournamentId, Points>,
    pub tournaments_played: usize,
    pub counted: usize,
    pub lowest_counting: Points,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub matches: u32,
}

impl LeagueStandingRow {
    /// "7 (9)" when results were dropped, otherwise just the count
    pub fn tournaments_display(&self) -> String {
        if self.counted < self.tournaments_played {
            format!("{} ({})", self.counted, self.tournaments_played)
        } else {
            self.tournaments_played.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixCell {
    pub tournament_id: TournamentId,
    pub score: Points,
    pub participated: bool,
    pub counted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixRow {
    pub name: PlayerId,
    pub cells: Vec<MatrixCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTotal {
    pub name: PlayerId,
    pub points: Points,
}

/// Every player's best-N total as of one tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStep {
    pub tournament_id: TournamentId,
    pub totals: Vec<PlayerTotal>,
}

impl HistoryStep {
    pub fn total_for(&self, player: &str) -> Option<Points> {
        self.totals
            .iter()
            .find(|t| t.name == player)
            .map(|t| t.points)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueReport {
    pub standings: Vec<LeagueStandingRow>,
    pub matrix: Vec<MatrixRow>,
    pub history: Vec<HistoryStep>,
}
