use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{TournamentId, TournamentRecord};
use crate::league::{DeckShare, HeadToHeadRecord, LeagueReport};

/// One league as published: its tournaments and everything derived from them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueSummary {
    pub id: String,
    pub name: String,
    pub best_n: Option<i64>,
    /// Newest first
    pub tournaments: Vec<TournamentId>,
    pub report: LeagueReport,
    pub head_to_head: Vec<HeadToHeadRecord>,
    /// Deck counts, most played first, overflow under "Others"
    #[serde(default)]
    pub metagame: Vec<DeckShare>,
}

/// The processed dataset written by `process`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueDatabase {
    /// All-time first, then seasons newest first
    pub leagues: Vec<LeagueSummary>,
    pub tournaments: BTreeMap<TournamentId, TournamentRecord>,
}

impl LeagueDatabase {
    pub fn league(&self, id: &str) -> Option<&LeagueSummary> {
        self.leagues.iter().find(|l| l.id == id)
    }

    /// A league's tournaments, oldest first; ids without a record are skipped
    pub fn league_tournaments(&self, league: &LeagueSummary) -> Vec<&TournamentRecord> {
        league
            .tournaments
            .iter()
            .rev()
            .filter_map(|id| self.tournaments.get(id))
            .collect()
    }
}
