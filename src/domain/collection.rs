use std::collections::HashMap;

use super::models::{TournamentId, TournamentRecord};

/// Resolved tournaments indexed by ID, kept in chronological (week) order
pub struct TournamentCollection {
    order: Vec<TournamentId>,
    tournaments: HashMap<TournamentId, TournamentRecord>,
}

impl TournamentCollection {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            tournaments: HashMap::new(),
        }
    }

    /// Insert a tournament. A record with an ID already present replaces the
    /// old one without changing its position.
    pub fn add(&mut self, tournament: TournamentRecord) {
        if !self.tournaments.contains_key(&tournament.id) {
            self.order.push(tournament.id.clone());
        }
        self.tournaments.insert(tournament.id.clone(), tournament);
        self.sort_chronologically();
    }

    pub fn get(&self, id: &str) -> Option<&TournamentRecord> {
        self.tournaments.get(id)
    }

    pub fn ids(&self) -> &[TournamentId] {
        &self.order
    }

    /// Tournaments oldest first
    pub fn iter(&self) -> impl Iterator<Item = &TournamentRecord> {
        self.order.iter().filter_map(|id| self.tournaments.get(id))
    }

    pub fn into_vec(mut self) -> Vec<TournamentRecord> {
        self.order
            .iter()
            .filter_map(|id| self.tournaments.remove(id))
            .collect()
    }

    fn sort_chronologically(&mut self) {
        let tournaments = &self.tournaments;
        self.order.sort_by_key(|id| {
            let t = &tournaments[id];
            (t.week_number, t.date)
        });
    }
}

impl Default for TournamentCollection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::TournamentMetadata;
    use chrono::NaiveDate;

    fn record(id: &str, week: u32) -> TournamentRecord {
        TournamentRecord {
            id: id.to_string(),
            name: id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            week_number: week,
            league_id: None,
            metadata: TournamentMetadata::default(),
            rounds: Vec::new(),
            standings: Vec::new(),
        }
    }

    #[test]
    fn test_collection_orders_by_week() {
        let mut collection = TournamentCollection::new();
        collection.add(record("week-10", 10));
        collection.add(record("week-9", 9));
        collection.add(record("week-11", 11));
        collection.add(record("week-9", 9));

        assert_eq!(collection.ids(), &["week-9", "week-10", "week-11"]);
        assert!(collection.get("week-10").is_some());
    }
}
