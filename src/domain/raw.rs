use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

use super::models::{Participant, PlayerId, Round, TournamentId};

/// Weekly tournament file as written by the pairing scraper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTournament {
    pub id: TournamentId,
    pub name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub week_number: u32,
    #[serde(default)]
    pub metadata: RawMetadata,
    pub rounds: Vec<Round>,
    /// Player -> deck label, filled in after verification
    #[serde(default)]
    pub decks: HashMap<PlayerId, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMetadata {
    #[serde(default)]
    pub prize_pool: Option<u64>,
    /// Players who did not pay into the prize pool (usually the organizer)
    #[serde(default)]
    pub non_paying: usize,
}

impl RawTournament {
    /// Strips parenthesised markers such as "(Drop)" from every name in the
    /// pairings and the deck map.
    pub fn normalize_names(&mut self) {
        for round in &mut self.rounds {
            for m in &mut round.matches {
                m.p1 = clean_participant(&m.p1);
                m.p2 = clean_participant(&m.p2);
            }
        }

        self.decks = self
            .decks
            .drain()
            .map(|(name, deck)| (clean_name(&name), deck))
            .collect();
    }

    pub fn deck_for(&self, player: &str) -> Option<String> {
        self.decks
            .get(player)
            .map(|d| d.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string)
    }
}

fn clean_participant(participant: &Participant) -> Participant {
    match participant {
        Participant::Real(name) => Participant::from(clean_name(name)),
        Participant::Bye => Participant::Bye,
    }
}

static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(.*?\)").expect("marker pattern is valid"));

/// "Alice (Drop)" -> "Alice"
pub fn clean_name(raw: &str) -> String {
    MARKER.replace_all(raw, "").trim().to_string()
}
