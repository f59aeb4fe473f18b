use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type PlayerId = String;
pub type TournamentId = String;
pub type Points = i64;

/// One side of a pairing. Unplayed rounds are paired against `Bye`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Participant {
    Real(PlayerId),
    Bye,
}

impl Participant {
    pub fn player(&self) -> Option<&PlayerId> {
        match self {
            Participant::Real(id) => Some(id),
            Participant::Bye => None,
        }
    }
}

impl From<String> for Participant {
    fn from(raw: String) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("bye") {
            Participant::Bye
        } else {
            Participant::Real(trimmed.to_string())
        }
    }
}

impl From<Participant> for String {
    fn from(participant: Participant) -> Self {
        match participant {
            Participant::Real(id) => id,
            Participant::Bye => "BYE".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    FirstWins,
    SecondWins,
    Draw,
}

/// A single pairing with its game score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub p1: Participant,
    pub p2: Participant,
    pub p1_wins: u32,
    pub p2_wins: u32,
    #[serde(default)]
    pub draws: u32,
}

impl Match {
    pub fn new(p1: Participant, p2: Participant, p1_wins: u32, p2_wins: u32, draws: u32) -> Self {
        Self {
            p1,
            p2,
            p1_wins,
            p2_wins,
            draws,
        }
    }

    /// Higher game-win count takes the match; equal counts are a draw.
    pub fn outcome(&self) -> MatchOutcome {
        use std::cmp::Ordering;

        match self.p1_wins.cmp(&self.p2_wins) {
            Ordering::Greater => MatchOutcome::FirstWins,
            Ordering::Less => MatchOutcome::SecondWins,
            Ordering::Equal => MatchOutcome::Draw,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.p1_wins + self.p2_wins + self.draws
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    #[serde(rename = "round")]
    pub index: u32,
    pub matches: Vec<Match>,
}

/// One player's line in a tournament's final standings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerTournamentResult {
    pub rank: usize,
    pub name: PlayerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck: Option<String>,
    pub points: Points,
    pub record: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub omw: f64,
    pub gw: f64,
    pub ogw: f64,
    pub mw: f64,
    #[serde(default)]
    pub payout: u64,
}

impl PlayerTournamentResult {
    pub fn matches_played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentMetadata {
    pub players: usize,
    pub rounds: usize,
    #[serde(default)]
    pub prize_pool: u64,
}

/// A fully resolved tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentRecord {
    pub id: TournamentId,
    pub name: String,
    pub date: NaiveDate,
    pub week_number: u32,
    #[serde(default)]
    pub league_id: Option<String>,
    pub metadata: TournamentMetadata,
    pub rounds: Vec<Round>,
    pub standings: Vec<PlayerTournamentResult>,
}

impl TournamentRecord {
    pub fn result_for(&self, player: &str) -> Option<&PlayerTournamentResult> {
        self.standings.iter().find(|r| r.name == player)
    }
}

/// A season definition: chronological tournaments and the best-N rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueSeason {
    pub id: String,
    pub name: String,
    pub tournaments: Vec<TournamentId>,
    #[serde(default)]
    pub best_n: Option<i64>,
}
