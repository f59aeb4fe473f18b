use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::{Match, MatchOutcome, PlayerId, TournamentRecord};

/// Lifetime record between two players, oriented as `player_a` vs `player_b`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadToHeadRecord {
    pub player_a: PlayerId,
    pub player_b: PlayerId,
    pub meetings: u32,
    pub a_match_wins: u32,
    pub b_match_wins: u32,
    pub draws: u32,
    pub a_game_wins: u32,
    pub b_game_wins: u32,
}

impl HeadToHeadRecord {
    fn new(player_a: &str, player_b: &str) -> Self {
        Self {
            player_a: player_a.to_string(),
            player_b: player_b.to_string(),
            meetings: 0,
            a_match_wins: 0,
            b_match_wins: 0,
            draws: 0,
            a_game_wins: 0,
            b_game_wins: 0,
        }
    }

    /// Same record seen from the other side of the table
    pub fn reversed(&self) -> Self {
        Self {
            player_a: self.player_b.clone(),
            player_b: self.player_a.clone(),
            meetings: self.meetings,
            a_match_wins: self.b_match_wins,
            b_match_wins: self.a_match_wins,
            draws: self.draws,
            a_game_wins: self.b_game_wins,
            b_game_wins: self.a_game_wins,
        }
    }

    fn add(&mut self, m: &Match, a_is_first: bool) {
        let (a_games, b_games) = if a_is_first {
            (m.p1_wins, m.p2_wins)
        } else {
            (m.p2_wins, m.p1_wins)
        };

        self.meetings += 1;
        self.a_game_wins += a_games;
        self.b_game_wins += b_games;

        match (m.outcome(), a_is_first) {
            (MatchOutcome::Draw, _) => self.draws += 1,
            (MatchOutcome::FirstWins, true) | (MatchOutcome::SecondWins, false) => {
                self.a_match_wins += 1
            }
            _ => self.b_match_wins += 1,
        }
    }
}

/// Tally every pairing of two real players across the given tournaments.
/// Byes are skipped. Pairs appear in order of their first meeting, oriented
/// the way they were first paired.
pub fn head_to_head<'a>(tournaments: impl IntoIterator<Item = &'a TournamentRecord>) -> Vec<HeadToHeadRecord> {
    let mut records: Vec<HeadToHeadRecord> = Vec::new();
    let mut index: HashMap<(PlayerId, PlayerId), usize> = HashMap::new();

    let matches = tournaments
        .into_iter()
        .flat_map(|t| t.rounds.iter())
        .flat_map(|r| r.matches.iter());

    for m in matches {
        let (Some(first), Some(second)) = (m.p1.player(), m.p2.player()) else {
            continue;
        };

        let key = pair_key(first, second);
        let slot = *index.entry(key).or_insert_with(|| {
            records.push(HeadToHeadRecord::new(first, second));
            records.len() - 1
        });

        let record = &mut records[slot];
        let a_is_first = record.player_a == *first;
        record.add(m, a_is_first);
    }

    records
}

/// Record between `a` and `b`, oriented with `a` first; `None` if they never met
pub fn head_to_head_between<'a>(
    tournaments: impl IntoIterator<Item = &'a TournamentRecord>,
    a: &str,
    b: &str,
) -> Option<HeadToHeadRecord> {
    let wanted = pair_key(a, b);

    head_to_head(tournaments)
        .into_iter()
        .find(|r| pair_key(&r.player_a, &r.player_b) == wanted)
        .map(|r| if r.player_a == a { r } else { r.reversed() })
}

/// Every record involving `player`, oriented with them first
pub fn records_for(player: &str, records: &[HeadToHeadRecord]) -> Vec<HeadToHeadRecord> {
    records
        .iter()
        .filter_map(|r| {
            if r.player_a == player {
                Some(r.clone())
            } else if r.player_b == player {
                Some(r.reversed())
            } else {
                None
            }
        })
        .collect()
}

fn pair_key(a: &str, b: &str) -> (PlayerId, PlayerId) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}
