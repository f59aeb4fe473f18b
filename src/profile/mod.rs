//! Per-player career view across resolved tournaments.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{PlayerId, Points, TournamentId, TournamentRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckUsage {
    pub deck: String,
    pub count: usize,
    pub wins: u32,
    pub matches: u32,
    pub win_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileEntry {
    pub tournament_id: TournamentId,
    pub date: NaiveDate,
    pub deck: Option<String>,
    pub record: String,
    pub rank: usize,
    pub points: Points,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: PlayerId,
    pub tournaments_played: usize,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Match wins over matches played, 0 when nothing was played
    pub win_rate: f64,
    pub decks: Vec<DeckUsage>,
    /// Newest first
    pub history: Vec<ProfileEntry>,
}

impl PlayerProfile {
    pub fn matches(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

/// Build a player's profile. Tournaments must be given oldest first; the
/// player need not appear in all of them.
pub fn player_profile<'a>(
    player: &str,
    tournaments: impl IntoIterator<Item = &'a TournamentRecord>,
) -> PlayerProfile {
    let mut profile = PlayerProfile {
        name: player.to_string(),
        tournaments_played: 0,
        wins: 0,
        losses: 0,
        draws: 0,
        win_rate: 0.0,
        decks: Vec::new(),
        history: Vec::new(),
    };

    for tournament in tournaments {
        let Some(result) = tournament.result_for(player) else {
            continue;
        };

        profile.tournaments_played += 1;
        profile.wins += result.wins;
        profile.losses += result.losses;
        profile.draws += result.draws;

        if let Some(deck) = &result.deck {
            let usage = match profile.decks.iter().position(|d| d.deck == *deck) {
                Some(idx) => &mut profile.decks[idx],
                None => {
                    profile.decks.push(DeckUsage {
                        deck: deck.clone(),
                        count: 0,
                        wins: 0,
                        matches: 0,
                        win_rate: 0.0,
                    });
                    let last = profile.decks.len() - 1;
                    &mut profile.decks[last]
                }
            };
            usage.count += 1;
            usage.wins += result.wins;
            usage.matches += result.matches_played();
        }

        profile.history.push(ProfileEntry {
            tournament_id: tournament.id.clone(),
            date: tournament.date,
            deck: result.deck.clone(),
            record: result.record.clone(),
            rank: result.rank,
            points: result.points,
        });
    }

    profile.win_rate = rate(profile.wins, profile.matches());
    for usage in &mut profile.decks {
        usage.win_rate = rate(usage.wins, usage.matches);
    }
    // stable: equal counts keep first-use order
    profile.decks.sort_by(|a, b| b.count.cmp(&a.count));
    profile.history.reverse();

    profile
}

fn rate(wins: u32, matches: u32) -> f64 {
    if matches == 0 {
        0.0
    } else {
        f64::from(wins) / f64::from(matches)
    }
}
