use std::collections::{HashMap, HashSet};

use crate::domain::{Match, MatchOutcome, PlayerId, Round};
use crate::errors::{EngineResult, MalformedInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SideResult {
    Win,
    Loss,
    Draw,
}

/// Running totals for one player across all rounds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerLedger {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    // Everything below only counts matches against a real opponent.
    pub played_matches: u32,
    pub played_wins: u32,
    pub played_draws: u32,
    pub games_won: u32,
    pub games_played: u32,
    /// Ledger index of the opponent, once per match
    pub opponents: Vec<usize>,
}

impl PlayerLedger {
    fn record(&mut self, result: SideResult, opponent: Option<usize>, games_won: u32, games_played: u32) {
        match result {
            SideResult::Win => self.wins += 1,
            SideResult::Loss => self.losses += 1,
            SideResult::Draw => self.draws += 1,
        }

        let Some(opponent) = opponent else {
            return;
        };

        self.played_matches += 1;
        match result {
            SideResult::Win => self.played_wins += 1,
            SideResult::Draw => self.played_draws += 1,
            SideResult::Loss => {}
        }
        self.games_won += games_won;
        self.games_played += games_played;
        self.opponents.push(opponent);
    }
}

/// Per-player ledgers in order of first appearance
#[derive(Debug, Default)]
pub struct Ledger {
    pub players: Vec<PlayerId>,
    pub entries: Vec<PlayerLedger>,
    index: HashMap<PlayerId, usize>,
}

impl Ledger {
    pub fn from_rounds(rounds: &[Round]) -> EngineResult<Self> {
        validate_round_indices(rounds)?;

        let mut ledger = Self::default();
        for round in rounds {
            let mut paired = HashSet::new();
            for m in &round.matches {
                validate_match(round.index, m, &mut paired)?;
                ledger.apply(m);
            }
        }

        Ok(ledger)
    }

    fn slot(&mut self, player: &PlayerId) -> usize {
        if let Some(&idx) = self.index.get(player) {
            return idx;
        }

        let idx = self.players.len();
        self.players.push(player.clone());
        self.entries.push(PlayerLedger::default());
        self.index.insert(player.clone(), idx);
        idx
    }

    fn apply(&mut self, m: &Match) {
        let first = m.p1.player().map(|p| self.slot(p));
        let second = m.p2.player().map(|p| self.slot(p));
        let total_games = m.total_games();

        let (first_result, second_result) = match m.outcome() {
            MatchOutcome::FirstWins => (SideResult::Win, SideResult::Loss),
            MatchOutcome::SecondWins => (SideResult::Loss, SideResult::Win),
            MatchOutcome::Draw => (SideResult::Draw, SideResult::Draw),
        };

        if let Some(i) = first {
            self.entries[i].record(first_result, second, m.p1_wins, total_games);
        }
        if let Some(j) = second {
            self.entries[j].record(second_result, first, m.p2_wins, total_games);
        }
    }
}

/// Distinct real players across all rounds
pub fn count_players(rounds: &[Round]) -> usize {
    rounds
        .iter()
        .flat_map(|r| r.matches.iter())
        .flat_map(|m| [m.p1.player(), m.p2.player()])
        .flatten()
        .collect::<HashSet<_>>()
        .len()
}

fn validate_round_indices(rounds: &[Round]) -> EngineResult<()> {
    let mut seen = HashSet::new();
    for round in rounds {
        if !seen.insert(round.index) {
            return Err(MalformedInput::DuplicateRound { round: round.index }.into());
        }
    }
    Ok(())
}

fn validate_match<'a>(round: u32, m: &'a Match, paired: &mut HashSet<&'a PlayerId>) -> EngineResult<()> {
    let players: Vec<&PlayerId> = [m.p1.player(), m.p2.player()].into_iter().flatten().collect();

    match players.as_slice() {
        [] => return Err(MalformedInput::NoRealParticipant { round }.into()),
        [a, b] if a == b => {
            return Err(MalformedInput::SelfPairing {
                round,
                player: a.to_string(),
            }
            .into());
        }
        _ => {}
    }

    for player in players {
        if !paired.insert(player) {
            return Err(MalformedInput::DuplicatePairing {
                round,
                player: player.clone(),
            }
            .into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Participant;
    use crate::errors::EngineError;

    fn real(name: &str) -> Participant {
        Participant::Real(name.to_string())
    }

    #[test]
    fn test_ledger_counts_bye_in_record_only() {
        let rounds = vec![Round {
            index: 1,
            matches: vec![
                Match::new(real("A"), Participant::Bye, 2, 0, 0),
                Match::new(real("B"), real("C"), 1, 2, 0),
            ],
        }];

        let ledger = Ledger::from_rounds(&rounds).unwrap();
        assert_eq!(ledger.players, vec!["A", "B", "C"]);

        let a = &ledger.entries[0];
        assert_eq!((a.wins, a.losses, a.draws), (1, 0, 0));
        assert_eq!(a.played_matches, 0);
        assert!(a.opponents.is_empty());

        let c = &ledger.entries[2];
        assert_eq!((c.wins, c.games_won, c.games_played), (1, 2, 3));
        assert_eq!(c.opponents, vec![1]);
    }

    #[test]
    fn test_duplicate_pairing_is_rejected() {
        let rounds = vec![Round {
            index: 1,
            matches: vec![
                Match::new(real("A"), real("B"), 2, 0, 0),
                Match::new(real("C"), real("A"), 2, 0, 0),
            ],
        }];

        let err = Ledger::from_rounds(&rounds).unwrap_err();
        assert_eq!(
            err,
            EngineError::MalformedInput(MalformedInput::DuplicatePairing {
                round: 1,
                player: "A".to_string()
            })
        );
    }

    #[test]
    fn test_bye_may_recur_within_a_round() {
        let rounds = vec![Round {
            index: 1,
            matches: vec![
                Match::new(real("A"), Participant::Bye, 2, 0, 0),
                Match::new(real("B"), Participant::Bye, 2, 0, 0),
            ],
        }];

        assert!(Ledger::from_rounds(&rounds).is_ok());
    }

    #[test]
    fn test_invalid_matches_are_rejected() {
        let bye_only = vec![Round {
            index: 1,
            matches: vec![Match::new(Participant::Bye, Participant::Bye, 0, 0, 0)],
        }];
        assert!(matches!(
            Ledger::from_rounds(&bye_only),
            Err(EngineError::MalformedInput(MalformedInput::NoRealParticipant { round: 1 }))
        ));

        let self_paired = vec![Round {
            index: 2,
            matches: vec![Match::new(real("A"), real("A"), 2, 0, 0)],
        }];
        assert!(matches!(
            Ledger::from_rounds(&self_paired),
            Err(EngineError::MalformedInput(MalformedInput::SelfPairing { round: 2, .. }))
        ));

        let repeated_round = vec![
            Round { index: 1, matches: vec![] },
            Round { index: 1, matches: vec![] },
        ];
        assert!(matches!(
            Ledger::from_rounds(&repeated_round),
            Err(EngineError::MalformedInput(MalformedInput::DuplicateRound { round: 1 }))
        ));
    }

    #[test]
    fn test_count_players() {
        let rounds = vec![
            Round {
                index: 1,
                matches: vec![
                    Match::new(real("A"), real("B"), 2, 0, 0),
                    Match::new(real("C"), Participant::Bye, 2, 0, 0),
                ],
            },
            Round {
                index: 2,
                matches: vec![Match::new(real("A"), real("C"), 2, 0, 0)],
            },
        ];
        assert_eq!(count_players(&rounds), 3);
    }
}
