use serde::{Deserialize, Serialize};

use super::records::{Ledger, PlayerLedger};

/// Swiss tiebreak percentages, each already clamped to the floor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tiebreakers {
    pub omw: f64,
    pub gw: f64,
    pub ogw: f64,
    pub mw: f64,
}

pub fn compute_tiebreakers(ledger: &Ledger, floor: f64) -> Vec<Tiebreakers> {
    let match_win: Vec<f64> = ledger
        .entries
        .iter()
        .map(|e| match_win_pct(e, floor))
        .collect();
    let game_win: Vec<f64> = ledger
        .entries
        .iter()
        .map(|e| game_win_pct(e, floor))
        .collect();

    ledger
        .entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| Tiebreakers {
            omw: opponent_mean(&entry.opponents, &match_win, floor),
            gw: game_win[idx],
            ogw: opponent_mean(&entry.opponents, &game_win, floor),
            mw: match_win[idx],
        })
        .collect()
}

fn match_win_pct(entry: &PlayerLedger, floor: f64) -> f64 {
    if entry.played_matches == 0 {
        return floor;
    }

    let earned = entry.played_wins as f64 + 0.5 * entry.played_draws as f64;
    (earned / entry.played_matches as f64).max(floor)
}

fn game_win_pct(entry: &PlayerLedger, floor: f64) -> f64 {
    if entry.games_played == 0 {
        return floor;
    }

    (entry.games_won as f64 / entry.games_played as f64).max(floor)
}

fn opponent_mean(opponents: &[usize], values: &[f64], floor: f64) -> f64 {
    if opponents.is_empty() {
        return floor;
    }

    let sum: f64 = opponents.iter().map(|&o| values[o]).sum();
    (sum / opponents.len() as f64).max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Match, Participant, Round};

    const FLOOR: f64 = 1.0 / 3.0;

    fn real(name: &str) -> Participant {
        Participant::Real(name.to_string())
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_tiebreakers_for_small_pod() {
        let rounds = vec![
            Round {
                index: 1,
                matches: vec![
                    Match::new(real("A"), real("B"), 2, 0, 0),
                    Match::new(real("C"), real("D"), 2, 1, 0),
                ],
            },
            Round {
                index: 2,
                matches: vec![
                    Match::new(real("A"), real("C"), 2, 1, 0),
                    Match::new(real("B"), real("D"), 2, 1, 0),
                ],
            },
        ];
        let ledger = Ledger::from_rounds(&rounds).unwrap();
        let tb = compute_tiebreakers(&ledger, FLOOR);

        // A: 2-0, games 4/5
        assert!(close(tb[0].mw, 1.0));
        assert!(close(tb[0].gw, 0.8));
        assert!(close(tb[0].omw, 0.5));
        // B: 1-1, games 2/5, opponents A and D (floored)
        assert!(close(tb[1].mw, 0.5));
        assert!(close(tb[1].gw, 0.4));
        assert!(close(tb[1].omw, (1.0 + FLOOR) / 2.0));
        // D: 0-2, everything floored
        assert!(close(tb[3].mw, FLOOR));
        assert!(close(tb[3].gw, FLOOR));
    }

    #[test]
    fn test_bye_only_player_gets_floor() {
        let rounds = vec![Round {
            index: 1,
            matches: vec![Match::new(real("A"), Participant::Bye, 2, 0, 0)],
        }];
        let ledger = Ledger::from_rounds(&rounds).unwrap();
        let tb = compute_tiebreakers(&ledger, FLOOR);

        assert_eq!(
            tb[0],
            Tiebreakers {
                omw: FLOOR,
                gw: FLOOR,
                ogw: FLOOR,
                mw: FLOOR
            }
        );
    }

    #[test]
    fn test_drawn_match_counts_half() {
        let rounds = vec![Round {
            index: 1,
            matches: vec![Match::new(real("A"), real("B"), 1, 1, 1)],
        }];
        let ledger = Ledger::from_rounds(&rounds).unwrap();
        let tb = compute_tiebreakers(&ledger, 0.0);

        assert!(close(tb[0].mw, 0.5));
        assert!(close(tb[0].gw, 1.0 / 3.0));
        assert!(close(tb[1].omw, 0.5));
    }
}
