//! Tournament resolver: turns one event's pairings into ranked standings.

mod payout;
mod ranking;
mod records;
mod tiebreakers;

pub use payout::{prize_pool, PayoutTable};
pub use records::count_players;
pub use tiebreakers::Tiebreakers;

use crate::config::{ScoringSettings, TiebreakSettings};
use crate::domain::{
    PlayerTournamentResult, Points, RawTournament, Round, TournamentMetadata, TournamentRecord,
};
use crate::errors::{ConfigurationError, EngineResult};
use records::{Ledger, PlayerLedger};

/// Everything the resolver needs besides the pairings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TournamentRules {
    pub scoring: ScoringSettings,
    pub tiebreak: TiebreakSettings,
    pub payouts: PayoutTable,
}

impl TournamentRules {
    pub fn new(scoring: ScoringSettings, tiebreak: TiebreakSettings, payouts: PayoutTable) -> Self {
        Self {
            scoring,
            tiebreak,
            payouts,
        }
    }

    pub fn with_payouts(mut self, payouts: PayoutTable) -> Self {
        self.payouts = payouts;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.tiebreak.validate()
    }
}

/// Resolve standings for one tournament.
///
/// Players are listed in final rank order. Zero rounds yields an empty
/// table; malformed pairings or an invalid tiebreak floor yield an error and
/// no partial table.
pub fn resolve(rounds: &[Round], rules: &TournamentRules) -> EngineResult<Vec<PlayerTournamentResult>> {
    rules.validate()?;

    let ledger = Ledger::from_rounds(rounds)?;
    let tiebreakers = tiebreakers::compute_tiebreakers(&ledger, rules.tiebreak.floor);
    let points: Vec<Points> = ledger
        .entries
        .iter()
        .map(|e| points_for(e, &rules.scoring))
        .collect();

    let standings = ranking::rank_order(&points, &tiebreakers)
        .into_iter()
        .enumerate()
        .map(|(pos, idx)| {
            let rank = pos + 1;
            build_result(
                rank,
                &ledger.players[idx],
                &ledger.entries[idx],
                points[idx],
                &tiebreakers[idx],
                rules.payouts.amount_for_rank(rank),
            )
        })
        .collect();

    Ok(standings)
}

/// Resolve a raw weekly file into a complete tournament record
pub fn build_record(
    raw: &RawTournament,
    league_id: Option<&str>,
    rules: &TournamentRules,
) -> EngineResult<TournamentRecord> {
    let mut standings = resolve(&raw.rounds, rules)?;
    for result in &mut standings {
        result.deck = raw.deck_for(&result.name);
    }

    let metadata = TournamentMetadata {
        players: standings.len(),
        rounds: raw.rounds.len(),
        prize_pool: raw.metadata.prize_pool.unwrap_or_else(|| rules.payouts.total()),
    };

    Ok(TournamentRecord {
        id: raw.id.clone(),
        name: raw.name.clone(),
        date: raw.date,
        week_number: raw.week_number,
        league_id: league_id.map(str::to_string),
        metadata,
        rounds: raw.rounds.clone(),
        standings,
    })
}

fn points_for(entry: &PlayerLedger, scoring: &ScoringSettings) -> Points {
    Points::from(entry.wins) * scoring.win
        + Points::from(entry.draws) * scoring.draw
        + Points::from(entry.losses) * scoring.loss
}

fn build_result(
    rank: usize,
    player: &str,
    entry: &PlayerLedger,
    points: Points,
    tiebreakers: &Tiebreakers,
    payout: u64,
) -> PlayerTournamentResult {
    PlayerTournamentResult {
        rank,
        name: player.to_string(),
        deck: None,
        points,
        record: format!("{}-{}-{}", entry.wins, entry.losses, entry.draws),
        wins: entry.wins,
        losses: entry.losses,
        draws: entry.draws,
        omw: tiebreakers.omw,
        gw: tiebreakers.gw,
        ogw: tiebreakers.ogw,
        mw: tiebreakers.mw,
        payout,
    }
}
