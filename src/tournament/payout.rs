use serde::{Deserialize, Serialize};

/// Prize amounts by rank; rank 1 is the first entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayoutTable {
    amounts: Vec<u64>,
}

impl PayoutTable {
    pub fn new(amounts: Vec<u64>) -> Self {
        Self { amounts }
    }

    /// Split `entry_fee * (players - non_paying)` by the given shares,
    /// rounding each amount down.
    pub fn from_prize_pool(entry_fee: u64, players: usize, non_paying: usize, shares: &[f64]) -> Self {
        Self::split(prize_pool(entry_fee, players, non_paying), shares)
    }

    /// Split a known pool by the given shares
    pub fn split(pool: u64, shares: &[f64]) -> Self {
        let amounts = shares
            .iter()
            .map(|share| (pool as f64 * share.max(0.0)).floor() as u64)
            .collect();

        Self { amounts }
    }

    /// Ranks beyond the table receive nothing
    pub fn amount_for_rank(&self, rank: usize) -> u64 {
        rank.checked_sub(1)
            .and_then(|idx| self.amounts.get(idx))
            .copied()
            .unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.amounts.iter().sum()
    }
}

pub fn prize_pool(entry_fee: u64, players: usize, non_paying: usize) -> u64 {
    entry_fee.saturating_mul(players.saturating_sub(non_paying) as u64)
}
