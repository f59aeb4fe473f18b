use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::MetagameSettings;
use crate::domain::TournamentRecord;

pub const OTHERS: &str = "Others";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckShare {
    pub deck: String,
    pub count: usize,
}

/// Deck counts across the given tournaments, most played first.
///
/// Only the top `max_shown` decks are listed by name. The rest, plus any deck
/// in `grouped`, are folded into a trailing "Others" entry. Equal counts keep
/// first-seen order. Players without a deck label are not counted.
pub fn deck_metagame<'a>(
    tournaments: impl IntoIterator<Item = &'a TournamentRecord>,
    settings: &MetagameSettings,
) -> Vec<DeckShare> {
    let mut shares: Vec<DeckShare> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut grouped = 0;

    let decks = tournaments
        .into_iter()
        .flat_map(|t| t.standings.iter())
        .filter_map(|r| r.deck.as_deref());

    for deck in decks {
        if settings.grouped.iter().any(|g| g == deck) {
            grouped += 1;
            continue;
        }

        let slot = *index.entry(deck).or_insert_with(|| {
            shares.push(DeckShare {
                deck: deck.to_string(),
                count: 0,
            });
            shares.len() - 1
        });
        shares[slot].count += 1;
    }

    shares.sort_by(|a, b| b.count.cmp(&a.count));

    let overflow: usize = shares
        .iter()
        .skip(settings.max_shown)
        .map(|s| s.count)
        .sum();
    shares.truncate(settings.max_shown);

    if overflow + grouped > 0 {
        shares.push(DeckShare {
            deck: OTHERS.to_string(),
            count: overflow + grouped,
        });
    }

    shares
}
