use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use std::path::Path;

use crate::config::settings::AppConfig;
use crate::config::{
    get_leagues, league_for_week, LeagueConfig, MetagameSettings, ALL_TIME_ID, ALL_TIME_NAME,
};
use crate::database::{LeagueDatabase, LeagueSummary};
use crate::domain::{
    LeagueSeason, ProcessProgress, RawTournament, TournamentCollection, TournamentId, TournamentRecord,
};
use crate::league;
use crate::snapshot::SnapshotStore;
use crate::tournament::{self, count_players, PayoutTable, TournamentRules};

pub struct ProcessingService {
    config: AppConfig,
    store: SnapshotStore,
}

impl ProcessingService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let config = match std::env::var("LEAGUE_DATA_DIR") {
            Ok(dir) => config.with_data_dir(dir),
            Err(_) => config,
        };
        let store = SnapshotStore::from_settings(&config.snapshot)?;

        Ok(Self { config, store })
    }

    /// Resolve every raw weekly file and publish the league database
    pub fn run(&self) -> Result<LeagueDatabase> {
        info!("=== Starting League Processing ===\n");

        let raws = self.store.load_raw_tournaments()?;
        info!("  → Loaded {} raw tournaments\n", raws.len());

        let database = build_database(&raws, &self.config, &get_leagues())?;
        info!(
            "  → Built {} leagues over {} tournaments\n",
            database.leagues.len(),
            database.tournaments.len()
        );

        self.store.save_database(&database)?;

        info!("=== Processing Complete ===");
        Ok(database)
    }

    /// Read the database written by the last `run`
    pub fn load_database(&self) -> Result<LeagueDatabase> {
        self.store
            .load_database()?
            .ok_or_else(|| anyhow!("No processed data found, run `process` first"))
    }
}

/// Resolve a single raw file without touching the data directory
pub fn resolve_file<P: AsRef<Path>>(path: P, config: &AppConfig) -> Result<TournamentRecord> {
    let raw = SnapshotStore::load_raw_file(path)?;
    let leagues = get_leagues();
    let league_id = league_for_week(&leagues, raw.week_number).map(|l| l.id);

    tournament::build_record(&raw, league_id, &rules_for(&raw, config))
        .with_context(|| format!("Failed to resolve tournament {}", raw.id))
}

/// Resolve all tournaments, assign them to seasons and aggregate every league
pub fn build_database(
    raws: &[RawTournament],
    config: &AppConfig,
    leagues: &[LeagueConfig],
) -> Result<LeagueDatabase> {
    let collection = resolve_all(raws, config, leagues)?;

    let mut summaries = Vec::with_capacity(leagues.len() + 1);
    summaries.push(summarize(
        ALL_TIME_ID,
        ALL_TIME_NAME,
        None,
        collection.ids().to_vec(),
        &collection,
        &config.metagame,
    )?);

    for league in leagues {
        let ids = season_tournaments(&collection, league.id);
        if ids.is_empty() {
            info!("  Skipping {}: no tournaments yet", league.name);
            continue;
        }

        info!("  Aggregating {} ({} tournaments)", league.name, ids.len());
        summaries.push(summarize(
            league.id,
            league.name,
            league.best_n,
            ids,
            &collection,
            &config.metagame,
        )?);
    }

    Ok(LeagueDatabase {
        leagues: summaries,
        tournaments: collection
            .into_vec()
            .into_iter()
            .map(|t| (t.id.clone(), t))
            .collect(),
    })
}

fn resolve_all(
    raws: &[RawTournament],
    config: &AppConfig,
    leagues: &[LeagueConfig],
) -> Result<TournamentCollection> {
    let mut collection = TournamentCollection::new();
    let mut progress = ProcessProgress::new(raws.len());

    for raw in raws {
        if raw.rounds.is_empty() {
            warn!("  Tournament {} has no rounds, skipping", raw.id);
            progress.increment_skipped();
            continue;
        }

        let league_id = league_for_week(leagues, raw.week_number).map(|l| l.id);
        let record = tournament::build_record(raw, league_id, &rules_for(raw, config))
            .with_context(|| format!("Failed to resolve tournament {}", raw.id))?;

        collection.add(record);
        progress.increment_resolved();
    }

    if progress.skipped() > 0 {
        info!("  Skipped {} empty tournaments", progress.skipped());
    }
    Ok(collection)
}

/// Payouts come from the file's prize pool, else from the entry fee, else
/// from the fixed table.
fn rules_for(raw: &RawTournament, config: &AppConfig) -> TournamentRules {
    let payout = &config.payout;
    let table = match (raw.metadata.prize_pool, payout.entry_fee) {
        (Some(pool), _) => PayoutTable::split(pool, &payout.shares),
        (None, Some(fee)) => PayoutTable::from_prize_pool(
            fee,
            count_players(&raw.rounds),
            raw.metadata.non_paying,
            &payout.shares,
        ),
        (None, None) => PayoutTable::new(payout.amounts.clone()),
    };

    TournamentRules::new(config.scoring, config.tiebreak, table)
}

fn season_tournaments(collection: &TournamentCollection, league_id: &str) -> Vec<TournamentId> {
    collection
        .iter()
        .filter(|t| t.league_id.as_deref() == Some(league_id))
        .map(|t| t.id.clone())
        .collect()
}

fn summarize(
    id: &str,
    name: &str,
    best_n: Option<i64>,
    tournaments: Vec<TournamentId>,
    collection: &TournamentCollection,
    metagame: &MetagameSettings,
) -> Result<LeagueSummary> {
    let season = LeagueSeason {
        id: id.to_string(),
        name: name.to_string(),
        tournaments,
        best_n,
    };

    let report = league::aggregate_season(&season, collection)
        .with_context(|| format!("Failed to aggregate league {}", id))?;
    let tournaments: Vec<&TournamentRecord> = season
        .tournaments
        .iter()
        .filter_map(|t| collection.get(t))
        .collect();
    let head_to_head = league::head_to_head(tournaments.iter().copied());
    let metagame = league::deck_metagame(tournaments, metagame);

    let mut newest_first = season.tournaments;
    newest_first.reverse();

    Ok(LeagueSummary {
        id: season.id,
        name: season.name,
        best_n,
        tournaments: newest_first,
        report,
        head_to_head,
        metagame,
    })
}
