pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod league;
pub mod profile;
pub mod services;
pub mod snapshot;
pub mod tournament;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use cli::Cli;
use std::path::Path;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::config::{ScoringSettings, ALL_TIME_ID};
use crate::database::{LeagueDatabase, LeagueSummary};
use crate::domain::{LeagueSeason, TournamentCollection};
use crate::services::processing::{self, ProcessingService};
use crate::services::report;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_resolve(path: &Path, json: bool, weights: Option<&str>) -> Result<()> {
    let config = app_config(weights)?;
    let record = processing::resolve_file(path, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", report::tournament_table(&record)?);
    }
    Ok(())
}

pub fn handle_process(weights: Option<&str>) -> Result<()> {
    let config = app_config(weights)?;
    let service = ProcessingService::new(config)?;
    service.run()?;
    Ok(())
}

pub fn handle_standings(league_id: Option<&str>, best_n: Option<i64>, lowest: bool) -> Result<()> {
    let service = ProcessingService::new(AppConfig::new())?;
    let database = service.load_database()?;

    let id = league_id.unwrap_or(ALL_TIME_ID);
    let summary = database
        .league(id)
        .ok_or_else(|| anyhow!("Unknown league: {}", id))?;

    let summary = match best_n {
        Some(n) => rescore(summary, n, &database)?,
        None => summary.clone(),
    };

    print!("{}", report::league_table(&summary, lowest)?);
    Ok(())
}

pub fn handle_profile(player: &str, league_id: Option<&str>) -> Result<()> {
    let service = ProcessingService::new(AppConfig::new())?;
    let database = service.load_database()?;

    let id = league_id.unwrap_or(ALL_TIME_ID);
    let summary = database
        .league(id)
        .ok_or_else(|| anyhow!("Unknown league: {}", id))?;

    let profile = profile::player_profile(player, database.league_tournaments(summary));
    if profile.tournaments_played == 0 {
        anyhow::bail!("{} has not played in {}", player, summary.name);
    }

    let rivals = league::records_for(player, &summary.head_to_head);
    print!("{}", report::profile_table(&profile, &rivals)?);
    Ok(())
}

/// Default settings, with match points overridden from the command line
fn app_config(weights: Option<&str>) -> Result<AppConfig> {
    let config = AppConfig::new();
    match weights {
        Some(weights) => {
            let scoring = ScoringSettings::parse(weights).context("Invalid --weights")?;
            Ok(config.with_scoring(scoring))
        }
        None => Ok(config),
    }
}

/// Re-aggregate a stored league under another best-N rule
fn rescore(
    summary: &LeagueSummary,
    best_n: i64,
    database: &LeagueDatabase,
) -> Result<LeagueSummary> {
    let season = LeagueSeason {
        id: summary.id.clone(),
        name: summary.name.clone(),
        tournaments: summary.tournaments.iter().rev().cloned().collect(),
        best_n: Some(best_n),
    };

    let mut collection = TournamentCollection::new();
    for tournament in database.league_tournaments(summary) {
        collection.add(tournament.clone());
    }

    let report = league::aggregate_season(&season, &collection)
        .with_context(|| format!("Failed to rescore league {}", summary.id))?;

    Ok(LeagueSummary {
        best_n: Some(best_n),
        report,
        ..summary.clone()
    })
}
