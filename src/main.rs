use anyhow::Result;

use legacy_league::cli::Command;
use legacy_league::{handle_process, handle_profile, handle_resolve, handle_standings, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Resolve {
            path,
            json,
            weights,
        } => handle_resolve(path, *json, weights.as_deref()),
        Command::Process { weights } => handle_process(weights.as_deref()),
        Command::Standings {
            league,
            best_n,
            lowest,
        } => handle_standings(league.as_deref(), *best_n, *lowest),
        Command::Profile { player, league } => handle_profile(player, league.as_deref()),
    }
}
