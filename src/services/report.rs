use colored::*;
use std::fmt::{self, Write as _};

use crate::database::LeagueSummary;
use crate::domain::TournamentRecord;
use crate::league::HeadToHeadRecord;
use crate::profile::PlayerProfile;

const NAME_WIDTH: usize = 24;

/// Final standings of one tournament
pub fn tournament_table(record: &TournamentRecord) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "{} ({}, week {}, {} players, {} rounds)",
        record.name.bold(),
        record.date,
        record.week_number,
        record.metadata.players,
        record.metadata.rounds
    )?;
    writeln!(
        out,
        "{}",
        format!(
            "{:>4}  {:<w$} {:>7} {:>4} {:>7} {:>7} {:>7} {:>6}  {}",
            "#", "Player", "Record", "Pts", "OMW", "GW", "OGW", "Prize", "Deck",
            w = NAME_WIDTH
        )
        .dimmed()
    )?;

    for row in &record.standings {
        let prize = if row.payout > 0 {
            row.payout.to_string().green().to_string()
        } else {
            "-".to_string()
        };
        writeln!(
            out,
            "{:>4}  {:<w$} {:>7} {:>4} {:>7} {:>7} {:>7} {:>6}  {}",
            row.rank,
            row.name,
            row.record,
            row.points,
            percent(row.omw),
            percent(row.gw),
            percent(row.ogw),
            prize,
            row.deck.as_deref().unwrap_or("-"),
            w = NAME_WIDTH
        )?;
    }

    Ok(out)
}

/// League standings, optionally with the lowest score still counting
pub fn league_table(league: &LeagueSummary, show_lowest: bool) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let rule = match league.best_n {
        Some(n) if n > 0 => format!("best {} results count", n),
        _ => "all results count".to_string(),
    };
    writeln!(
        out,
        "{} ({} tournaments, {})",
        league.name.bold(),
        league.tournaments.len(),
        rule
    )?;

    let lowest_header = if show_lowest { "Lowest" } else { "" };
    writeln!(
        out,
        "{}",
        format!(
            "{:>4}  {:<w$} {:>6} {:>8} {:>9} {:>6}",
            "#", "Player", "Points", "Played", "W-L-D", lowest_header,
            w = NAME_WIDTH
        )
        .dimmed()
    )?;

    for row in &league.report.standings {
        let rank = match row.rank {
            1 => row.rank.to_string().yellow().bold().to_string(),
            _ => row.rank.to_string(),
        };
        let lowest = if show_lowest {
            row.lowest_counting.to_string()
        } else {
            String::new()
        };
        writeln!(
            out,
            "{:>4}  {:<w$} {:>6} {:>8} {:>9} {:>6}",
            rank,
            row.name,
            row.points,
            row.tournaments_display(),
            format!("{}-{}-{}", row.wins, row.losses, row.draws),
            lowest,
            w = NAME_WIDTH
        )?;
    }

    if !league.metagame.is_empty() {
        writeln!(out, "\n{}", "Metagame".cyan())?;
        for share in &league.metagame {
            writeln!(out, "  {:<w$} {:>4}", share.deck, share.count, w = NAME_WIDTH)?;
        }
    }

    Ok(out)
}

pub fn profile_table(profile: &PlayerProfile, rivals: &[HeadToHeadRecord]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", profile.name.bold())?;
    writeln!(
        out,
        "  {} tournaments, {}-{}-{} in matches, {} match wins",
        profile.tournaments_played,
        profile.wins,
        profile.losses,
        profile.draws,
        percent(profile.win_rate)
    )?;

    if !profile.decks.is_empty() {
        writeln!(out, "\n{}", "Decks".cyan())?;
        for deck in &profile.decks {
            writeln!(
                out,
                "  {:<w$} {:>3}x  {:>7}",
                deck.deck,
                deck.count,
                percent(deck.win_rate),
                w = NAME_WIDTH
            )?;
        }
    }

    if !rivals.is_empty() {
        writeln!(out, "\n{}", "Head to head".cyan())?;
        for rival in rivals {
            writeln!(
                out,
                "  vs {:<w$} {}-{}-{} (games {}-{})",
                rival.player_b,
                rival.a_match_wins,
                rival.b_match_wins,
                rival.draws,
                rival.a_game_wins,
                rival.b_game_wins,
                w = NAME_WIDTH
            )?;
        }
    }

    writeln!(out, "\n{}", "History".cyan())?;
    for entry in &profile.history {
        writeln!(
            out,
            "  {}  {:<10} {:>7}  #{:<3} {:>3} pts  {}",
            entry.date,
            entry.tournament_id,
            entry.record,
            entry.rank,
            entry.points,
            entry.deck.as_deref().unwrap_or("-")
        )?;
    }

    Ok(out)
}

fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}
