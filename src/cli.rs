use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss league standings engine")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Resolve standings for a single raw tournament file
    Resolve {
        /// Path to a week-N.json file
        path: PathBuf,
        /// Print the resolved record as JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Match points, e.g. "win=3,draw=1,loss=0"
        #[arg(short, long)]
        weights: Option<String>,
    },
    /// Resolve every raw tournament and write the league database
    Process {
        /// Match points, e.g. "win=3,draw=1,loss=0"
        #[arg(short, long)]
        weights: Option<String>,
    },
    /// Show league standings from the processed database
    Standings {
        /// League ID (defaults to the all-time table)
        #[arg(short, long)]
        league: Option<String>,
        /// Recompute with a different best-N rule (0 counts everything)
        #[arg(long)]
        best_n: Option<i64>,
        /// Show the lowest score still counting
        #[arg(long)]
        lowest: bool,
    },
    /// Show a player's profile from the processed database
    Profile {
        /// Player name
        player: String,
        /// Restrict to one league
        #[arg(short, long)]
        league: Option<String>,
    },
}
