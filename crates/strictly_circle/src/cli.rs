//! Command-line interface for strictly_circle.

use clap::{Parser, Subcommand};

/// Strictly Circle - click the arcs dark before the clock runs out
#[derive(Parser, Debug)]
#[command(name = "strictly_circle")]
#[command(about = "Three-segment circle party game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal (mouse required)
    Play {
        /// Number of players. Prompted for when neither this nor the config sets it.
        #[arg(short, long, allow_negative_numbers = true)]
        players: Option<i64>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Game length in seconds (overrides config)
        #[arg(long)]
        duration: Option<u64>,

        /// Seed for the click budget dice (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play a game with random clicks on a virtual clock and print the scores
    Simulate {
        /// Number of players
        #[arg(short, long, allow_negative_numbers = true)]
        players: i64,

        /// Seed for dice and clicks
        #[arg(long)]
        seed: Option<u64>,

        /// Game length in seconds
        #[arg(long, default_value = "30")]
        duration: u64,

        /// Virtual time between clicks
        #[arg(long, default_value = "400")]
        click_interval_ms: u64,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
