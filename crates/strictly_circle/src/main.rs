//! Strictly Circle - Unified CLI

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use strictly_circle::cli::{Cli, Command};
use strictly_circle::tui::{format_final_scores, run_tui};
use strictly_circle::{CircleConfig, Simulation, prompt_player_count};
use strictly_segments::{PlayerCount, Rules};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            players,
            config,
            duration,
            seed,
        } => run_play(players, config, duration, seed),
        Command::Simulate {
            players,
            seed,
            duration,
            click_interval_ms,
            json,
        } => run_simulate(players, seed, duration, click_interval_ms, json),
    }
}

/// Play one game in the terminal
fn run_play(
    players: Option<i64>,
    config_path: Option<PathBuf>,
    duration: Option<u64>,
    seed: Option<u64>,
) -> Result<()> {
    let config = match &config_path {
        Some(path) => CircleConfig::from_file(path)?,
        None => CircleConfig::default(),
    }
    .with_overrides(players, duration, seed);

    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    // Asked before raw mode, in place of a dialog
    let players = match config.players() {
        Some(requested) => PlayerCount::new(*requested)?,
        None => prompt_player_count(io::stdin().lock(), io::stdout())?,
    };

    info!(players = players.get(), "Starting game");
    match run_tui(&config, players)? {
        Some(scores) => println!("{}", format_final_scores(&scores)),
        None => println!("Game abandoned."),
    }
    Ok(())
}

/// Play a headless game and print the report
fn run_simulate(
    players: i64,
    seed: Option<u64>,
    duration: u64,
    click_interval_ms: u64,
    json: bool,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let players = PlayerCount::new(players)?;
    let rules = Rules::new(players, Duration::from_secs(duration))?;
    let report = Simulation::new(rules, Duration::from_millis(click_interval_ms), seed).run()?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}
