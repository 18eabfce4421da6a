//! Counting circle - CLI
//!
//! Plays a single counting-out game and prints who survives.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use counting_circle::{CountingGame, GameConfig};
use std::path::PathBuf;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            children,
            count,
            config,
            format,
        } => run_play(children, count, config, format),
    }
}

/// Play one game from config file, flags and defaults
#[instrument]
fn run_play(
    children: Option<i64>,
    count: Option<i64>,
    config: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let config = match config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    }
    .with_overrides(children, count);
    debug!(?config, "Resolved game config");
    config.validate()?;

    let mut game = CountingGame::from_config(&config)?;
    let outcome = game.play()?;
    info!(survivor = outcome.survivor(), "Game complete");

    match format {
        OutputFormat::Text => println!("{}", outcome),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only the outcome
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
