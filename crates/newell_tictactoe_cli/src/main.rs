//! Newell - terminal front end
//!
//! Play the Newell-Simon engine, ask it for a single move, or audit it
//! against every possible game.

#![warn(missing_docs)]

mod audit;
mod cli;
mod config;
mod decide;
mod play;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::PlayConfig;
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so stdout stays the game.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    match cli.command {
        Command::Play {
            mark,
            fork_defense,
            config,
        } => {
            let config = load_config(config)?.with_overrides(mark, fork_defense);
            play::run_play(&config, std::io::stdin().lock(), stdout.lock())
        }
        Command::Decide {
            board,
            computer,
            fork_defense,
            json,
        } => decide::run_decide(board, computer, fork_defense, json, stdout.lock()),
        Command::Audit { fork_defense, json } => audit::run_audit(fork_defense, json, stdout.lock()),
    }
}

/// Reads the config file if one was given, otherwise defaults.
#[instrument]
fn load_config(path: Option<std::path::PathBuf>) -> Result<PlayConfig> {
    match path {
        Some(path) => Ok(PlayConfig::from_file(path)?),
        None => {
            debug!("No config file, using defaults");
            Ok(PlayConfig::default())
        }
    }
}
