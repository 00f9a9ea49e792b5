//! Command-line interface for newell.

use clap::{Parser, Subcommand};
use newell_tictactoe::{Board, ForkDefense, Mark};

/// Newell - tic-tac-toe against the Newell-Simon rule cascade
#[derive(Parser, Debug)]
#[command(name = "newell")]
#[command(about = "Unbeatable tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on stdin/stdout
    Play {
        /// Your mark (X moves first)
        #[arg(short, long)]
        mark: Option<Mark>,

        /// How the engine answers several fork threats
        #[arg(long)]
        fork_defense: Option<ForkDefense>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Print the engine's move for one board
    Decide {
        /// Board as nine cells, e.g. "XX.|.O.|..."
        #[arg(short, long)]
        board: Board,

        /// Mark the engine plays
        #[arg(long)]
        computer: Mark,

        /// How the engine answers several fork threats
        #[arg(long, default_value_t)]
        fork_defense: ForkDefense,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Play every possible game against the engine and report losses
    Audit {
        /// How the engine answers several fork threats
        #[arg(long, default_value_t)]
        fork_defense: ForkDefense,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decide() {
        let cli = Cli::try_parse_from([
            "newell",
            "decide",
            "--board",
            "XX.|.O.|...",
            "--computer",
            "x",
            "--fork-defense",
            "forcing-safe",
        ])
        .unwrap();
        match cli.command {
            Command::Decide {
                board,
                computer,
                fork_defense,
                json,
            } => {
                assert_eq!(board.to_string(), "XX.|.O.|...");
                assert_eq!(computer, Mark::X);
                assert_eq!(fork_defense, ForkDefense::ForcingSafe);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_audit_defaults_to_canonical() {
        let cli = Cli::try_parse_from(["newell", "audit"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Audit {
                fork_defense: ForkDefense::Canonical,
                json: false
            }
        ));
    }

    #[test]
    fn test_rejects_bad_board() {
        assert!(Cli::try_parse_from(["newell", "decide", "--board", "XX", "--computer", "O"]).is_err());
    }
}
