//! Exhaustive audit of the engine from the command line.

use anyhow::{Result, bail};
use newell_tictactoe::{AuditReport, ForkDefense, audit};
use std::io::Write;
use tracing::instrument;

/// Runs the audit and prints it; fails if the engine lost any game.
#[instrument(skip(output))]
pub fn run_audit<W: Write>(fork_defense: ForkDefense, json: bool, mut output: W) -> Result<()> {
    let report = audit(fork_defense)?;
    if json {
        writeln!(output, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        write_summary(&report, &mut output)?;
    }

    if !report.is_unbeaten() {
        bail!(
            "engine lost {} game(s) with fork defense {}",
            report.losses().len(),
            fork_defense
        );
    }
    Ok(())
}

fn write_summary<W: Write>(report: &AuditReport, output: &mut W) -> Result<()> {
    writeln!(output, "Fork defense: {}", report.fork_defense())?;
    writeln!(output, "Games:        {}", report.games())?;
    writeln!(output, "Engine wins:  {}", report.engine_wins())?;
    writeln!(output, "Ties:         {}", report.ties())?;
    writeln!(output, "Losses:       {}", report.losses().len())?;
    for line in report.losses() {
        let moves: Vec<String> = line.iter().map(ToString::to_string).collect();
        writeln!(output, "  {}", moves.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forcing_safe_passes() {
        let mut output = Vec::new();
        run_audit(ForkDefense::ForcingSafe, false, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Games:        597"));
        assert!(text.contains("Losses:       0"));
    }

    #[test]
    fn test_canonical_fails_and_lists_loss() {
        let mut output = Vec::new();
        let err = run_audit(ForkDefense::Canonical, false, &mut output).unwrap_err();
        assert!(err.to_string().contains("lost 1 game"));
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("X -> Center, O -> Top-left"));
    }
}
