//! One-shot decision for a board given on the command line.

use anyhow::Result;
use newell_tictactoe::{Board, Decision, DecisionEngine, ForkDefense, Mark};
use serde::Serialize;
use std::io::Write;
use tracing::instrument;

#[derive(Debug, Serialize)]
struct DecisionOutput {
    board: String,
    computer: Mark,
    index: usize,
    #[serde(flatten)]
    decision: Decision,
}

/// Prints the engine's cell for `board`.
///
/// The board is taken as is and the engine's mark is not written.
#[instrument(skip(output), fields(board = %board))]
pub fn run_decide<W: Write>(
    board: Board,
    computer: Mark,
    fork_defense: ForkDefense,
    json: bool,
    mut output: W,
) -> Result<()> {
    let mut engine = DecisionEngine::with_board(board, computer.opponent()).with_fork_defense(fork_defense);
    let decision = engine.record_and_explain(None)?;
    let index = decision.position().to_index();

    if json {
        let out = DecisionOutput {
            board: engine.board().to_string(),
            computer,
            index,
            decision,
        };
        writeln!(output, "{}", serde_json::to_string_pretty(&out)?)?;
    } else {
        writeln!(output, "{index} {} ({})", decision.position(), decision.rule())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decide(board: &str, computer: Mark, json: bool) -> Result<String> {
        let mut output = Vec::new();
        run_decide(board.parse()?, computer, ForkDefense::Canonical, json, &mut output)?;
        Ok(String::from_utf8(output)?)
    }

    #[test]
    fn test_text_output_names_rule() {
        let text = decide("XX.|OO.|...", Mark::X, false).unwrap();
        assert!(text.starts_with("2 "));
        assert!(text.trim_end().ends_with("(win)"));
    }

    #[test]
    fn test_json_output() {
        let text = decide("...|...|...", Mark::O, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["index"], 4);
        assert_eq!(value["position"], "Center");
        assert_eq!(value["computer"], "O");
        assert_eq!(value["board"], "...|...|...");
    }

    #[test]
    fn test_full_board_fails() {
        assert!(decide("XOX|XOO|OXX", Mark::O, false).is_err());
    }
}
