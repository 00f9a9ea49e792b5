//! Interactive game on a line-oriented terminal.

use crate::config::PlayConfig;
use anyhow::Result;
use newell_tictactoe::{Board, GameSession, Position, SessionError, Turn, rules};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Plays games until the human quits or input ends.
#[instrument(skip(input, output))]
pub fn run_play<R: BufRead, W: Write>(config: &PlayConfig, mut input: R, mut output: W) -> Result<()> {
    let human = *config.human_mark();
    let mut session = GameSession::start(human, *config.fork_defense())?;
    writeln!(output, "You play {human}. Enter a cell from 1 to 9, or q to quit.")?;
    if let Some(opening) = session.history().first().filter(|m| m.mark != human) {
        writeln!(output, "Computer plays {}", opening.position.to_index() + 1)?;
    }

    loop {
        writeln!(output, "\n{}\n", session.board().display())?;

        if let Some(outcome) = session.outcome() {
            report_winning_line(session.board(), &mut output)?;
            writeln!(output, "{}", outcome.verdict(human))?;
            write!(output, "Play again? [y/N] ")?;
            output.flush()?;
            match read_line(&mut input)? {
                Some(answer) if answer.eq_ignore_ascii_case("y") => {
                    session = session.restart()?;
                    info!("New game");
                    if let Some(opening) = session.history().first() {
                        writeln!(output, "Computer plays {}", opening.position.to_index() + 1)?;
                    }
                    continue;
                }
                _ => break,
            }
        }

        write!(output, "Your move ({human}): ")?;
        output.flush()?;
        let Some(entry) = read_line(&mut input)? else {
            break;
        };
        if entry.eq_ignore_ascii_case("q") {
            break;
        }
        let Some(position) = Position::from_cell_number(&entry) else {
            writeln!(output, "'{entry}' is not a cell. Enter a number from 1 to 9.")?;
            continue;
        };

        match session.play(position.to_index()) {
            Ok(turn) => report_turn(&turn, &mut output)?,
            Err(SessionError::Engine(e)) => {
                debug!(error = %e, "Rejected move");
                writeln!(output, "{e}")?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    writeln!(output, "Bye.")?;
    Ok(())
}

fn report_turn<W: Write>(turn: &Turn, output: &mut W) -> Result<()> {
    if let Some(reply) = turn.reply {
        writeln!(
            output,
            "Computer plays {} ({})",
            reply.position().to_index() + 1,
            reply.rule()
        )?;
    }
    Ok(())
}

/// Names the cells of the completed line, numbered as the player types them.
fn report_winning_line<W: Write>(board: &Board, output: &mut W) -> Result<()> {
    if let Some((mark, line)) = rules::winning_line(board) {
        let cells: Vec<String> = line
            .cells()
            .iter()
            .map(|pos| (pos.to_index() + 1).to_string())
            .collect();
        writeln!(output, "{mark} has three in a row: {}", cells.join(" "))?;
    }
    Ok(())
}

/// Next trimmed line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use newell_tictactoe::{ForkDefense, Mark};
    use std::io::Cursor;

    fn play_script(config: &PlayConfig, script: &str) -> String {
        let mut output = Vec::new();
        run_play(config, Cursor::new(script.as_bytes()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_full_game_ends_in_draw() {
        let transcript = play_script(&PlayConfig::default(), "1\n2\n7\n6\n8\nn\n");
        assert!(transcript.contains("Computer plays 5 (center)"));
        assert!(transcript.contains("Draw! Try again!"));
        assert!(!transcript.contains("three in a row"));
        assert!(transcript.ends_with("Bye.\n"));
    }

    #[test]
    fn test_engine_win_names_the_line() {
        // Engine X opens center, takes corner 1 and completes the diagonal.
        let config = PlayConfig::default().with_overrides(Some(Mark::O), None);
        let transcript = play_script(&config, "2\n4\nn\n");
        assert!(transcript.contains("X has three in a row: 1 5 9"));
        assert!(transcript.contains("Try again!"));
        assert!(transcript.find("three in a row") < transcript.find("Try again!"));
    }

    #[test]
    fn test_bad_entries_are_reported() {
        let transcript = play_script(&PlayConfig::default(), "zero\n1\n1\n10\nq\n");
        assert!(transcript.contains("'zero' is not a cell"));
        assert!(transcript.contains("'10' is not a cell"));
        assert!(transcript.contains("Cell Top-left is already occupied"));
    }

    #[test]
    fn test_engine_opens_for_human_o() {
        let config = PlayConfig::default().with_overrides(Some(Mark::O), Some(ForkDefense::ForcingSafe));
        let transcript = play_script(&config, "");
        assert!(transcript.starts_with("You play O."));
        assert!(transcript.contains("Computer plays 5"));
        assert!(transcript.contains("4|X|6"));
    }
}
