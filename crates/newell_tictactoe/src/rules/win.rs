//! Win detection logic for tic-tac-toe.

use crate::lines::{LINES, Line};
use crate::{Board, Mark};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if the mark has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

/// The first completed line and its owner, for highlighting.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    LINES.iter().find_map(|line| {
        Mark::iter()
            .find(|&mark| line.is_complete(board, mark))
            .map(|mark| (mark, *line))
    })
}
