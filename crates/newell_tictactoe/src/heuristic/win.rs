//! Rules 1 and 2: complete or block a line.

use crate::{Board, Mark, Position, lines};

/// Empty cell of the first line where `mark` has two cells and a gap.
///
/// With the engine's mark this wins; with the opponent's it blocks.
pub fn win_now(board: &Board, mark: Mark) -> Option<Position> {
    lines::first_completing_cell(board, mark)
}
