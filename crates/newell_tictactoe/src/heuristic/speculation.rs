//! Scoped hypothetical moves.

use crate::{Board, Mark, Position, lines};
use std::ops::{Deref, DerefMut};

/// A mark written into an empty cell for evaluation only.
///
/// The cell is cleared again when the guard drops, on every exit path.
/// Guards nest: an inner guard borrows the outer one and reverts only its
/// own cell.
#[derive(Debug)]
pub struct Hypothetical<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> Hypothetical<'a> {
    /// Places `mark` at `position`, or returns `None` if the cell is occupied.
    pub fn place(board: &'a mut Board, position: Position, mark: Mark) -> Option<Self> {
        if !board.is_empty(position) {
            return None;
        }
        board.place(position, mark);
        Some(Self { board, position })
    }

    /// The hypothetical cell.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl Deref for Hypothetical<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Hypothetical<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Hypothetical<'_> {
    fn drop(&mut self) {
        self.board.clear(self.position);
    }
}

/// Threats `mark` would hold after playing at `position`.
///
/// Returns 0 for an occupied cell.
pub fn threats_after(board: &mut Board, position: Position, mark: Mark) -> usize {
    Hypothetical::place(board, position, mark)
        .map(|trial| lines::threat_count(&trial, mark))
        .unwrap_or(0)
}
