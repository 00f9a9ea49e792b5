//! The eight winning lines and the threat patterns read off them.

use super::{Board, Cell, Mark, Position};
use serde::{Deserialize, Serialize};

/// Three cells that win when held by one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

/// All winning lines, in scan order: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

impl Line {
    /// The three positions of the line.
    pub fn cells(&self) -> [Position; 3] {
        self.0
    }

    /// True if all three cells hold `mark`.
    pub fn is_complete(&self, board: &Board, mark: Mark) -> bool {
        self.0.iter().all(|&pos| board.get(pos).holds(mark))
    }

    /// The empty cell if this line is a threat for `mark`.
    ///
    /// A threat is exactly two cells of `mark` and one empty cell.
    pub fn completing_cell(&self, board: &Board, mark: Mark) -> Option<Position> {
        let mut held = 0;
        let mut empty = None;
        for &pos in &self.0 {
            match board.get(pos) {
                Cell::Empty if empty.is_none() => empty = Some(pos),
                Cell::Occupied(m) if m == mark => held += 1,
                _ => return None,
            }
        }
        if held == 2 { empty } else { None }
    }
}

/// Number of lines that are threats for `mark`.
pub fn threat_count(board: &Board, mark: Mark) -> usize {
    LINES
        .iter()
        .filter(|line| line.completing_cell(board, mark).is_some())
        .count()
}

/// Empty cell of the first threatened line for `mark`, in line scan order.
pub fn first_completing_cell(board: &Board, mark: Mark) -> Option<Position> {
    LINES
        .iter()
        .find_map(|line| line.completing_cell(board, mark))
}
