//! Named board positions and the corner/side/center sets.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Corner cells in ascending index order.
    pub const CORNERS: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Side cells (neither corner nor center) in ascending index order.
    pub const SIDES: [Position; 4] = [
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
    ];

    /// The center cell.
    pub const CENTER: Position = Position::Center;

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parses a 1-based cell number as typed by a person (1-9).
    #[instrument]
    pub fn from_cell_number(s: &str) -> Option<Self> {
        let num = s.trim().parse::<usize>().ok()?;
        num.checked_sub(1).and_then(Self::from_index)
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn column(self) -> usize {
        self.to_index() % 3
    }

    /// True for the four corner cells.
    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }

    /// True for the four side cells.
    pub fn is_side(self) -> bool {
        Self::SIDES.contains(&self)
    }

    /// The cell diagonally across the center.
    ///
    /// Corners map to the opposite corner, sides to the opposite side and
    /// the center to itself.
    pub fn opposite(self) -> Self {
        Self::ALL[8 - self.to_index()]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_row_and_column() {
        assert_eq!(Position::MiddleRight.row(), 1);
        assert_eq!(Position::MiddleRight.column(), 2);
        assert_eq!(Position::BottomLeft.row(), 2);
        assert_eq!(Position::BottomLeft.column(), 0);
    }

    #[test]
    fn test_cells_partition_into_corners_sides_center() {
        for pos in Position::iter() {
            let kinds = [pos.is_corner(), pos.is_side(), pos == Position::CENTER];
            assert_eq!(kinds.iter().filter(|k| **k).count(), 1, "{pos}");
        }
    }

    #[test]
    fn test_opposite_corners() {
        assert_eq!(Position::TopLeft.opposite(), Position::BottomRight);
        assert_eq!(Position::TopRight.opposite(), Position::BottomLeft);
        assert_eq!(Position::Center.opposite(), Position::Center);
    }

    #[test]
    fn test_cell_number_is_one_based() {
        assert_eq!(Position::from_cell_number("1"), Some(Position::TopLeft));
        assert_eq!(Position::from_cell_number(" 9 "), Some(Position::BottomRight));
        assert_eq!(Position::from_cell_number("0"), None);
        assert_eq!(Position::from_cell_number("ten"), None);
    }
}
