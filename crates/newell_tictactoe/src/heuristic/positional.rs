//! Rules 5 to 8: positional fallbacks.

use crate::{Board, Mark, Position};

/// The center, if empty.
pub fn center(board: &Board) -> Option<Position> {
    board.is_empty(Position::CENTER).then_some(Position::CENTER)
}

/// First empty corner whose opposite corner holds `opponent`.
pub fn opposite_corner(board: &Board, opponent: Mark) -> Option<Position> {
    Position::CORNERS
        .into_iter()
        .find(|&corner| board.is_empty(corner) && board.get(corner.opposite()).holds(opponent))
}

/// First empty corner.
pub fn empty_corner(board: &Board) -> Option<Position> {
    board.empty_positions().find(|pos| pos.is_corner())
}

/// First empty side.
pub fn empty_side(board: &Board) -> Option<Position> {
    board.empty_positions().find(|pos| pos.is_side())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_only_when_empty() {
        assert_eq!(center(&Board::new()), Some(Position::Center));
        let board: Board = "...|.X.|...".parse().unwrap();
        assert_eq!(center(&board), None);
    }

    #[test]
    fn test_opposite_corner_answers_opponent_corner() {
        let board: Board = "...|.X.|..O".parse().unwrap();
        assert_eq!(opposite_corner(&board, Mark::O), Some(Position::TopLeft));
        let board: Board = "..O|.X.|...".parse().unwrap();
        assert_eq!(opposite_corner(&board, Mark::O), Some(Position::BottomLeft));
    }

    #[test]
    fn test_opposite_corner_takes_lowest_candidate() {
        // Corners 6 and 8 both face an opponent corner.
        let board: Board = "O.O|.X.|...".parse().unwrap();
        assert_eq!(opposite_corner(&board, Mark::O), Some(Position::BottomLeft));
    }

    #[test]
    fn test_opposite_corner_needs_empty_target() {
        // Both corners of the diagonal are the opponent's.
        let board: Board = "O..|...|..O".parse().unwrap();
        assert_eq!(opposite_corner(&board, Mark::O), None);
        // Own mark in the corner does not count.
        let board: Board = "X..|...|...".parse().unwrap();
        assert_eq!(opposite_corner(&board, Mark::O), None);
    }

    #[test]
    fn test_corner_and_side_scan_ascending() {
        let board: Board = "X.O|...|...".parse().unwrap();
        assert_eq!(empty_corner(&board), Some(Position::BottomLeft));
        let board: Board = "XOX|O.X|OXO".parse().unwrap();
        assert_eq!(empty_corner(&board), None);
        assert_eq!(empty_side(&board), None);
        let board: Board = "X.X|OOX|O.O".parse().unwrap();
        assert_eq!(empty_side(&board), Some(Position::TopCenter));
    }
}
