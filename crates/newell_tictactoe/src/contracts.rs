//! Contract-based validation for engine calls.
//!
//! Preconditions guard every mutation and always run. Postconditions
//! compare the board before and after a call and run in debug builds.

use super::error::EngineError;
use super::{Board, Cell, Mark, Position};
use derive_new::new;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after, action)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), EngineError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S, action: &A) -> Result<(), EngineError>;
}

// ─────────────────────────────────────────────────────────────
//  Placement Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: a raw cell index names a board position.
pub struct CellInRange;

impl CellInRange {
    /// Converts `index` to a position or fails with `InvalidMove`.
    #[instrument]
    pub fn check(index: usize) -> Result<Position, EngineError> {
        Position::from_index(index).ok_or(EngineError::InvalidMove(index))
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with `CellOccupied` unless `position` is empty.
    #[instrument(skip(board))]
    pub fn check(board: &Board, position: Position) -> Result<(), EngineError> {
        if board.is_empty(position) {
            Ok(())
        } else {
            Err(EngineError::CellOccupied(position))
        }
    }
}

/// Composite precondition: the index is on the board and the cell is free.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates a raw index against the board.
    #[instrument(skip(board))]
    pub fn check(board: &Board, index: usize) -> Result<Position, EngineError> {
        let position = CellInRange::check(index)?;
        CellIsEmpty::check(board, position)?;
        Ok(position)
    }
}

// ─────────────────────────────────────────────────────────────
//  Placement Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// A mark written to the board on the caller's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Placement {
    /// Target cell.
    pub position: Position,
    /// Mark written there.
    pub mark: Mark,
}

/// Contract for recording a placement.
///
/// Preconditions:
/// - Cell must be empty
///
/// Postconditions:
/// - The board differs from before only in the placed cell
pub struct PlacementContract;

impl Contract<Board, Placement> for PlacementContract {
    fn pre(board: &Board, placement: &Placement) -> Result<(), EngineError> {
        CellIsEmpty::check(board, placement.position)
    }

    fn post(before: &Board, after: &Board, placement: &Placement) -> Result<(), EngineError> {
        let mut expected = before.clone();
        expected.place(placement.position, placement.mark);
        BoardUnchanged::check(&expected, after)
    }
}

// ─────────────────────────────────────────────────────────────
//  Board Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: evaluation left no speculative mark behind.
pub struct BoardUnchanged;

impl BoardUnchanged {
    /// Fails with `InvariantViolation` naming every differing cell.
    #[instrument(skip_all)]
    pub fn check(expected: &Board, after: &Board) -> Result<(), EngineError> {
        let stray: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|&pos| expected.get(pos) != after.get(pos))
            .collect();
        if stray.is_empty() {
            Ok(())
        } else {
            warn!(?stray, "Board changed during evaluation");
            Err(EngineError::InvariantViolation(format!(
                "Postcondition failed: cells {:?} changed during evaluation",
                stray
            )))
        }
    }
}

/// Invariant: cells are never overwritten or emptied between two snapshots.
pub struct MonotonicBoard;

impl MonotonicBoard {
    /// True if every occupied cell in `before` holds the same mark in `after`.
    #[instrument(skip_all)]
    pub fn holds(before: &Board, after: &Board) -> bool {
        Position::ALL.into_iter().all(|pos| match before.get(pos) {
            Cell::Empty => true,
            held => after.get(pos) == held,
        })
    }
}

/// Invariant: mark counts differ by at most one (players alternate).
pub struct BoardConsistent;

impl BoardConsistent {
    /// Checks the alternation invariant.
    #[instrument(skip(board))]
    pub fn holds(board: &Board) -> bool {
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);
        let valid = x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range() {
        assert_eq!(CellInRange::check(9), Err(EngineError::InvalidMove(9)));
        assert_eq!(CellInRange::check(4), Ok(Position::Center));
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let board: Board = "...|.X.|...".parse().unwrap();
        assert_eq!(
            LegalPlacement::check(&board, 4),
            Err(EngineError::CellOccupied(Position::Center))
        );
        let placement = Placement::new(Position::Center, Mark::O);
        assert!(PlacementContract::pre(&board, &placement).is_err());
    }

    #[test]
    fn test_postcondition_holds_after_placement() {
        let before = Board::new();
        let mut after = before.clone();
        after.place(Position::Center, Mark::X);
        let placement = Placement::new(Position::Center, Mark::X);
        assert!(PlacementContract::post(&before, &after, &placement).is_ok());
        assert!(MonotonicBoard::holds(&before, &after));
    }

    #[test]
    fn test_postcondition_detects_stray_mark() {
        let before = Board::new();
        let mut after = before.clone();
        after.place(Position::Center, Mark::X);
        after.place(Position::TopLeft, Mark::O);
        let placement = Placement::new(Position::Center, Mark::X);
        assert!(matches!(
            PlacementContract::post(&before, &after, &placement),
            Err(EngineError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_monotonic_detects_cleared_cell() {
        let before: Board = "X..|...|...".parse().unwrap();
        let after = Board::new();
        assert!(!MonotonicBoard::holds(&before, &after));
    }

    #[test]
    fn test_board_consistency() {
        assert!(BoardConsistent::holds(&"XO.|X..|...".parse().unwrap()));
        assert!(!BoardConsistent::holds(&"XX.|X..|...".parse().unwrap()));
    }
}
