//! Engine and session error types.

use super::Position;
use derive_more::{Display, From};

/// Error returned when the caller breaks the engine's preconditions.
///
/// The board is never modified when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineError {
    /// Cell index outside 0-8.
    #[display("Invalid move: cell index {} is outside 0-8", _0)]
    InvalidMove(usize),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// No empty cell is left for the engine to choose.
    #[display("No move available: the board is full")]
    NoMoveAvailable,

    /// A postcondition failed (debug builds only).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for EngineError {}

/// Error returned by [`GameSession`](crate::GameSession).
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum SessionError {
    /// The engine rejected the move.
    #[display("{}", _0)]
    Engine(EngineError),

    /// The game has already ended.
    #[display("Game is already over")]
    #[from(ignore)]
    GameOver,
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Engine(e) => Some(e),
            SessionError::GameOver => None,
        }
    }
}
