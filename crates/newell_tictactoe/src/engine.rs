//! The decision engine: one per game.

use super::contracts::{CellInRange, Contract, Placement, PlacementContract};
use super::error::EngineError;
use super::heuristic::{self, Decision, ForkDefense, Seats};
use super::{Board, Mark};
use tracing::{debug, instrument, warn};

/// Picks the automated player's moves.
///
/// The engine owns the board for one game. The opponent's moves are
/// recorded by [`record_and_decide`](Self::record_and_decide); the engine's
/// own choice is only returned, and the caller writes it with
/// [`commit`](Self::commit) after rendering it. A new game needs a new
/// engine.
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    board: Board,
    seats: Seats,
    fork_defense: ForkDefense,
}

impl DecisionEngine {
    /// Creates an engine with an empty board playing against `human`.
    #[instrument]
    pub fn new(human: Mark) -> Self {
        Self::with_board(Board::new(), human)
    }

    /// Creates an engine that resumes from an existing board.
    #[instrument]
    pub fn with_board(board: Board, human: Mark) -> Self {
        Self {
            board,
            seats: Seats::new(human.opponent(), human),
            fork_defense: ForkDefense::default(),
        }
    }

    /// Sets the answer to an opponent with several fork cells.
    pub fn with_fork_defense(mut self, fork_defense: ForkDefense) -> Self {
        self.fork_defense = fork_defense;
        self
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The opponent's mark.
    pub fn human(&self) -> Mark {
        self.seats.human
    }

    /// The engine's mark.
    pub fn computer(&self) -> Mark {
        self.seats.computer
    }

    /// Both marks.
    pub fn seats(&self) -> Seats {
        self.seats
    }

    /// The fork defense in use.
    pub fn fork_defense(&self) -> ForkDefense {
        self.fork_defense
    }

    /// Records the opponent's move, if any, and returns the engine's cell index.
    ///
    /// The returned cell is empty and is *not* written to the board.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidMove`] if `opponent` is outside 0-8
    /// - [`EngineError::CellOccupied`] if the opponent's cell is taken
    /// - [`EngineError::NoMoveAvailable`] if no empty cell would remain
    ///
    /// The board is unchanged on any error.
    pub fn record_and_decide(&mut self, opponent: Option<usize>) -> Result<usize, EngineError> {
        self.record_and_explain(opponent)
            .map(|decision| decision.position().to_index())
    }

    /// As [`record_and_decide`](Self::record_and_decide), also naming the rule that fired.
    #[instrument(skip(self), fields(computer = %self.seats.computer))]
    pub fn record_and_explain(&mut self, opponent: Option<usize>) -> Result<Decision, EngineError> {
        let recorded = opponent
            .map(|index| self.validate(index, self.seats.human))
            .transpose()?;

        if self.board.empty_count() == usize::from(recorded.is_some()) {
            warn!(board = %self.board, "Engine asked to move on a full board");
            return Err(EngineError::NoMoveAvailable);
        }

        #[cfg(debug_assertions)]
        let before = self.board.clone();
        if let Some(placement) = &recorded {
            debug!(position = %placement.position, "Recording opponent move");
            self.board.place(placement.position, placement.mark);
        }

        let decision = heuristic::decide(&mut self.board, self.seats, self.fork_defense)
            .ok_or(EngineError::NoMoveAvailable)?;

        // Postcondition: only the opponent's cell changed.
        #[cfg(debug_assertions)]
        {
            match &recorded {
                Some(placement) => PlacementContract::post(&before, &self.board, placement)?,
                None => super::contracts::BoardUnchanged::check(&before, &self.board)?,
            }
        }

        debug!(%decision, "Engine decided");
        Ok(decision)
    }

    /// Writes the engine's mark at `index`.
    ///
    /// This is the caller's commit step for a cell returned by
    /// [`record_and_decide`](Self::record_and_decide); the engine never
    /// calls it on its own.
    #[instrument(skip(self))]
    pub fn commit(&mut self, index: usize) -> Result<(), EngineError> {
        let placement = self.validate(index, self.seats.computer)?;
        self.board.place(placement.position, placement.mark);
        Ok(())
    }

    fn validate(&self, index: usize, mark: Mark) -> Result<Placement, EngineError> {
        let placement = Placement::new(CellInRange::check(index)?, mark);
        PlacementContract::pre(&self.board, &placement)?;
        Ok(placement)
    }
}
