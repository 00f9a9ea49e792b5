//! Finished-game outcomes.

use super::{check_winner, is_full};
use crate::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a line.
    Winner(Mark),
    /// Board full with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// The result as seen by the player holding `human`.
    pub fn verdict(&self, human: Mark) -> Verdict {
        match self.winner() {
            Some(mark) if mark == human => Verdict::Win,
            Some(_) => Verdict::Lose,
            None => Verdict::Tie,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Result from the human player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Verdict {
    /// The human completed a line.
    #[strum(to_string = "You WON!")]
    Win,
    /// The engine completed a line.
    #[strum(to_string = "Try again!")]
    Lose,
    /// Nobody did.
    #[strum(to_string = "Draw! Try again!")]
    Tie,
}

/// The outcome if the game is over, `None` while it continues.
pub fn outcome(board: &Board) -> Option<Outcome> {
    check_winner(board)
        .map(Outcome::Winner)
        .or_else(|| is_full(board).then_some(Outcome::Draw))
}
