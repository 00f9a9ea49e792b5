//! The Newell-Simon rule cascade.
//!
//! Eight rules are tried in a fixed order and the first one that names an
//! empty cell decides the move:
//!
//! 1. complete our own line
//! 2. block the opponent's line
//! 3. fork
//! 4. block the opponent's fork
//! 5. take the center
//! 6. take the corner opposite an opponent corner
//! 7. take any corner
//! 8. take any side
//!
//! Rules read and speculatively mutate a borrowed [`Board`]; speculation is
//! scoped by [`Hypothetical`] so the board is unchanged when a rule returns.

mod fork;
mod positional;
mod speculation;
mod win;

pub use fork::{block_fork, fork, fork_cells};
pub use positional::{center, empty_corner, empty_side, opposite_corner};
pub use speculation::{Hypothetical, threats_after};
pub use win::win_now;

use crate::{Board, Mark, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, trace};

/// One rule of the cascade, in priority order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Rule {
    /// Complete a line of our own.
    #[strum(to_string = "win")]
    Win,
    /// Complete the opponent's line before they do.
    #[strum(to_string = "block")]
    Block,
    /// Create two threats at once.
    #[strum(to_string = "fork")]
    Fork,
    /// Deny the opponent a fork.
    #[strum(to_string = "block fork")]
    BlockFork,
    /// Take the center.
    #[strum(to_string = "center")]
    Center,
    /// Take the corner opposite an opponent corner.
    #[strum(to_string = "opposite corner")]
    OppositeCorner,
    /// Take any corner.
    #[strum(to_string = "empty corner")]
    EmptyCorner,
    /// Take any side.
    #[strum(to_string = "empty side")]
    EmptySide,
}

/// How rule 4 answers an opponent with two or more fork cells.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ForkDefense {
    /// First side cell that creates a threat of our own.
    #[default]
    Canonical,
    /// As `Canonical`, skipping side cells whose forced reply is itself an
    /// opponent fork cell.
    ForcingSafe,
}

/// The two marks in play, seen from the engine's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Seats {
    /// Mark the engine plays.
    pub computer: Mark,
    /// Mark the opponent plays.
    pub human: Mark,
}

/// A chosen cell and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Decision {
    position: Position,
    rule: Rule,
}

impl Decision {
    /// Cell to play.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Rule that produced it.
    pub fn rule(&self) -> Rule {
        self.rule
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.position, self.rule)
    }
}

impl Rule {
    /// Applies this rule alone.
    ///
    /// The board is borrowed mutably for speculation and is left as found.
    pub fn apply(self, board: &mut Board, seats: Seats, defense: ForkDefense) -> Option<Position> {
        match self {
            Rule::Win => win_now(board, seats.computer),
            Rule::Block => win_now(board, seats.human),
            Rule::Fork => fork(board, seats.computer),
            Rule::BlockFork => block_fork(board, seats, defense),
            Rule::Center => center(board),
            Rule::OppositeCorner => opposite_corner(board, seats.human),
            Rule::EmptyCorner => empty_corner(board),
            Rule::EmptySide => empty_side(board),
        }
    }
}

/// Runs the cascade and returns the first rule's choice.
///
/// Returns `None` only when the board has no empty cell.
#[instrument(skip(board))]
pub fn decide(board: &mut Board, seats: Seats, defense: ForkDefense) -> Option<Decision> {
    trace!(%board, "Evaluating cascade");
    for rule in Rule::iter() {
        match rule.apply(board, seats, defense) {
            Some(position) => {
                debug_assert!(board.is_empty(position), "{rule} chose occupied {position}");
                debug!(%rule, %position, "Rule fired");
                return Some(Decision::new(position, rule));
            }
            None => trace!(%rule, "Rule passed"),
        }
    }
    None
}
