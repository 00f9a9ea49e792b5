//! Rules 3 and 4: creating and denying forks.
//!
//! Both rules count threats by writing a [`Hypothetical`] mark into each
//! empty cell in turn. The guard clears the cell before the next cell is
//! tried, so the board is unchanged when these functions return.

use super::Seats;
use super::speculation::{Hypothetical, threats_after};
use super::ForkDefense;
use crate::{Board, Mark, Position, lines};
use tracing::{debug, instrument};

/// Threats a single move must create to count as a fork.
const FORK_THREATS: usize = 2;

/// First empty cell, ascending, where `mark` would hold two or more threats.
pub fn fork(board: &mut Board, mark: Mark) -> Option<Position> {
    Position::ALL
        .into_iter()
        .find(|&pos| threats_after(board, pos, mark) >= FORK_THREATS)
}

/// Every empty cell where `mark` would hold two or more threats, ascending.
pub fn fork_cells(board: &mut Board, mark: Mark) -> Vec<Position> {
    Position::ALL
        .into_iter()
        .filter(|&pos| threats_after(board, pos, mark) >= FORK_THREATS)
        .collect()
}

/// Denies the opponent's forks.
///
/// A single fork cell is taken outright. With two or more, taking one
/// leaves the other, so the engine instead plays the first side cell that
/// makes a threat of its own and forces the opponent to answer it.
#[instrument(skip(board))]
pub fn block_fork(board: &mut Board, seats: Seats, defense: ForkDefense) -> Option<Position> {
    let forks = fork_cells(board, seats.human);
    match forks.as_slice() {
        [] => None,
        [only] => Some(*only),
        _ => {
            debug!(?forks, "Opponent has several fork cells");
            Position::SIDES
                .into_iter()
                .find(|&side| forces_safely(board, side, seats, defense))
        }
    }
}

/// True if playing `side` threatens a line and, under `ForcingSafe`, the
/// forced reply does not hand the opponent a fork.
fn forces_safely(board: &mut Board, side: Position, seats: Seats, defense: ForkDefense) -> bool {
    let Some(mut trial) = Hypothetical::place(board, side, seats.computer) else {
        return false;
    };
    // Rule 3 already ruled out a double threat, so at most one cell is forced.
    let Some(reply) = lines::first_completing_cell(&trial, seats.computer) else {
        return false;
    };
    match defense {
        ForkDefense::Canonical => true,
        ForkDefense::ForcingSafe => {
            let safe = threats_after(&mut trial, reply, seats.human) < FORK_THREATS;
            if !safe {
                debug!(%side, %reply, "Forced reply would fork");
            }
            safe
        }
    }
}
