//! Unbeatable tic-tac-toe move selection.
//!
//! The engine follows the Newell-Simon rule cascade: a fixed priority of
//! line patterns (win, block, fork, block fork, center, opposite corner,
//! corner, side) turns a board into a chosen cell.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Cell`], [`Mark`], [`Position`] and the eight [`lines`]
//! - **Heuristic**: the eight [`Rule`]s, tried in order by [`heuristic::decide`]
//! - **Engine**: [`DecisionEngine`], one per game, records the opponent and decides
//! - **Collaborator**: [`GameSession`] commits moves and detects the end of a game
//! - **Audit**: [`audit()`] plays every possible game against the engine
//!
//! # Example
//!
//! ```
//! use newell_tictactoe::{DecisionEngine, Mark};
//!
//! let mut engine = DecisionEngine::new(Mark::X);
//! // Human X takes a corner; the engine answers in the center.
//! let reply = engine.record_and_decide(Some(0))?;
//! assert_eq!(reply, 4);
//! // The caller commits the engine's mark after showing it.
//! engine.commit(reply)?;
//! # Ok::<(), newell_tictactoe::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod audit;
mod contracts;
mod engine;
mod error;
pub mod heuristic;
pub mod lines;
mod position;
pub mod rules;
mod session;
mod types;

// Crate-level exports - Board model
pub use action::Move;
pub use position::Position;
pub use types::{Board, BoardParseError, Cell, Mark};

// Crate-level exports - Engine
pub use engine::DecisionEngine;
pub use error::{EngineError, SessionError};
pub use heuristic::{Decision, ForkDefense, Rule, Seats};

// Crate-level exports - Contracts
pub use contracts::{
    BoardConsistent, BoardUnchanged, CellInRange, CellIsEmpty, Contract, LegalPlacement,
    MonotonicBoard, Placement, PlacementContract,
};

// Crate-level exports - Game driving
pub use audit::{AuditReport, audit};
pub use rules::{Outcome, Verdict};
pub use session::{GameSession, Turn};
