//! Game-end rules for tic-tac-toe.
//!
//! The engine never decides whether a game is over; these pure functions
//! are for the caller that drives the game.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::{is_draw, is_full};
pub use outcome::{Outcome, Verdict, outcome};
pub use win::{check_winner, winning_line};
