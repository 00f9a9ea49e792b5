//! Shared helpers for engine tests.

#![allow(dead_code)]

use newell_tictactoe::rules::{check_winner, is_full};
use newell_tictactoe::{Board, Cell, Mark};

/// Every assignment of Empty/X/O to the nine cells.
pub fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut cells = [Cell::Empty; 9];
        for cell in cells.iter_mut() {
            *cell = match code % 3 {
                0 => Cell::Empty,
                1 => Cell::Occupied(Mark::X),
                _ => Cell::Occupied(Mark::O),
            };
            code /= 3;
        }
        Board::from_cells(cells)
    })
}

/// Boards with at least one empty cell and no completed line.
pub fn open_boards() -> impl Iterator<Item = Board> {
    all_boards().filter(|b| !is_full(b) && check_winner(b).is_none())
}
