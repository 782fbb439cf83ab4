//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the history store so they can be tested and reused on any board.

pub mod win;

pub use win::{LINES, check_winner, winning_line};
