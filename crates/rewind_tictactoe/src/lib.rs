//! Tic-tac-toe game core with a time-travel move history.
//!
//! The crate is free of I/O. A rendering layer reads the current
//! [`Step`] from a [`GameHistory`] and sends plays and jumps back in.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameHistory, Player, Position};
//!
//! let mut game = GameHistory::new();
//! for pos in [0, 3, 1, 4, 2] {
//!     game.play_cell(Position::from_index(pos).unwrap());
//! }
//! assert_eq!(game.current_step().winner(), Some(Player::X));
//! assert_eq!(game.status().to_string(), "Winner: X");
//!
//! game.jump_to(2).unwrap();
//! game.play_cell(Position::Center);
//! assert_eq!(game.len(), 4);
//! assert_eq!(game.active_index(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod step;
mod types;

pub use action::{Applied, Command, CommandParseError, parse_script};
pub use history::{GameHistory, HistoryError, IgnoreReason, PlayOutcome, Status};
pub use position::Position;
pub use rules::{check_winner, winning_line};
pub use step::{Step, StepLabel};
pub use types::{Board, Player, Square};
