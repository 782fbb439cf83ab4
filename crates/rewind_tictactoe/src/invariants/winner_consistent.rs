//! Winner consistency invariant: stored winners match the board.

use super::Invariant;
use crate::GameHistory;
use crate::rules::check_winner;

/// Invariant: every step's recorded winner is what its board shows.
pub struct WinnerConsistentInvariant;

impl Invariant<GameHistory> for WinnerConsistentInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.steps()
            .iter()
            .all(|step| step.winner() == check_winner(step.board()))
    }

    fn description() -> &'static str {
        "Recorded winner matches the board"
    }
}
