//! Active index invariant: the displayed step exists.

use super::Invariant;
use crate::GameHistory;

/// Invariant: the active index points inside the history.
pub struct ActiveIndexInvariant;

impl Invariant<GameHistory> for ActiveIndexInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.active_index() < game.steps().len()
    }

    fn description() -> &'static str {
        "Active index is within the history"
    }
}
