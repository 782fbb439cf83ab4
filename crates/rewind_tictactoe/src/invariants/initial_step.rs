//! Initial step invariant: every history starts from an empty board.

use super::Invariant;
use crate::{GameHistory, Step};

/// Invariant: the first step is the empty board with X to move.
pub struct InitialStepInvariant;

impl Invariant<GameHistory> for InitialStepInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.steps().first() == Some(&Step::initial())
    }

    fn description() -> &'static str {
        "History starts with the empty initial step"
    }
}
