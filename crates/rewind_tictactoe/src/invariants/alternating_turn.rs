//! Alternating turn invariant: players take turns.

use super::Invariant;
use crate::GameHistory;

/// Invariant: each step hands the turn to the other player.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.steps()
            .windows(2)
            .all(|pair| pair[1].next() == pair[0].next().opponent())
    }

    fn description() -> &'static str {
        "Turns alternate between X and O"
    }
}
