//! First-class invariants for the game history.
//!
//! Invariants are logical properties that must hold after every
//! operation on a [`GameHistory`](crate::GameHistory). The store checks
//! them in debug builds and each one is testable on its own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

pub mod active_index;
pub mod alternating_turn;
pub mod initial_step;
pub mod single_mark;
pub mod winner_consistent;

pub use active_index::ActiveIndexInvariant;
pub use alternating_turn::AlternatingTurnInvariant;
pub use initial_step::InitialStepInvariant;
pub use single_mark::SingleMarkInvariant;
pub use winner_consistent::WinnerConsistentInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    InitialStepInvariant,
    SingleMarkInvariant,
    AlternatingTurnInvariant,
    WinnerConsistentInvariant,
    ActiveIndexInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameHistory, Position, Step};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(HistoryInvariants::check_all(&GameHistory::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut game = GameHistory::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            game.play_cell(pos);
        }
        game.jump_to(1).unwrap();
        game.play_cell(Position::BottomLeft);

        assert!(HistoryInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // Second step skips a ply and the active index dangles.
        let skipped = Step::initial()
            .advance(Position::TopLeft)
            .and_then(|s| s.advance(Position::Center))
            .unwrap();
        let game = GameHistory::from_parts(vec![Step::initial(), skipped], 5);

        let violations = HistoryInvariants::check_all(&game).unwrap_err();

        assert!(violations.len() >= 2);
        assert!(
            violations
                .iter()
                .any(|v| v.description == ActiveIndexInvariant::description())
        );
        assert!(
            violations
                .iter()
                .any(|v| v.description == SingleMarkInvariant::description())
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (InitialStepInvariant, ActiveIndexInvariant);
        assert!(TwoInvariants::check_all(&GameHistory::new()).is_ok());
    }
}
