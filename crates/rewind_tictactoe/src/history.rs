//! The game history store: every step played, and which one is active.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use crate::position::Position;
use crate::step::{Step, StepLabel};
use crate::types::Player;

/// Status line for the active step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Status {
    /// The active step has a winner.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// The game goes on with this player.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

/// Why a play left the history untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IgnoreReason {
    /// The cell already holds a mark.
    #[display("{_0} is already occupied")]
    CellOccupied(Position),
    /// The active step already has a winner.
    #[display("{_0} has already won")]
    GameWon(Player),
}

/// Result of [`GameHistory::play_cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// A new step was appended at `index` and became active.
    Placed {
        /// Index of the new step.
        index: usize,
        /// Number of steps past the old active index that were dropped.
        discarded: usize,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl PlayOutcome {
    /// Returns true if a step was appended.
    pub fn is_placed(&self) -> bool {
        matches!(self, PlayOutcome::Placed { .. })
    }
}

/// Errors from history navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// Jump target past the end of the history.
    #[display("Step {index} is out of range (history has {len} steps)")]
    StepOutOfRange {
        /// Requested index.
        index: usize,
        /// Current history length.
        len: usize,
    },
}

/// Ordered steps of one game plus the index of the displayed step.
///
/// Playing after a jump branches the timeline: steps after the active
/// index are dropped before the new step is appended. Jumping never
/// changes the steps themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct GameHistory {
    steps: Vec<Step>,
    active: usize,
}

/// Unchecked wire form of [`GameHistory`].
#[derive(Deserialize)]
struct RawHistory {
    steps: Vec<Step>,
    active: usize,
}

impl TryFrom<RawHistory> for GameHistory {
    type Error = InvariantViolation;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        let game = Self {
            steps: raw.steps,
            active: raw.active,
        };
        HistoryInvariants::check_all(&game).map_err(|violations| {
            let descriptions: Vec<String> =
                violations.into_iter().map(|v| v.description).collect();
            InvariantViolation::new(descriptions.join("; "))
        })?;
        Ok(game)
    }
}

impl GameHistory {
    /// Creates a history holding only the initial step.
    #[instrument]
    pub fn new() -> Self {
        Self {
            steps: vec![Step::initial()],
            active: 0,
        }
    }

    /// Builds a history without validation.
    #[cfg(test)]
    pub(crate) fn from_parts(steps: Vec<Step>, active: usize) -> Self {
        Self { steps, active }
    }

    /// All steps, oldest first.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Index of the displayed step.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Number of steps, including the initial one.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: construction and deserialization both guarantee the
    /// initial step.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The step at the active index.
    pub fn current_step(&self) -> &Step {
        &self.steps[self.active]
    }

    /// Status line for the active step.
    pub fn status(&self) -> Status {
        let step = self.current_step();
        match step.winner() {
            Some(winner) => Status::Winner(winner),
            None => Status::NextPlayer(step.next()),
        }
    }

    /// Places the current player's mark at `pos` on the active step.
    ///
    /// Occupied cells and won games are ignored without changing any state.
    #[instrument(skip(self), fields(active = self.active, len = self.steps.len()))]
    pub fn play_cell(&mut self, pos: Position) -> PlayOutcome {
        let current = self.current_step();

        if let Some(winner) = current.winner() {
            debug!(%winner, "Ignoring play on finished game");
            return PlayOutcome::Ignored(IgnoreReason::GameWon(winner));
        }

        let Some(next) = current.advance(pos) else {
            debug!(position = %pos, "Ignoring play on occupied cell");
            return PlayOutcome::Ignored(IgnoreReason::CellOccupied(pos));
        };

        let discarded = self.steps.len() - (self.active + 1);
        self.steps.truncate(self.active + 1);
        self.steps.push(next);
        self.active = self.steps.len() - 1;

        info!(
            position = %pos,
            index = self.active,
            discarded,
            winner = ?next.winner(),
            "Move placed"
        );
        debug_assert!(HistoryInvariants::check_all(self).is_ok());

        PlayOutcome::Placed {
            index: self.active,
            discarded,
        }
    }

    /// Makes the step at `index` active without touching the steps.
    #[instrument(skip(self), fields(len = self.steps.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.steps.len() {
            return Err(HistoryError::StepOutOfRange {
                index,
                len: self.steps.len(),
            });
        }

        debug!(from = self.active, to = index, "Jumping");
        self.active = index;
        debug_assert!(HistoryInvariants::check_all(self).is_ok());
        Ok(())
    }

    /// Label for the step at `index`, or `None` past the end.
    pub fn describe_step(&self, index: usize) -> Option<StepLabel> {
        self.steps
            .get(index)
            .map(|step| StepLabel::new(index, step))
    }

    /// Index and label of every step, for building a navigation list.
    pub fn entries(&self) -> impl Iterator<Item = (usize, StepLabel)> + '_ {
        self.steps
            .iter()
            .enumerate()
            .map(|(index, step)| (index, StepLabel::new(index, step)))
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
