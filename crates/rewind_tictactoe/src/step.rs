//! Immutable snapshots of the game, one per ply.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::position::Position;
use crate::rules::check_winner;
use crate::types::{Board, Player, Square};

/// Snapshot of the board, whose turn is next, and the winner of that board.
///
/// Steps are created once, either as the initial step or by
/// [`Step::advance`], and never modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    board: Board,
    next: Player,
    winner: Option<Player>,
}

impl Step {
    /// The step at game start: empty board, X to move, no winner.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            next: Player::X,
            winner: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark goes down next.
    pub fn next(&self) -> Player {
        self.next
    }

    /// Returns the winner of this board, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Builds the step that follows a mark at `pos`.
    ///
    /// Returns `None` when the cell is taken or the game on this step is
    /// already won.
    #[instrument(skip(self), fields(next = %self.next))]
    pub fn advance(&self, pos: Position) -> Option<Step> {
        if self.winner.is_some() || !self.board.is_empty(pos) {
            return None;
        }

        let mut board = self.board;
        board.set(pos, Square::Occupied(self.next));
        Some(Step {
            board,
            next: self.next.opponent(),
            winner: check_winner(&board),
        })
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::initial()
    }
}

/// Human-readable name of a history position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum StepLabel {
    /// Index 0.
    #[display("Game Start")]
    GameStart,
    /// A later step that carries a winner.
    #[display("Game Result")]
    GameResult,
    /// Any other step, by index.
    #[display("step #{_0}")]
    Move(usize),
}

impl StepLabel {
    /// Labels the step found at `index` in a history.
    pub fn new(index: usize, step: &Step) -> Self {
        if index == 0 {
            StepLabel::GameStart
        } else if step.winner().is_some() {
            StepLabel::GameResult
        } else {
            StepLabel::Move(index)
        }
    }

    /// Text for the button or list entry that jumps to this step.
    pub fn jump_text(&self) -> String {
        format!("Go to {self}")
    }
}
