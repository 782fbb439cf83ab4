//! Application state and key handling.
//!
//! [`App`] binds keys to the two entry points of the history store and
//! keeps the little UI state the terminal needs (cursor, focus, selection).

use crossterm::event::{KeyCode, KeyEvent};
use rewind_tictactoe::{GameHistory, PlayOutcome, Position};
use tracing::{debug, info, instrument};

use super::input::{digit_cell, move_cursor};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the history list.
    History,
}

impl Focus {
    /// Toggles between `Board` and `History`.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameHistory,
    cursor: Position,
    focus: Focus,
    selected: usize,
    message: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            game: GameHistory::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            message: None,
        }
    }
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// The game history.
    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    /// The board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the history list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Feedback from the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                return AppAction::Quit;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.selected = self.game.active_index();
                debug!(focus = ?self.focus, "Focus switched");
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_cell(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
        AppAction::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let last = self.game.len() - 1;
        match code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = last,
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.selected),
            _ => {}
        }
    }

    /// Plays the current player's mark at `pos`.
    pub fn play(&mut self, pos: Position) {
        let player = self.game.current_step().next();
        self.message = Some(match self.game.play_cell(pos) {
            PlayOutcome::Placed { discarded, .. } if discarded > 0 => {
                format!("{player} played {pos}, dropping {discarded} later step(s)")
            }
            PlayOutcome::Placed { .. } => format!("{player} played {pos}"),
            PlayOutcome::Ignored(reason) => reason.to_string(),
        });
        self.selected = self.game.active_index();
    }

    /// Makes history step `index` active.
    pub fn jump(&mut self, index: usize) {
        self.message = Some(match self.game.jump_to(index) {
            Ok(()) => self
                .game
                .describe_step(index)
                .map(|label| format!("Back at {label}"))
                .unwrap_or_default(),
            Err(e) => e.to_string(),
        });
        self.selected = self.game.active_index();
    }
}
