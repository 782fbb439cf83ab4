//! Rewind - terminal tic-tac-toe with time travel.
//!
//! The rendering layer around [`rewind_tictactoe`]: an interactive
//! terminal UI, a scripted replay command, configuration and logging.
//!
//! # Architecture
//!
//! - **Config**: optional TOML file with log and UI settings
//! - **TUI**: ratatui board, status line and jumpable history list
//! - **Replay**: apply a command script and print or serialize the result

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, RewindConfig};
pub use replay::{HistoryEntry, Snapshot, replay, run_replay, write_text};
pub use tui::{App, AppAction, Focus, run_tui};
