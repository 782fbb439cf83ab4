//! Non-interactive rendering: apply a command script and print the result.

use anyhow::{Context, Result};
use rewind_tictactoe::{Applied, GameHistory, PlayOutcome, Step, parse_script};
use serde::Serialize;
use std::io::Write;
use tracing::{info, instrument};

/// One row of the navigable history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Position in the history.
    pub index: usize,
    /// "Game Start", "step #N" or "Game Result".
    pub description: String,
    /// Whether this is the displayed step.
    pub active: bool,
}

/// Everything a renderer needs, in serializable form.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    /// Status line for the active step.
    pub status: String,
    /// Index of the active step.
    pub active_index: usize,
    /// The active step.
    pub current: &'a Step,
    /// All history entries.
    pub entries: Vec<HistoryEntry>,
    /// The raw steps.
    pub steps: &'a [Step],
}

impl<'a> Snapshot<'a> {
    /// Captures the renderable state of a history.
    pub fn of(game: &'a GameHistory) -> Self {
        let active = game.active_index();
        Self {
            status: game.status().to_string(),
            active_index: active,
            current: game.current_step(),
            entries: game
                .entries()
                .map(|(index, label)| HistoryEntry {
                    index,
                    description: label.to_string(),
                    active: index == active,
                })
                .collect(),
            steps: game.steps(),
        }
    }
}

/// Applies `script` to a new game.
#[instrument]
pub fn replay(script: &str) -> Result<GameHistory> {
    let commands = parse_script(script)?;
    let mut game = GameHistory::new();

    for (n, command) in commands.into_iter().enumerate() {
        let applied = game
            .apply(command)
            .with_context(|| format!("Command {} ({}) failed", n + 1, command))?;
        if let Applied::Play(PlayOutcome::Ignored(reason)) = applied {
            info!(%command, %reason, "Play ignored");
        }
    }

    Ok(game)
}

/// Writes the board, status line and history list as text.
pub fn write_text(game: &GameHistory, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", game.current_step().board().display())?;
    writeln!(out)?;
    writeln!(out, "{}", game.status())?;
    writeln!(out)?;
    for (index, label) in game.entries() {
        let marker = if index == game.active_index() { '>' } else { ' ' };
        writeln!(out, "{marker} {index}. {}", label.jump_text())?;
    }
    Ok(())
}

/// Runs the `replay` subcommand.
#[instrument(skip(out))]
pub fn run_replay(script: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let game = replay(script)?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &Snapshot::of(&game))
            .context("Failed to write JSON")?;
        writeln!(out)?;
    } else {
        write_text(&game, out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(script: &str, json: bool) -> String {
        let mut out = Vec::new();
        run_replay(script, json, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_output() {
        let text = render("0 3 1 4 2", false);
        assert_eq!(
            text,
            "X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9\n\
             \n\
             Winner: X\n\
             \n  0. Go to Game Start\
             \n  1. Go to step #1\
             \n  2. Go to step #2\
             \n  3. Go to step #3\
             \n  4. Go to step #4\
             \n> 5. Go to Game Result\n"
        );
    }

    #[test]
    fn test_jump_marks_active_entry() {
        let text = render("0 3 1 4 2 j2", false);
        assert!(text.contains("Next player: X"));
        assert!(text.contains("> 2. Go to step #2"));
        assert!(text.contains("  5. Go to Game Result"));
    }

    #[test]
    fn test_json_output() {
        let value: serde_json::Value = serde_json::from_str(&render("0 3 1 4 2 j2 4", true)).unwrap();
        assert_eq!(value["active_index"], 3);
        assert_eq!(value["status"], "Next player: O");
        assert_eq!(value["entries"].as_array().unwrap().len(), 4);
        assert_eq!(value["entries"][3]["description"], "step #3");
    }

    #[test]
    fn test_bad_jump_is_an_error() {
        let err = replay("0 j5").unwrap_err();
        assert!(err.to_string().contains("Command 2 (jump 5) failed"));
    }

    #[test]
    fn test_ignored_play_is_not_an_error() {
        let game = replay("4 4").unwrap();
        assert_eq!(game.len(), 2);
    }
}
