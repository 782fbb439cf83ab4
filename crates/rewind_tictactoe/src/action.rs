//! Commands a rendering layer sends into the history store.
//!
//! Commands have a small textual form so that games can be scripted:
//! a bare cell index (`4`), a cell name (`center`) or `play 4` places a
//! mark, and `j2` or `jump 2` moves the active index.

use std::str::FromStr;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::history::{GameHistory, HistoryError, PlayOutcome};
use crate::position::Position;

/// A request from the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Command {
    /// Place the next mark on a cell.
    #[display("play {}", _0.to_index())]
    Play(Position),
    /// Make the step at this index active.
    #[display("jump {_0}")]
    Jump(usize),
}

/// What applying a [`Command`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Result of a play.
    Play(PlayOutcome),
    /// The jump succeeded.
    Jump(usize),
}

/// Error parsing the textual form of a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid command {input:?}: {reason}")]
pub struct CommandParseError {
    /// The offending text.
    pub input: String,
    /// What was wrong with it.
    pub reason: String,
}

impl CommandParseError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_lowercase();
        let (verb, arg) = match text.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, arg.trim()),
            None if text.starts_with('j') => ("jump", &text[1..]),
            None => ("play", text.as_str()),
        };

        match verb {
            "play" | "p" => Position::from_label_or_number(arg)
                .map(Command::Play)
                .ok_or_else(|| {
                    CommandParseError::new(s, "cell must be 0-8 or a cell name")
                }),
            "jump" | "j" => arg
                .parse()
                .map(Command::Jump)
                .map_err(|_| CommandParseError::new(s, format!("{arg:?} is not a step index"))),
            other => Err(CommandParseError::new(
                s,
                format!("unknown verb {other:?}"),
            )),
        }
    }
}

/// Parses a whitespace or comma separated list of commands.
///
/// Multi-word commands must be written in their short form (`j2`) here,
/// since whitespace separates commands.
#[instrument]
pub fn parse_script(script: &str) -> Result<Vec<Command>, CommandParseError> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

impl GameHistory {
    /// Applies one command to the history.
    #[instrument(skip(self))]
    pub fn apply(&mut self, command: Command) -> Result<Applied, HistoryError> {
        match command {
            Command::Play(pos) => Ok(Applied::Play(self.play_cell(pos))),
            Command::Jump(index) => {
                self.jump_to(index)?;
                Ok(Applied::Jump(index))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!("4".parse::<Command>(), Ok(Command::Play(Position::Center)));
        assert_eq!("play 0".parse::<Command>(), Ok(Command::Play(Position::TopLeft)));
        assert_eq!("j2".parse::<Command>(), Ok(Command::Jump(2)));
        assert_eq!(" Jump 7 ".parse::<Command>(), Ok(Command::Jump(7)));
    }

    #[test]
    fn test_parse_cell_names() {
        assert_eq!("center".parse::<Command>(), Ok(Command::Play(Position::Center)));
        assert_eq!(
            "play Top-left".parse::<Command>(),
            Ok(Command::Play(Position::TopLeft))
        );
        assert_eq!(
            "p bottom-right".parse::<Command>(),
            Ok(Command::Play(Position::BottomRight))
        );
        assert!("jump center".parse::<Command>().is_err());
        assert!("play middle".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("9".parse::<Command>().is_err());
        assert!("x".parse::<Command>().is_err());
        assert!("move 3".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for command in [Command::Play(Position::BottomLeft), Command::Jump(3)] {
            assert_eq!(command.to_string().parse::<Command>(), Ok(command));
        }
    }

    #[test]
    fn test_parse_script() {
        let script = parse_script("0 3, top-center j1  center").unwrap();
        assert_eq!(
            script,
            vec![
                Command::Play(Position::TopLeft),
                Command::Play(Position::MiddleLeft),
                Command::Play(Position::TopCenter),
                Command::Jump(1),
                Command::Play(Position::Center),
            ]
        );
    }

    #[test]
    fn test_apply_jump_error_propagates() {
        let mut game = GameHistory::new();
        assert_eq!(
            game.apply(Command::Jump(1)),
            Err(HistoryError::StepOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(game.apply(Command::Jump(0)), Ok(Applied::Jump(0)));
    }
}
