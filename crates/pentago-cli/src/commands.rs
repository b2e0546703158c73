//! Commands typed at the prompt.

use pentago_core::{GameError, Move, ParseError};
use std::str::FromStr;
use thiserror::Error;

/// Text shown for `help`
pub const HELP: &str = "\
Commands:
  <pos> <quadrant> <rotation>   place a marble and turn a quadrant, e.g. b0 4 C
                                pos is a row a-f and a column 0-5,
                                quadrant is 1-4, rotation is C or A
  board                         show the board
  json                          dump the game as JSON
  moves                         count the moves available
  help                          show this text
  quit                          leave the game";

/// A line of input from a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place and rotate for the side to move
    Play(Move),

    /// Show the board
    Board,

    /// Dump the game as JSON
    Json,

    /// Count available moves
    Moves,

    /// Show usage
    Help,

    /// Leave
    Quit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Game(#[from] GameError),

    #[error("could not encode game: {0}")]
    Encode(#[from] serde_json::Error),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let command = match s.trim().to_ascii_lowercase().as_str() {
            "board" => Command::Board,
            "json" => Command::Json,
            "moves" => Command::Moves,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Play(s.parse()?),
        };
        Ok(command)
    }
}
