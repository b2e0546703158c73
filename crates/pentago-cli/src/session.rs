//! A hot-seat game shared by two players at one terminal.

use pentago_core::{Color, GameEvent, GamePhase, GameState, Glyphs};
use tracing::{debug, info};

use crate::commands::{Command, CommandError, HELP};
use crate::config::CliConfig;

/// What the front end should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this and keep reading
    Text(String),
    /// Stop the session
    Quit,
}

/// A single game and how to draw it.
pub struct Session {
    game: GameState,
    glyphs: Glyphs,
}

impl Session {
    pub fn new(config: &CliConfig) -> Self {
        Self {
            game: GameState::with_players(config.black_name.clone(), config.white_name.clone()),
            glyphs: config.glyphs,
        }
    }

    #[cfg(test)]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Banner shown before the first move
    pub fn intro(&self) -> String {
        format!(
            "Pentago: {} (Black) vs {} (White). Type 'help' for commands.\n{}{}",
            self.game.player_name(Color::Black),
            self.game.player_name(Color::White),
            self.board(),
            self.status()
        )
    }

    pub fn handle(&mut self, command: Command) -> Result<Reply, CommandError> {
        let text = match command {
            Command::Play(mv) => {
                let color = self.game.current_player();
                let events = self.game.play(color, mv)?;
                info!(%color, %mv, "move accepted");
                for event in &events {
                    debug!(?event, "game event");
                    if let GameEvent::GameWon {
                        winner,
                        before_rotation,
                    } = event
                    {
                        info!(%winner, before_rotation = *before_rotation, "game won");
                    }
                }
                format!("{}{}", self.board(), self.status())
            }
            Command::Board => format!("{}{}", self.board(), self.status()),
            Command::Json => serde_json::to_string_pretty(&self.game.to_json_friendly())?,
            Command::Moves => format!("{} moves available", self.game.valid_moves().len()),
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Text(text))
    }

    fn board(&self) -> String {
        self.game.board().render(&self.glyphs)
    }

    /// Whose turn it is, or how the game ended
    pub fn status(&self) -> String {
        let named = |color: Color| format!("{} ({})", self.game.player_name(color), color);
        match self.game.phase() {
            GamePhase::InProgress => format!("{} to move", named(self.game.current_player())),
            GamePhase::BlackWon => format!("{} wins", named(Color::Black)),
            GamePhase::WhiteWon => format!("{} wins", named(Color::White)),
            GamePhase::Draw => "Draw".to_string(),
        }
    }
}
