//! Core game state machine.
//!
//! This module contains the main `GameState` struct and the move rules.

use crate::actions::{GameEvent, Move};
use crate::board::{Board, Cell};
use crate::coord::{Position, Quadrant, Rotation};
use crate::player::{Color, Player};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Moves are being accepted
    InProgress,
    /// Black completed five in a row
    BlackWon,
    /// White completed five in a row
    WhiteWon,
    /// The board filled up with no winner
    Draw,
}

impl GamePhase {
    /// The phase reached when a color wins
    pub fn won_by(color: Color) -> Self {
        match color {
            Color::Black => GamePhase::BlackWon,
            Color::White => GamePhase::WhiteWon,
        }
    }

    /// Whether the game is over
    pub fn is_terminal(self) -> bool {
        self != GamePhase::InProgress
    }

    /// The winning color, if any
    pub fn winner(self) -> Option<Color> {
        match self {
            GamePhase::BlackWon => Some(Color::Black),
            GamePhase::WhiteWon => Some(Color::White),
            GamePhase::InProgress | GamePhase::Draw => None,
        }
    }
}

/// Errors that can occur when applying a move
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Game is finished")]
    GameFinished,

    #[error("Not your turn")]
    WrongTurn,

    #[error("Position is not empty")]
    CellOccupied,
}

/// Reasons a decoded game cannot have come from real play
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("players must be listed Black then White")]
    MismatchedPlayers,

    #[error("phase {0:?} does not match the board")]
    PhaseMismatch(GamePhase),

    #[error("{black} black and {white} white marbles cannot occur with {next} to move")]
    MarbleCountMismatch {
        black: usize,
        white: usize,
        next: Color,
    },
}

/// The complete game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateFields")]
pub struct GameState {
    /// The game board
    board: Board,
    /// Player whose move is next
    current_player: Color,
    /// Current game phase
    phase: GamePhase,
    /// Black then White
    players: [Player; 2],
}

impl GameState {
    /// Create a new game with default player names
    pub fn new() -> Self {
        Self::with_players(Color::Black.name(), Color::White.name())
    }

    /// Create a new game with named players
    pub fn with_players(black: impl Into<String>, white: impl Into<String>) -> Self {
        Self {
            board: Board::new(),
            current_player: Color::Black,
            phase: GamePhase::InProgress,
            players: [
                Player::new(black, Color::Black),
                Player::new(white, Color::White),
            ],
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the player whose move is next
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Get the current phase
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Check if the game is finished
    pub fn is_finished(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Color> {
        self.phase.winner()
    }

    /// Get the player playing a color
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color as usize]
    }

    /// Display name of the player playing a color
    pub fn player_name(&self, color: Color) -> &str {
        &self.player(color).name
    }

    /// Number of marbles on the board
    pub fn marble_count(&self) -> usize {
        self.board.count(Cell::Black) + self.board.count(Cell::White)
    }

    /// Get every move the current player could make
    pub fn valid_moves(&self) -> Vec<Move> {
        if self.is_finished() {
            return Vec::new();
        }

        Position::all()
            .filter(|&pos| self.board.get(pos) == Cell::Empty)
            .flat_map(|pos| {
                Quadrant::ALL.into_iter().flat_map(move |quadrant| {
                    Rotation::ALL
                        .into_iter()
                        .map(move |rotation| Move::new(pos, quadrant, rotation))
                })
            })
            .collect()
    }

    /// Place a marble for `color` and twist a quadrant.
    ///
    /// Rejections leave the game untouched. A five-in-a-row formed by the
    /// placement itself ends the game before the quadrant is turned, and the
    /// turn does not pass.
    pub fn apply_move(
        &mut self,
        color: Color,
        position: Position,
        quadrant: Quadrant,
        rotation: Rotation,
    ) -> Result<Vec<GameEvent>, GameError> {
        if self.is_finished() {
            return Err(GameError::GameFinished);
        }
        if color != self.current_player {
            return Err(GameError::WrongTurn);
        }

        self.board.place(position, color)?;
        let mut events = vec![GameEvent::MarblePlaced { color, position }];

        if let Some(winner) = self.find_winner() {
            self.phase = GamePhase::won_by(winner);
            events.push(GameEvent::GameWon {
                winner,
                before_rotation: true,
            });
            return Ok(events);
        }

        self.board.rotate_quadrant(quadrant, rotation);
        events.push(GameEvent::QuadrantRotated { quadrant, rotation });

        if let Some(winner) = self.find_winner() {
            self.phase = GamePhase::won_by(winner);
            events.push(GameEvent::GameWon {
                winner,
                before_rotation: false,
            });
        } else if self.board.is_full() {
            self.phase = GamePhase::Draw;
            events.push(GameEvent::GameDrawn);
        }

        self.current_player = self.current_player.other();
        events.push(GameEvent::TurnPassed {
            next: self.current_player,
        });

        Ok(events)
    }

    /// Apply a parsed move for `color`
    pub fn play(&mut self, color: Color, mv: Move) -> Result<Vec<GameEvent>, GameError> {
        self.apply_move(color, mv.position, mv.quadrant, mv.rotation)
    }

    /// White is checked before Black
    fn find_winner(&self) -> Option<Color> {
        [Color::White, Color::Black]
            .into_iter()
            .find(|&color| self.board.has_five_in_a_row(color))
    }

    /// Flat snapshot for front ends
    pub fn to_json_friendly(&self) -> GameStateJson {
        let rows = self
            .board
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => '.',
                        Cell::Black => 'B',
                        Cell::White => 'W',
                    })
                    .collect()
            })
            .collect();

        GameStateJson {
            rows,
            current_player: self.current_player,
            phase: self.phase,
            players: self.players.to_vec(),
            marbles: self.marble_count(),
        }
    }
}

/// Unchecked wire form of a `GameState`
#[derive(Deserialize)]
struct GameStateFields {
    board: Board,
    current_player: Color,
    phase: GamePhase,
    players: [Player; 2],
}

impl TryFrom<GameStateFields> for GameState {
    type Error = StateError;

    fn try_from(fields: GameStateFields) -> Result<Self, Self::Error> {
        let state = GameState {
            board: fields.board,
            current_player: fields.current_player,
            phase: fields.phase,
            players: fields.players,
        };
        state.check_consistency()?;
        Ok(state)
    }
}

impl GameState {
    /// Check that this state is reachable by legal play as far as the
    /// board can tell: player slots, marble balance and phase.
    fn check_consistency(&self) -> Result<(), StateError> {
        if self.players[0].color != Color::Black || self.players[1].color != Color::White {
            return Err(StateError::MismatchedPlayers);
        }

        let black = self.board.count(Cell::Black);
        let white = self.board.count(Cell::White);
        let balanced = match self.phase {
            // Black moves first, so Black is never behind and at most one ahead
            GamePhase::InProgress => match self.current_player {
                Color::Black => black == white,
                Color::White => black == white + 1,
            },
            _ => black == white || black == white + 1,
        };
        if !balanced {
            return Err(StateError::MarbleCountMismatch {
                black,
                white,
                next: self.current_player,
            });
        }

        let black_line = self.board.has_five_in_a_row(Color::Black);
        let white_line = self.board.has_five_in_a_row(Color::White);
        let phase_fits = match self.phase {
            GamePhase::InProgress => !black_line && !white_line && !self.board.is_full(),
            GamePhase::BlackWon => black_line && !white_line,
            GamePhase::WhiteWon => white_line,
            GamePhase::Draw => !black_line && !white_line && self.board.is_full(),
        };
        if !phase_fits {
            return Err(StateError::PhaseMismatch(self.phase));
        }

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON-friendly view of a game: one string per board row (`.`, `B`, `W`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateJson {
    pub rows: Vec<String>,
    pub current_player: Color,
    pub phase: GamePhase,
    pub players: Vec<Player>,
    pub marbles: usize,
}
