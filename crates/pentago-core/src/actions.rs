//! Moves players make and the events that result from them.

use crate::coord::{ParseError, Position, Quadrant, Rotation};
use crate::player::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A full turn: place a marble, then twist a quadrant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Where the marble goes
    pub position: Position,
    /// Which quadrant is turned afterwards
    pub quadrant: Quadrant,
    /// Which way it is turned
    pub rotation: Rotation,
}

impl Move {
    /// Create a new move
    pub fn new(position: Position, quadrant: Quadrant, rotation: Rotation) -> Self {
        Self {
            position,
            quadrant,
            rotation,
        }
    }
}

impl FromStr for Move {
    type Err = ParseError;

    /// Parse the three-token form `"b0 4 C"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let [position, quadrant, rotation] = tokens.as_slice() else {
            return Err(ParseError::MalformedMove(s.trim().to_string()));
        };

        Ok(Move {
            position: position.parse()?,
            quadrant: quadrant.parse()?,
            rotation: rotation.parse()?,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position, self.quadrant, self.rotation)
    }
}

/// Events that occur as a result of a move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A marble was put on the board
    MarblePlaced { color: Color, position: Position },

    /// A quadrant was turned
    QuadrantRotated {
        quadrant: Quadrant,
        rotation: Rotation,
    },

    /// A player completed five in a row
    GameWon {
        winner: Color,
        /// Whether the line existed before the quadrant was turned
        before_rotation: bool,
    },

    /// The board filled up with no winner
    GameDrawn,

    /// Play passed to the other player
    TurnPassed { next: Color },
}
