//! Board addressing: cell positions, quadrants and rotation directions.
//!
//! This module provides the coordinate types for the 6x6 Pentago board:
//! - `Position`: a single cell, written as a row letter and a column digit (`b0`)
//! - `Quadrant`: one of the four fixed 3x3 sub-boards, numbered 1-4
//! - `Rotation`: the direction a quadrant is turned after placing a marble
//!
//! Every type here parses from the short tokens players type at the prompt.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Side length of the board
pub const BOARD_SIZE: usize = 6;

/// Side length of a quadrant
pub const QUADRANT_SIZE: usize = 3;

/// Row labels, top to bottom
const ROW_LABELS: [char; BOARD_SIZE] = ['a', 'b', 'c', 'd', 'e', 'f'];

/// Errors produced when parsing player input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid position '{0}' (expected a row a-f followed by a column 0-5)")]
    InvalidPosition(String),

    #[error("invalid quadrant '{0}' (expected 1-4)")]
    InvalidQuadrant(String),

    #[error("invalid rotation '{0}' (expected C or A)")]
    InvalidRotation(String),

    #[error("invalid color '{0}' (expected black or white)")]
    InvalidColor(String),

    #[error("malformed move '{0}' (expected e.g. \"b0 4 C\")")]
    MalformedMove(String),
}

/// A cell on the board.
///
/// `row` 0 is the top row (`a`), `col` 0 is the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: u8,
    col: u8,
}

/// Unchecked wire form of a `Position`
#[derive(Deserialize)]
struct RawPosition {
    row: u8,
    col: u8,
}

impl TryFrom<RawPosition> for Position {
    type Error = ParseError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row as usize, raw.col as usize)
            .ok_or_else(|| ParseError::InvalidPosition(format!("({}, {})", raw.row, raw.col)))
    }
}

impl Position {
    /// Create a position, or `None` if either index is off the board
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Row index (0 = `a`)
    pub fn row(&self) -> usize {
        self.row as usize
    }

    /// Column index
    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Row letter as shown on the rendered board
    pub fn row_label(&self) -> char {
        ROW_LABELS[self.row()]
    }

    /// All 36 positions in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| {
            (0..BOARD_SIZE).map(move |col| Position {
                row: row as u8,
                col: col as u8,
            })
        })
    }
}

/// Map a row letter (either case) to its index
fn row_index(letter: char) -> Option<usize> {
    let lower = letter.to_ascii_lowercase();
    if ('a'..='f').contains(&lower) {
        Some((lower as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Map a column digit to its index
fn col_index(digit: char) -> Option<usize> {
    digit
        .to_digit(10)
        .map(|d| d as usize)
        .filter(|&d| d < BOARD_SIZE)
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidPosition(s.to_string());

        let mut chars = s.trim().chars();
        let (Some(r), Some(c), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let row = row_index(r).ok_or_else(invalid)?;
        let col = col_index(c).ok_or_else(invalid)?;
        Position::new(row, col).ok_or_else(invalid)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_label(), self.col)
    }
}

/// One of the four fixed 3x3 sub-boards.
///
/// Numbered 1-4 left to right, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// All quadrants in index order
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Look up a quadrant by its 1-based index
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Quadrant::TopLeft),
            2 => Some(Quadrant::TopRight),
            3 => Some(Quadrant::BottomLeft),
            4 => Some(Quadrant::BottomRight),
            _ => None,
        }
    }

    /// The 1-based index players use
    pub fn index(&self) -> u8 {
        match self {
            Quadrant::TopLeft => 1,
            Quadrant::TopRight => 2,
            Quadrant::BottomLeft => 3,
            Quadrant::BottomRight => 4,
        }
    }

    /// Top-left cell of the quadrant as (row, col)
    pub fn anchor(&self) -> (usize, usize) {
        match self {
            Quadrant::TopLeft => (0, 0),
            Quadrant::TopRight => (0, QUADRANT_SIZE),
            Quadrant::BottomLeft => (QUADRANT_SIZE, 0),
            Quadrant::BottomRight => (QUADRANT_SIZE, QUADRANT_SIZE),
        }
    }

    /// The quadrant a cell belongs to
    pub fn containing(position: Position) -> Self {
        match (
            position.row() < QUADRANT_SIZE,
            position.col() < QUADRANT_SIZE,
        ) {
            (true, true) => Quadrant::TopLeft,
            (true, false) => Quadrant::TopRight,
            (false, true) => Quadrant::BottomLeft,
            (false, false) => Quadrant::BottomRight,
        }
    }

    /// The nine cells of this quadrant in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let (r0, c0) = self.anchor();
        (0..QUADRANT_SIZE).flat_map(move |r| {
            (0..QUADRANT_SIZE).map(move |c| Position {
                row: (r0 + r) as u8,
                col: (c0 + c) as u8,
            })
        })
    }
}

impl TryFrom<u8> for Quadrant {
    type Error = ParseError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Quadrant::from_index(index).ok_or_else(|| ParseError::InvalidQuadrant(index.to_string()))
    }
}

impl FromStr for Quadrant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Quadrant::from_index)
            .ok_or_else(|| ParseError::InvalidQuadrant(s.to_string()))
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Direction of a quarter turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    Clockwise,
    Anticlockwise,
}

impl Rotation {
    /// Both directions
    pub const ALL: [Rotation; 2] = [Rotation::Clockwise, Rotation::Anticlockwise];

    /// The direction that undoes this one
    pub fn reverse(self) -> Rotation {
        match self {
            Rotation::Clockwise => Rotation::Anticlockwise,
            Rotation::Anticlockwise => Rotation::Clockwise,
        }
    }
}

impl FromStr for Rotation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "cw" | "clockwise" => Ok(Rotation::Clockwise),
            "a" | "acw" | "ccw" | "anticlockwise" => Ok(Rotation::Anticlockwise),
            _ => Err(ParseError::InvalidRotation(s.to_string())),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rotation::Clockwise => write!(f, "C"),
            Rotation::Anticlockwise => write!(f, "A"),
        }
    }
}
