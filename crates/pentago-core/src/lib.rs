//! Pentago - a two-player marble game engine
//!
//! This crate provides the core game logic for Pentago, including:
//! - Board addressing (cells, quadrants, rotation directions)
//! - Board representation with quadrant rotation and five-in-a-row detection
//! - Players and marble colors
//! - Game state machine with full rule enforcement
//! - Text rendering of the board
//!
//! # Rules
//!
//! Black moves first. On each turn a player places a marble on an empty cell
//! and then turns one of the four 3x3 quadrants a quarter turn. Five marbles
//! of one color in a row (horizontally, vertically or diagonally) wins; a full
//! board with no such line is a draw.
//!
//! # Modules
//!
//! - [`coord`]: Cell positions, quadrants and rotation directions
//! - [`board`]: The 6x6 grid, rotation and win detection
//! - [`player`]: Marble colors and named players
//! - [`actions`]: Moves and the events they produce
//! - [`game`]: Game state machine
//! - [`render`]: Text board for terminals

pub mod actions;
pub mod board;
pub mod coord;
pub mod game;
pub mod player;
pub mod render;

// Re-export commonly used types
pub use actions::{GameEvent, Move};
pub use board::{Board, Cell, CELL_COUNT, WIN_LENGTH};
pub use coord::{ParseError, Position, Quadrant, Rotation, BOARD_SIZE};
pub use game::{GameError, GamePhase, GameState, GameStateJson, StateError};
pub use player::{Color, Player};
pub use render::Glyphs;
