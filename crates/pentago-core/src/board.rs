//! Game board representation.
//!
//! This module contains:
//! - The cell type and the 6x6 grid
//! - Marble placement
//! - Quadrant rotation
//! - Five-in-a-row detection

use crate::coord::{Position, Quadrant, Rotation, BOARD_SIZE, QUADRANT_SIZE};
use crate::game::GameError;
use crate::player::Color;
use serde::{Deserialize, Serialize};

/// Marbles in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Line directions as (row step, col step): right, down, down-right, down-left
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Contents of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// The color of the marble in this cell, if any
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }
}

/// The 6x6 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cell at a position
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Rows top to bottom
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Put a marble on an empty cell
    pub fn place(&mut self, pos: Position, color: Color) -> Result<(), GameError> {
        let cell = &mut self.cells[pos.row()][pos.col()];
        if *cell != Cell::Empty {
            return Err(GameError::CellOccupied);
        }
        *cell = color.to_cell();
        Ok(())
    }

    /// Turn one quadrant a quarter turn.
    ///
    /// Whatever occupies each cell moves with it, empties included.
    pub fn rotate_quadrant(&mut self, quadrant: Quadrant, rotation: Rotation) {
        let (r0, c0) = quadrant.anchor();

        let mut snapshot = [[Cell::Empty; QUADRANT_SIZE]; QUADRANT_SIZE];
        for (r, row) in snapshot.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[r0 + r][c0..c0 + QUADRANT_SIZE]);
        }

        let last = QUADRANT_SIZE - 1;
        for r in 0..QUADRANT_SIZE {
            for c in 0..QUADRANT_SIZE {
                self.cells[r0 + r][c0 + c] = match rotation {
                    Rotation::Clockwise => snapshot[last - c][r],
                    Rotation::Anticlockwise => snapshot[c][last - r],
                };
            }
        }
    }

    /// Count cells holding a given value
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Check if every cell holds a marble
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&c| c != Cell::Empty)
    }

    /// Check if a color has five marbles in a row anywhere on the board
    pub fn has_five_in_a_row(&self, color: Color) -> bool {
        let target = color.to_cell();
        lines().any(|line| line.iter().all(|&pos| self.get(pos) == target))
    }
}

/// Every run of `WIN_LENGTH` cells that fits on the board.
///
/// A run starts at any cell from which `WIN_LENGTH - 1` further steps in one
/// of the four directions stay on the board, so both end offsets of each axis
/// are included.
pub fn lines() -> impl Iterator<Item = [Position; WIN_LENGTH]> {
    DIRECTIONS.into_iter().flat_map(|(dr, dc)| {
        Position::all().filter_map(move |start| {
            let mut line = [start; WIN_LENGTH];
            for (i, slot) in line.iter_mut().enumerate() {
                let row = start.row() as isize + dr * i as isize;
                let col = start.col() as isize + dc * i as isize;
                if row < 0 || col < 0 {
                    return None;
                }
                *slot = Position::new(row as usize, col as usize)?;
            }
            Some(line)
        })
    })
}
