//! Text rendering of the board.

use crate::board::{Board, Cell};
use crate::coord::QUADRANT_SIZE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbols used for each cell value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyphs {
    pub empty: char,
    pub black: char,
    pub white: char,
}

impl Glyphs {
    pub const UNICODE: Glyphs = Glyphs {
        empty: '□',
        black: '○',
        white: '●',
    };

    pub const ASCII: Glyphs = Glyphs {
        empty: '.',
        black: 'X',
        white: 'O',
    };

    fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::Black => self.black,
            Cell::White => self.white,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs::UNICODE
    }
}

impl Board {
    /// Render the board with row labels a-f, column labels 0-5 and
    /// dividers between the quadrant halves.
    pub fn render(&self, glyphs: &Glyphs) -> String {
        let mut out = String::from("  0 1 2   3 4 5\n");

        for (row, cells) in self.rows().iter().enumerate() {
            if row == QUADRANT_SIZE {
                out.push_str("  -------------\n");
            }

            out.push((b'a' + row as u8) as char);
            for (col, &cell) in cells.iter().enumerate() {
                if col == QUADRANT_SIZE {
                    out.push_str(" |");
                }
                out.push(' ');
                out.push(glyphs.glyph(cell));
            }
            out.push('\n');
        }

        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Glyphs::UNICODE))
    }
}
