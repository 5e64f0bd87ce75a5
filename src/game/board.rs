//! Board storage: a 3x3 grid with a place/read contract.
//!
//! The board knows nothing about wins or turns. Rule evaluation lives in
//! [`super::rules`] and turn order in the session controller, so this type
//! only enforces the placement contract.

use tracing::debug;

use super::types::{Cell, Marker};

/// The 3x3 board, cells indexed 0-8 in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Places `marker` at `index`.
    ///
    /// Returns `true` on success. Returns `false` and leaves the board
    /// unchanged when the index is out of range or the cell is already
    /// occupied; an invalid placement is a no-op, never an error.
    pub fn place(&mut self, index: usize, marker: Marker) -> bool {
        match self.cells.get(index) {
            Some(Cell::Empty) => {
                self.cells[index] = Cell::Marked(marker);
                debug!(index, %marker, "marker placed");
                true
            }
            Some(Cell::Marked(_)) => {
                debug!(index, %marker, "cell already occupied");
                false
            }
            None => {
                debug!(index, %marker, "index out of range");
                false
            }
        }
    }

    /// Clears all cells.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Returns the cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns all cells as a slice, row-major.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns an owned copy of the cells. Mutating the copy never
    /// affects the board.
    pub fn snapshot(&self) -> [Cell; 9] {
        self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
