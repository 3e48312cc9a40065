//! Wire encoding of a grid for the evaluation boundary.
//!
//! Evaluators receive the board as a flat row-major symbol array. The symbol
//! values are part of the contract: the machine side's token is `0`, the
//! human side's is `1`, an empty cell is `2`. An evaluator that reads these
//! with any other mapping mis-scores positions without crashing, so the
//! mapping is pinned here and by the tests below.

use crate::game::{Cell, Grid};

pub const MACHINE_SYMBOL: u8 = 0;
pub const HUMAN_SYMBOL: u8 = 1;
pub const EMPTY_SYMBOL: u8 = 2;

/// Wire symbol for a cell.
pub fn symbol(cell: Cell) -> u8 {
    match cell {
        Cell::Empty => EMPTY_SYMBOL,
        Cell::Red => MACHINE_SYMBOL,
        Cell::Yellow => HUMAN_SYMBOL,
    }
}

/// An owned, row-major copy of a board handed across the evaluation
/// boundary. Evaluators may take as long as they like over it; the live
/// grid is never shared with a search in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl BoardSnapshot {
    /// Serialize a grid, top row first.
    pub fn from_grid(grid: &Grid) -> Self {
        let rows = grid.rows();
        let cols = grid.cols();
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(symbol(grid.cell(row, col)));
            }
        }
        BoardSnapshot { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Symbol at a position. Rows count from the top, as in the grid.
    pub fn symbol_at(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.cols + col]
    }

    /// The flat row-major symbol array.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Check if a column can still take a token.
    pub fn is_column_open(&self, col: usize) -> bool {
        col < self.cols && self.symbol_at(0, col) == EMPTY_SYMBOL
    }
}
