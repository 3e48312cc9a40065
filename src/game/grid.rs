use crate::error::GridError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// Outcome of dropping a token into a column. A full column is a normal
/// end-state of play, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Placed { row: usize },
    ColumnFull,
}

/// A `rows x cols` cell store with per-column fill heights.
/// Row 0 is the top, row `rows - 1` is where gravity pulls tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    heights: Vec<usize>,
}

impl Grid {
    /// Create a new empty grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            heights: vec![0; cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position, bounds-checked.
    pub fn get(&self, row: usize, column: usize) -> Result<Cell, GridError> {
        if row >= self.rows || column >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                column,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.cells[row * self.cols + column])
    }

    /// Direct cell read for callers that have already validated bounds.
    pub(crate) fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row * self.cols + column]
    }

    /// Number of tokens stacked in a column.
    pub fn height(&self, column: usize) -> usize {
        self.heights[column]
    }

    /// Check if a column is full.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= self.cols {
            return true;
        }
        self.heights[column] == self.rows
    }

    /// Check if every column is full.
    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h == self.rows)
    }

    /// Drop a token into a column. The token falls to the lowest open cell.
    ///
    /// Fails with `InvalidColumn` before any mutation if the column index is
    /// out of range; a full column yields `Placement::ColumnFull` and leaves
    /// the grid untouched. This is the only code path that writes a cell.
    pub fn drop_token(&mut self, column: usize, token: Cell) -> Result<Placement, GridError> {
        debug_assert!(token != Cell::Empty, "cannot drop an empty token");

        if column >= self.cols {
            return Err(GridError::InvalidColumn {
                column,
                cols: self.cols,
            });
        }
        if self.heights[column] == self.rows {
            return Ok(Placement::ColumnFull);
        }

        let row = self.rows - self.heights[column] - 1;
        self.cells[row * self.cols + column] = token;
        self.heights[column] += 1;
        Ok(Placement::Placed { row })
    }
}
