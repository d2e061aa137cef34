use itertools::iproduct;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::solver::{Outcome, Solver};

/// An empty cell.
pub const EMPTY: u8 = 0;

/// A 9x9 grid of cells, 0 for empty and 1..=9 for a placed digit.
///
/// The type enforces nothing beyond the shape: a `Grid` may hold conflicting
/// values, and [`Grid::has_conflict`] is the separate operation that detects
/// them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    pub cells: [[u8; 9]; 9],
}

impl Grid {
    pub fn empty() -> Self {
        Self { cells: [[EMPTY; 9]; 9] }
    }

    pub fn from_rows(rows: [[u8; 9]; 9]) -> Self {
        Self { cells: rows }
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        debug_assert!(value <= 9, "cell value out of range: {value}");
        self.cells[row][col] = value;
    }

    pub fn clear(&mut self) {
        self.cells = [[EMPTY; 9]; 9];
    }

    /// True if `value` could sit at `(row, col)` without repeating a digit in
    /// the row, the column, or the containing 3x3 box. The cell at
    /// `(row, col)` itself is never compared against its own content, so the
    /// check also works for values that are already placed.
    pub fn is_valid_placement(&self, row: usize, col: usize, value: u8) -> bool {
        for i in 0..9 {
            if (i != col && self.cells[row][i] == value)
                || (i != row && self.cells[i][col] == value)
            {
                return false;
            }
        }
        let (box_row, box_col) = (row / 3 * 3, col / 3 * 3);
        for (r, c) in iproduct!(box_row..box_row + 3, box_col..box_col + 3) {
            if (r, c) != (row, col) && self.cells[r][c] == value {
                return false;
            }
        }
        true
    }

    /// True if any filled cell repeats a digit among its peers, i.e. the
    /// puzzle is self-contradictory before any solving begins.
    pub fn has_conflict(&self) -> bool {
        iproduct!(0..9, 0..9).any(|(r, c)| {
            let v = self.cells[r][c];
            v != EMPTY && !self.is_valid_placement(r, c, v)
        })
    }

    /// Positions of every filled cell that conflicts with a peer.
    pub fn conflicts(&self) -> Vec<(usize, usize)> {
        iproduct!(0..9, 0..9)
            .filter(|&(r, c)| {
                let v = self.cells[r][c];
                v != EMPTY && !self.is_valid_placement(r, c, v)
            })
            .collect()
    }

    /// First empty cell in row-major order.
    pub fn first_empty(&self) -> Option<(usize, usize)> {
        iproduct!(0..9, 0..9).find(|&(r, c)| self.cells[r][c] == EMPTY)
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != EMPTY)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

/// A grid paired with the puzzle it started from, so callers can tell given
/// clues apart from solver-derived cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    given: Grid,
    grid: Grid,
}

impl Board {
    pub fn new(given: Grid) -> Self {
        Self { given, grid: given }
    }

    /// The original puzzle, untouched by solving.
    pub fn given(&self) -> &Grid {
        &self.given
    }

    /// The working grid: identical to the given grid until a solve succeeds.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Assign a cell of the puzzle itself. Resets any solved state, since the
    /// previous solution no longer corresponds to the given grid.
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.given.set(row, col, value);
        self.grid = self.given;
    }

    pub fn clear(&mut self) {
        self.given.clear();
        self.grid.clear();
    }

    pub fn is_given(&self, row: usize, col: usize) -> bool {
        self.given.get(row, col) != EMPTY
    }

    /// True for cells filled in by the solver rather than the puzzle.
    pub fn is_derived(&self, row: usize, col: usize) -> bool {
        !self.is_given(row, col) && self.grid.get(row, col) != EMPTY
    }

    /// Run `solver` against the given grid. On success the working grid holds
    /// the completed puzzle; on any other outcome it is left as the given
    /// grid.
    pub fn solve(&mut self, solver: &mut Solver) -> Outcome {
        let outcome = solver.solve(&self.given);
        if let Outcome::Solved(solved) = outcome {
            self.grid = solved;
        }
        outcome
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Grid::empty())
    }
}
