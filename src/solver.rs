use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::debug;

use crate::board::{Grid, EMPTY};

/// Result of one solving run. Every case here is an ordinary value: an
/// unsolvable or contradictory puzzle is a normal negative answer, not a
/// fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A completed grid. The first solution found wins; uniqueness is not
    /// checked.
    Solved(Grid),
    /// Two peer cells already shared a digit before any search began.
    Contradictory,
    /// The puzzle is self-consistent but admits no completion.
    Unsolvable,
    /// The cancellation flag was raised mid-search.
    Aborted,
}

impl Outcome {
    fn kind(&self) -> &'static str {
        match self {
            Outcome::Solved(_) => "solved",
            Outcome::Contradictory => "contradictory",
            Outcome::Unsolvable => "unsolvable",
            Outcome::Aborted => "aborted",
        }
    }
}

enum Search {
    Done,
    Exhausted,
    Aborted,
}

/// Depth-first backtracking solver.
///
/// Each instance owns its cancellation flag and attempt counter, so
/// concurrent searches never share state. The caller's grid is copied on
/// entry and never mutated.
pub struct Solver {
    cancel: Arc<AtomicBool>,
    attempts: u64,
}

impl Solver {
    pub fn new() -> Self {
        Self { cancel: Arc::new(AtomicBool::new(false)), attempts: 0 }
    }

    /// Handle for requesting a cooperative abort from another thread. The
    /// flag is read at every decision point of the search.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Total candidate digits tested so far. Diagnostic only; has no effect
    /// on solving.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Solve `puzzle`, trying digits 1..=9 at each empty cell in row-major
    /// order and backtracking on dead ends.
    ///
    /// A grid that already fails [`Grid::has_conflict`] is rejected up front:
    /// the search only ever places locally valid digits and never re-checks
    /// the given clues.
    pub fn solve(&mut self, puzzle: &Grid) -> Outcome {
        if puzzle.has_conflict() {
            debug!("rejecting contradictory puzzle");
            return Outcome::Contradictory;
        }
        let mut grid = *puzzle;
        let outcome = match self.search(&mut grid) {
            Search::Done => Outcome::Solved(grid),
            Search::Exhausted => Outcome::Unsolvable,
            Search::Aborted => Outcome::Aborted,
        };
        debug!("search finished after {} attempts: {}", self.attempts, outcome.kind());
        outcome
    }

    fn search(&mut self, grid: &mut Grid) -> Search {
        let Some((row, col)) = grid.first_empty() else {
            return Search::Done;
        };
        if self.cancel.load(Ordering::Relaxed) {
            return Search::Aborted;
        }
        for value in 1..=9 {
            self.attempts += 1;
            if !grid.is_valid_placement(row, col, value) {
                continue;
            }
            grid.cells[row][col] = value;
            match self.search(grid) {
                Search::Done => return Search::Done,
                Search::Aborted => return Search::Aborted,
                // undo the tentative placement before the next candidate
                Search::Exhausted => grid.cells[row][col] = EMPTY,
            }
        }
        Search::Exhausted
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
