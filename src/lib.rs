pub mod board;
pub mod solver;
pub mod text;

pub use board::{Board, Grid, EMPTY};
pub use solver::{Outcome, Solver};
pub use text::ParseError;
