//! Optimal solver for the n-by-n sliding tile puzzle.
//!
//! Build a [`Board`] from a grid of tiles (or parse one with [`loader`]),
//! hand it to [`Solver::new`], then read back whether it is solvable, the
//! minimum number of moves and the boards along one optimal path.

pub mod board;
pub mod error;
pub mod loader;
pub mod solver;

pub use board::{Board, Move};
pub use error::{BoardError, LoadError};
pub use solver::Solver;
