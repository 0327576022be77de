use thiserror::Error;

use crate::board::{MAX_DIMENSION, MIN_DIMENSION};

/// Errors raised while constructing a [`Board`](crate::board::Board).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board dimension {0} is outside {}..={}", MIN_DIMENSION, MAX_DIMENSION)]
    InvalidDimension(usize),

    #[error("row {row} has {len} tiles but the board is {dimension} wide")]
    NotSquare {
        row: usize,
        len: usize,
        dimension: usize,
    },

    /// No row holds two adjacent non-blank tiles. Only a grid with repeated
    /// blanks can get here.
    #[error("board has no two adjacent non-blank tiles to form a twin")]
    NoTwin,
}

/// Errors raised while reading a board from text.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read puzzle: {0}")]
    Io(#[from] std::io::Error),

    #[error("puzzle input is empty")]
    Empty,

    #[error("token {index} ({token:?}) is not a non-negative integer")]
    InvalidToken { index: usize, token: String },

    #[error("expected {expected} tiles but found {found}")]
    MissingTiles { expected: usize, found: usize },

    #[error("unexpected input after the last tile: {0:?}")]
    TrailingInput(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}
