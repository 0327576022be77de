//! Reads boards in the plain-text puzzle format: the side length `n`
//! followed by `n * n` tiles in row-major order, all whitespace separated.
//! The output of `Board`'s `Display` impl parses back to the same board.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::board::{Board, MAX_DIMENSION, MIN_DIMENSION};
use crate::error::{BoardError, LoadError};

pub fn parse_board(input: &str) -> Result<Board, LoadError> {
    let mut tokens = input.split_whitespace().enumerate();

    let (_, first) = tokens.next().ok_or(LoadError::Empty)?;
    let size = parse_token(0, first)? as usize;
    // Reject bad sizes before trying to collect a huge grid.
    if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&size) {
        return Err(BoardError::InvalidDimension(size).into());
    }

    let expected = size * size;
    let mut tiles = Vec::with_capacity(expected);
    for (index, token) in tokens.by_ref().take(expected) {
        tiles.push(parse_token(index, token)?);
    }
    if tiles.len() < expected {
        return Err(LoadError::MissingTiles {
            expected,
            found: tiles.len(),
        });
    }
    if let Some((_, extra)) = tokens.next() {
        return Err(LoadError::TrailingInput(extra.to_string()));
    }

    let rows: Vec<&[u32]> = tiles.chunks(size).collect();
    Ok(Board::new(&rows)?)
}

pub fn read_board<R: Read>(mut reader: R) -> Result<Board, LoadError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_board(&input)
}

pub fn load_board<P: AsRef<Path>>(path: P) -> Result<Board, LoadError> {
    let input = fs::read_to_string(path)?;
    parse_board(&input)
}

fn parse_token(index: usize, token: &str) -> Result<u32, LoadError> {
    token.parse().map_err(|_| LoadError::InvalidToken {
        index,
        token: token.to_string(),
    })
}
