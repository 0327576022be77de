use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use crate::error::BoardError;

/// Smallest supported side length.
pub const MIN_DIMENSION: usize = 2;
/// Largest supported side length.
pub const MAX_DIMENSION: usize = 128;

/// The direction a tile slides into the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    /// Every move, in the order the blank travels up, down, left, right.
    pub const ALL: [Move; 4] = [Move::Down, Move::Up, Move::Right, Move::Left];

    /// Displacement of the blank as `(row, col)`.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (1, 0),
            Move::Left => (0, 1),
            Move::Down => (-1, 0),
            Move::Right => (0, -1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// An immutable n-by-n sliding puzzle configuration. `0` is the blank.
///
/// Every operation that "moves" a tile returns a new board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    tiles: Vec<u32>,
    blank_row: usize,
    blank_col: usize,
}

impl Board {
    /// Builds a board from rows of tiles, copying them.
    ///
    /// Fails when the side length is outside `MIN_DIMENSION..=MAX_DIMENSION`
    /// or when any row is not exactly as long as the board is tall. Tile
    /// values themselves are trusted to be a permutation of `0..n*n`.
    pub fn new<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        check_dimension(size)?;

        let mut tiles = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: values.len(),
                    dimension: size,
                });
            }
            tiles.extend_from_slice(values);
        }

        Ok(Self::from_tiles(size, tiles))
    }

    /// The solved board: `1..n*n` in row-major order with the blank last.
    pub fn goal(size: usize) -> Result<Self, BoardError> {
        check_dimension(size)?;

        let cells = (size * size) as u32;
        let tiles = (1..cells).chain(std::iter::once(0)).collect();
        Ok(Self::from_tiles(size, tiles))
    }

    /// A uniformly random arrangement of the tiles. Roughly half of these
    /// cannot be solved.
    pub fn shuffled<G: Rng + ?Sized>(size: usize, rng: &mut G) -> Result<Self, BoardError> {
        let mut tiles = Self::goal(size)?.tiles;
        tiles.shuffle(rng);
        Ok(Self::from_tiles(size, tiles))
    }

    /// Walks `steps` random slides away from the goal, never undoing the
    /// previous slide. The result is always solvable in at most `steps` moves.
    pub fn scrambled<G: Rng + ?Sized>(
        size: usize,
        steps: usize,
        rng: &mut G,
    ) -> Result<Self, BoardError> {
        let mut board = Self::goal(size)?;
        let mut last: Option<Move> = None;

        for _ in 0..steps {
            let options: Vec<(Move, Board)> = Move::ALL
                .iter()
                .filter(|&&dir| last.map_or(true, |prev| dir != prev.opposite()))
                .filter_map(|&dir| board.slide(dir).map(|next| (dir, next)))
                .collect();

            // Every cell has at least two neighbours, so one survives the filter.
            if let Some((dir, next)) = options.choose(rng).cloned() {
                board = next;
                last = Some(dir);
            }
        }

        Ok(board)
    }

    fn from_tiles(size: usize, tiles: Vec<u32>) -> Self {
        // A grid without a blank is malformed; park the blank at the origin
        // so the board stays usable rather than panicking.
        let blank = tiles.iter().position(|&tile| tile == 0).unwrap_or(0);

        Self {
            size,
            tiles,
            blank_row: blank / size,
            blank_col: blank % size,
        }
    }

    pub fn dimension(&self) -> usize {
        self.size
    }

    /// The tile at `(row, col)`.
    pub fn tile(&self, row: usize, col: usize) -> u32 {
        self.tiles[row * self.size + col]
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.tiles.chunks(self.size)
    }

    /// Position of the blank as `(row, col)`.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank_row, self.blank_col)
    }

    /// Number of tiles, blank excluded, that are not in their goal cell.
    pub fn hamming(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(index, &value)| value != 0 && value as usize != index + 1)
            .count()
    }

    /// Sum over all tiles, blank excluded, of the row and column distance to
    /// the goal cell. Never overestimates the moves left.
    pub fn manhattan(&self) -> usize {
        let mut distance = 0;
        for (index, &value) in self.tiles.iter().enumerate() {
            if value != 0 {
                let target = value as usize - 1;
                let (row, col) = (index / self.size, index % self.size);
                distance += row.abs_diff(target / self.size);
                distance += col.abs_diff(target % self.size);
            }
        }
        distance
    }

    pub fn is_goal(&self) -> bool {
        self.manhattan() == 0
    }

    /// The board after sliding a tile in direction `dir`, or `None` when no
    /// tile sits on that side of the blank.
    pub fn slide(&self, dir: Move) -> Option<Board> {
        let (dx, dy) = dir.as_offset();

        let new_row = self.blank_row as isize + dx;
        let new_col = self.blank_col as isize + dy;
        let bound = self.size as isize;

        if new_row < 0 || new_row >= bound || new_col < 0 || new_col >= bound {
            return None;
        }

        let (new_row, new_col) = (new_row as usize, new_col as usize);
        let mut tiles = self.tiles.clone();
        tiles.swap(
            self.blank_row * self.size + self.blank_col,
            new_row * self.size + new_col,
        );

        Some(Self {
            size: self.size,
            tiles,
            blank_row: new_row,
            blank_col: new_col,
        })
    }

    /// All boards one slide away: blank up, down, left, then right,
    /// skipping directions that leave the grid. Always two to four boards.
    pub fn neighbors(&self) -> Vec<Board> {
        Move::ALL.iter().filter_map(|&dir| self.slide(dir)).collect()
    }

    /// The move that turns `self` into `next`, if they are one slide apart.
    pub fn move_between(&self, next: &Board) -> Option<Move> {
        Move::ALL
            .iter()
            .copied()
            .find(|&dir| self.slide(dir).as_ref() == Some(next))
    }

    /// This board with the first pair of horizontally adjacent non-blank
    /// tiles (scanning rows top to bottom) exchanged.
    ///
    /// Exactly one of a board and its twin can reach the goal.
    pub fn twin(&self) -> Result<Board, BoardError> {
        for row in 0..self.size {
            for col in 0..self.size - 1 {
                let left = row * self.size + col;
                if self.tiles[left] != 0 && self.tiles[left + 1] != 0 {
                    let mut tiles = self.tiles.clone();
                    tiles.swap(left, left + 1);
                    return Ok(Self {
                        size: self.size,
                        tiles,
                        blank_row: self.blank_row,
                        blank_col: self.blank_col,
                    });
                }
            }
        }

        Err(BoardError::NoTwin)
    }
}

fn check_dimension(size: usize) -> Result<(), BoardError> {
    if (MIN_DIMENSION..=MAX_DIMENSION).contains(&size) {
        Ok(())
    } else {
        Err(BoardError::InvalidDimension(size))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.size)?;
        for row in self.rows() {
            for &val in row {
                write!(f, "{:2} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
