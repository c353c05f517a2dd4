//! `EightPuzzleBoard`: an immutable 3×3 sliding-tile state.
//!
//! Cells are stored row-major with row 0 at the top. Tile `0` is the blank.
//! A board is always a permutation of `0..9`; [`EightPuzzleBoard::from_tiles`]
//! and the `FromStr` impl are the only constructors and both validate it.

use std::str::FromStr;

use crate::moves::Move;

/// Side length of the grid.
pub const SIDE: usize = 3;

/// Number of cells, including the blank.
pub const CELLS: usize = SIDE * SIDE;

/// The blank tile value.
pub const BLANK: u8 = 0;

/// Typed failure for board construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Input did not contain exactly [`CELLS`] cells.
    WrongLength { expected: usize, actual: usize },
    /// A character was not an ASCII digit.
    InvalidCharacter { index: usize, found: char },
    /// A tile value was outside `0..CELLS`.
    TileOutOfRange { index: usize, tile: u8 },
    /// A tile value appeared more than once.
    DuplicateTile { tile: u8 },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "board must have {expected} cells, got {actual}")
            }
            Self::InvalidCharacter { index, found } => {
                write!(f, "invalid character {found:?} at cell {index}")
            }
            Self::TileOutOfRange { index, tile } => {
                write!(f, "tile {tile} at cell {index} is out of range")
            }
            Self::DuplicateTile { tile } => write!(f, "tile {tile} appears more than once"),
        }
    }
}

impl std::error::Error for BoardError {}

/// An 8-puzzle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EightPuzzleBoard {
    tiles: [u8; CELLS],
    blank: usize,
}

impl EightPuzzleBoard {
    /// Build a board from row-major tiles.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if `tiles` is not a permutation of `0..CELLS`.
    pub fn from_tiles(tiles: [u8; CELLS]) -> Result<Self, BoardError> {
        let mut seen = [false; CELLS];
        let mut blank = 0;
        for (index, &tile) in tiles.iter().enumerate() {
            let slot = seen
                .get_mut(usize::from(tile))
                .ok_or(BoardError::TileOutOfRange { index, tile })?;
            if *slot {
                return Err(BoardError::DuplicateTile { tile });
            }
            *slot = true;
            if tile == BLANK {
                blank = index;
            }
        }
        Ok(Self { tiles, blank })
    }

    /// The solved board `012345678`.
    #[must_use]
    pub fn goal() -> Self {
        Self {
            tiles: [0, 1, 2, 3, 4, 5, 6, 7, 8],
            blank: 0,
        }
    }

    /// Row-major tiles.
    #[must_use]
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    /// Index of the blank cell.
    #[must_use]
    pub fn blank_index(&self) -> usize {
        self.blank
    }

    /// Tile at a row-major index, or `None` past the last cell.
    #[must_use]
    pub fn tile_at(&self, index: usize) -> Option<u8> {
        self.tiles.get(index).copied()
    }

    /// `(row, col)` of `tile`, or `None` if the value is not on the board.
    #[must_use]
    pub fn find(&self, tile: u8) -> Option<(usize, usize)> {
        self.tiles
            .iter()
            .position(|&t| t == tile)
            .map(|index| (index / SIDE, index % SIDE))
    }

    /// Apply a move, or `None` if it would push the blank off the grid.
    #[must_use]
    pub fn successor(&self, mv: Move) -> Option<Self> {
        let blank = self.blank_index();
        let (dr, dc) = mv.blank_offset();
        let row = (blank / SIDE).checked_add_signed(dr)?;
        let col = (blank % SIDE).checked_add_signed(dc)?;
        if row >= SIDE || col >= SIDE {
            return None;
        }
        let target = row * SIDE + col;
        let mut tiles = self.tiles;
        tiles.swap(blank, target);
        Some(Self {
            tiles,
            blank: target,
        })
    }

    /// Every legal `(move, board)` pair, in [`Move::ALL`] order.
    #[must_use]
    pub fn successors(&self) -> Vec<(Move, Self)> {
        Move::ALL
            .iter()
            .filter_map(|&mv| self.successor(mv).map(|next| (mv, next)))
            .collect()
    }

    /// Number of inverted pairs among the non-blank tiles.
    #[must_use]
    pub fn inversions(&self) -> usize {
        let tiles: Vec<u8> = self.tiles.iter().copied().filter(|&t| t != BLANK).collect();
        let mut count = 0;
        for (i, &a) in tiles.iter().enumerate() {
            count += tiles[i + 1..].iter().filter(|&&b| b < a).count();
        }
        count
    }

    /// Whether `other` is reachable from `self`.
    ///
    /// On an odd-width grid every slide preserves inversion parity, so two
    /// boards are mutually reachable iff their parities agree.
    #[must_use]
    pub fn same_parity(&self, other: &Self) -> bool {
        self.inversions() % 2 == other.inversions() % 2
    }
}

impl FromStr for EightPuzzleBoard {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actual = s.chars().count();
        if actual != CELLS {
            return Err(BoardError::WrongLength {
                expected: CELLS,
                actual,
            });
        }
        let mut tiles = [0u8; CELLS];
        for (index, ch) in s.chars().enumerate() {
            tiles[index] = ch
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(BoardError::InvalidCharacter { index, found: ch })?;
        }
        Self::from_tiles(tiles)
    }
}

impl std::fmt::Display for EightPuzzleBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &tile in &self.tiles {
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}
