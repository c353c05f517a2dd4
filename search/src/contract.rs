//! Search state contract trait.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use slider_kernel::board::{EightPuzzleBoard, CELLS};
use slider_kernel::moves::Move;

/// Capability set the engine needs from a puzzle state.
///
/// # Contract
///
/// - Identity is by value: equal states must hash equally.
/// - `successors` must be deterministic (same state → same pairs in the
///   same order) and must not repeat an action.
/// - `blank_index`, `tile_at` and `find` describe one grid of
///   `tile_count()` cells, tile `0` being the blank. The step cost and the
///   heuristics read the board only through these accessors.
pub trait SearchStateV1: Clone + Eq + Hash + Debug + Display {
    /// Label of a transition between two states.
    type Action: Clone + Eq + Debug + Display;

    /// Enumerate `(action, resulting state)` pairs.
    fn successors(&self) -> Vec<(Self::Action, Self)>;

    /// Row-major index of the blank cell.
    fn blank_index(&self) -> usize;

    /// Tile at a row-major index, `None` past the last cell.
    fn tile_at(&self, index: usize) -> Option<u8>;

    /// `(row, col)` of a tile, `None` if it is not on the board.
    fn find(&self, tile: u8) -> Option<(usize, usize)>;

    /// Number of cells, blank included.
    fn tile_count(&self) -> usize;
}

impl SearchStateV1 for EightPuzzleBoard {
    type Action = Move;

    fn successors(&self) -> Vec<(Move, Self)> {
        EightPuzzleBoard::successors(self)
    }

    fn blank_index(&self) -> usize {
        EightPuzzleBoard::blank_index(self)
    }

    fn tile_at(&self, index: usize) -> Option<u8> {
        EightPuzzleBoard::tile_at(self, index)
    }

    fn find(&self, tile: u8) -> Option<(usize, usize)> {
        EightPuzzleBoard::find(self, tile)
    }

    fn tile_count(&self) -> usize {
        CELLS
    }
}
