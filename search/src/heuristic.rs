//! Heuristic evaluators.
//!
//! Each heuristic is a pure function of `(state, goal)`. Nothing is cached
//! between calls. All three are admissible and consistent when a move of
//! tile `t` costs `t²`, which is what [`crate::path::step_cost`] charges.

use crate::contract::SearchStateV1;

/// Selector for one of the three heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeuristicV1 {
    /// `h1`: number of non-blank tiles out of place.
    Misplaced,
    /// `h2`: sum of Manhattan distances of the non-blank tiles.
    Manhattan,
    /// `h3`: Manhattan distance weighted by the square of the tile value.
    WeightedManhattan,
}

impl HeuristicV1 {
    /// Parse a heuristic suffix (`h1`, `h2`, `h3`).
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "h1" => Some(Self::Misplaced),
            "h2" => Some(Self::Manhattan),
            "h3" => Some(Self::WeightedManhattan),
            _ => None,
        }
    }

    /// The suffix this heuristic is selected by.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Misplaced => "h1",
            Self::Manhattan => "h2",
            Self::WeightedManhattan => "h3",
        }
    }

    /// Estimate the remaining cost from `state` to `goal`.
    #[must_use]
    pub fn evaluate<S: SearchStateV1>(self, state: &S, goal: &S) -> u64 {
        match self {
            Self::Misplaced => misplaced(state, goal),
            Self::Manhattan => manhattan(state, goal),
            Self::WeightedManhattan => weighted_manhattan(state, goal),
        }
    }
}

impl std::fmt::Display for HeuristicV1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Non-blank tile values of the grid.
fn tiles<S: SearchStateV1>(state: &S) -> impl Iterator<Item = u8> {
    (1..state.tile_count()).filter_map(|t| u8::try_from(t).ok())
}

fn distance<S: SearchStateV1>(state: &S, goal: &S, tile: u8) -> u64 {
    match (state.find(tile), goal.find(tile)) {
        (Some((r, c)), Some((gr, gc))) => (r.abs_diff(gr) + c.abs_diff(gc)) as u64,
        _ => 0,
    }
}

/// h1: count of tiles, excluding the blank, not on their goal cell.
#[must_use]
pub fn misplaced<S: SearchStateV1>(state: &S, goal: &S) -> u64 {
    tiles(state)
        .filter(|&t| state.find(t) != goal.find(t))
        .count() as u64
}

/// h2: sum of Manhattan distances between each tile and its goal cell.
#[must_use]
pub fn manhattan<S: SearchStateV1>(state: &S, goal: &S) -> u64 {
    tiles(state).map(|t| distance(state, goal, t)).sum()
}

/// h3: like h2, with each distance weighted by `tile²`.
#[must_use]
pub fn weighted_manhattan<S: SearchStateV1>(state: &S, goal: &S) -> u64 {
    tiles(state)
        .map(|t| u64::from(t) * u64::from(t) * distance(state, goal, t))
        .sum()
}
