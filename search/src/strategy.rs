//! Strategy identifiers and their parsing.

use std::str::FromStr;

use crate::error::SearchError;
use crate::heuristic::HeuristicV1;

/// One of the four search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyV1 {
    /// `bfs`
    BreadthFirst,
    /// `ucost`
    UniformCost,
    /// `greedy-<h>`
    Greedy(HeuristicV1),
    /// `astar-<h>`
    AStar(HeuristicV1),
}

impl StrategyV1 {
    /// Every strategy identifier accepted by [`StrategyV1::parse`].
    pub const ALL: [StrategyV1; 8] = [
        StrategyV1::BreadthFirst,
        StrategyV1::UniformCost,
        StrategyV1::Greedy(HeuristicV1::Misplaced),
        StrategyV1::Greedy(HeuristicV1::Manhattan),
        StrategyV1::Greedy(HeuristicV1::WeightedManhattan),
        StrategyV1::AStar(HeuristicV1::Misplaced),
        StrategyV1::AStar(HeuristicV1::Manhattan),
        StrategyV1::AStar(HeuristicV1::WeightedManhattan),
    ];

    /// Parse an identifier: exact `bfs` / `ucost`, or `greedy-` / `astar-`
    /// followed by a heuristic suffix.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownStrategy`] for anything else, including
    /// a known prefix with an unknown heuristic.
    pub fn parse(name: &str) -> Result<Self, SearchError> {
        let unknown = || SearchError::UnknownStrategy {
            name: name.to_string(),
        };
        match name {
            "bfs" => Ok(Self::BreadthFirst),
            "ucost" => Ok(Self::UniformCost),
            _ => {
                if let Some(suffix) = name.strip_prefix("greedy-") {
                    HeuristicV1::from_suffix(suffix)
                        .map(Self::Greedy)
                        .ok_or_else(unknown)
                } else if let Some(suffix) = name.strip_prefix("astar-") {
                    HeuristicV1::from_suffix(suffix)
                        .map(Self::AStar)
                        .ok_or_else(unknown)
                } else {
                    Err(unknown())
                }
            }
        }
    }

    /// The heuristic this strategy orders by, if any.
    #[must_use]
    pub fn heuristic(self) -> Option<HeuristicV1> {
        match self {
            Self::BreadthFirst | Self::UniformCost => None,
            Self::Greedy(h) | Self::AStar(h) => Some(h),
        }
    }
}

impl FromStr for StrategyV1 {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for StrategyV1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BreadthFirst => f.write_str("bfs"),
            Self::UniformCost => f.write_str("ucost"),
            Self::Greedy(h) => write!(f, "greedy-{h}"),
            Self::AStar(h) => write!(f, "astar-{h}"),
        }
    }
}
