//! Slider Search: informed search over sliding-tile states.
//!
//! This crate provides the search layer. It depends only on
//! `slider_kernel`; it does NOT depend on `slider_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! slider_kernel  ←  slider_search  ←  slider_harness
//! (board, moves)    (frontier,         (runner, summary, CLI)
//!                    strategies)
//! ```
//!
//! # Key types
//!
//! - [`UpdatablePriorityQueue`](frontier::UpdatablePriorityQueue) -- frontier with decrease-key and lazy deletion
//! - [`SearchStateV1`](contract::SearchStateV1) -- capability set a puzzle state must provide
//! - [`StrategyV1`](strategy::StrategyV1) -- `bfs`, `ucost`, `greedy-h*`, `astar-h*`
//! - [`HeuristicV1`](heuristic::HeuristicV1) -- h1 / h2 / h3 evaluators
//! - [`SearchResultV1`](search::SearchResultV1) -- path, cost and counters of one run
//! - [`SearchPolicyV1`](policy::SearchPolicyV1) -- expansion ceiling

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod path;
pub mod policy;
pub mod report;
pub mod search;
pub mod strategy;
