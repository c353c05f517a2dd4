//! Slider Kernel: the sliding-tile domain behind the search engine.
//!
//! # API Surface
//!
//! - [`board::EightPuzzleBoard`] -- immutable 3×3 state, parsed from a digit string
//! - [`moves::Move`] -- the closed set of slide labels
//!
//! The kernel knows nothing about search. `slider_search` adapts the board
//! to its state contract.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod moves;
