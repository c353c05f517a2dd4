//! Slider Harness: command-line orchestration for the search crate.
//!
//! The harness parses a start board, runs one named strategy toward the
//! standard goal and renders either a human summary or the canonical JSON
//! report.
//!
//! The harness does NOT implement search logic; it delegates to
//! `slider_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod runner;
