//! Shared fixtures for the slider lock tests.

pub mod puzzle_test_helpers;
