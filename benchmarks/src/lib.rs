//! Shared instances for slider benchmark suites.

use slider_kernel::board::EightPuzzleBoard;

/// Labelled start boards by optimal move count.
pub const INSTANCES: [(&str, &str); 3] = [
    ("depth_03", "142035678"),
    ("depth_08", "142658730"),
    ("depth_26", "724506831"),
];

/// Parse a benchmark start board.
///
/// # Panics
///
/// Panics if `start` is not a valid board. Benchmark setup failures are fatal.
#[must_use]
pub fn board(start: &str) -> EightPuzzleBoard {
    start.parse().expect("benchmark board must parse")
}
