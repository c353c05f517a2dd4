//! Instances and path checks shared by the lock tests and `solve_fixture`.

use slider_kernel::board::EightPuzzleBoard;
use slider_kernel::moves::Move;
use slider_search::path::{PathStepV1, StepLabelV1};
use slider_search::policy::SearchPolicyV1;
use slider_search::search::{search, SearchResultV1};
use slider_search::strategy::StrategyV1;

/// Solvable start boards, shortest first (2, 3, 3 and 8 moves).
pub const SOLVABLE_STARTS: [&str; 4] = ["312645078", "142035678", "125340678", "142658730"];

/// A solvable board 26 moves from the goal.
pub const DEEP_START: &str = "724506831";

/// The goal with tiles 1 and 2 swapped: opposite parity, never solvable.
pub const UNSOLVABLE_START: &str = "021345678";

/// Number of boards in one parity class: 9! / 2.
pub const PARITY_CLASS_SIZE: u64 = 181_440;

/// Run `strategy` from `start` to the standard goal under the default policy.
///
/// # Panics
///
/// Panics if `start` does not parse or the search errors. Test-only.
#[must_use]
pub fn run(start: &str, strategy: StrategyV1) -> SearchResultV1<EightPuzzleBoard, Move> {
    run_with(start, strategy, &SearchPolicyV1::default())
}

/// Like [`run`] with an explicit policy.
///
/// # Panics
///
/// Panics if `start` does not parse or the search errors. Test-only.
#[must_use]
pub fn run_with(
    start: &str,
    strategy: StrategyV1,
    policy: &SearchPolicyV1,
) -> SearchResultV1<EightPuzzleBoard, Move> {
    let start: EightPuzzleBoard = start.parse().unwrap();
    search(start, &EightPuzzleBoard::goal(), strategy, policy).unwrap()
}

/// Assert that each step of `path` is a legal move from the previous state
/// and that only the first step carries the start label.
///
/// # Panics
///
/// Panics on the first illegal transition.
pub fn assert_connected(path: &[PathStepV1<EightPuzzleBoard, Move>]) {
    let Some((first, rest)) = path.split_first() else {
        panic!("empty path");
    };
    assert_eq!(first.label, StepLabelV1::Start);

    let mut previous = first.state;
    for step in rest {
        let StepLabelV1::Move(mv) = step.label else {
            panic!("start label after first step at {}", step.state);
        };
        assert_eq!(
            previous.successor(mv),
            Some(step.state),
            "{mv} from {previous} does not yield {}",
            step.state
        );
        previous = step.state;
    }
}
