//! Harness runner: parses a board, runs the search, renders the outcome.
//!
//! # Pipeline
//!
//! ```text
//! parse start → parity check (warn only) → solve() → render_summary() | report JSON
//! ```
//!
//! The runner never implements search logic; it delegates to `slider_search`.

use std::path::Path;

use tracing::{info, warn};

use slider_kernel::board::{BoardError, EightPuzzleBoard};
use slider_kernel::moves::Move;
use slider_search::error::SearchError;
use slider_search::policy::SearchPolicyV1;
use slider_search::report::ReportError;
use slider_search::search::{solve, SearchResultV1, TerminationReasonV1};

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The start board did not parse.
    Board(BoardError),
    /// The search rejected its inputs or failed internally.
    Search(SearchError),
    /// The report could not be rendered.
    Report(ReportError),
    /// Writing the report failed.
    Io { detail: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Board(e) => write!(f, "invalid start board: {e}"),
            Self::Search(e) => write!(f, "search failed: {e}"),
            Self::Report(e) => write!(f, "{e}"),
            Self::Io { detail } => write!(f, "report write failed: {detail}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<BoardError> for RunError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<ReportError> for RunError {
    fn from(e: ReportError) -> Self {
        Self::Report(e)
    }
}

/// One solved (or unsolved) puzzle run.
#[derive(Debug, Clone)]
pub struct SolveRunV1 {
    pub start: EightPuzzleBoard,
    pub goal: EightPuzzleBoard,
    pub result: SearchResultV1<EightPuzzleBoard, Move>,
}

/// Parse a start board.
///
/// # Errors
///
/// Returns [`RunError::Board`] if `start` is not a valid board.
pub fn parse_start(start: &str) -> Result<EightPuzzleBoard, RunError> {
    Ok(start.parse()?)
}

/// Solve `start` toward the standard goal `012345678` with `method`.
///
/// A start board in the other parity class is still searched; the run ends
/// with an exhausted frontier. A warning is logged up front.
///
/// # Errors
///
/// Returns [`RunError::Search`] for an unknown `method` or an invalid policy.
pub fn solve_board(
    start: EightPuzzleBoard,
    method: &str,
    policy: &SearchPolicyV1,
) -> Result<SolveRunV1, RunError> {
    let goal = EightPuzzleBoard::goal();
    if !start.same_parity(&goal) {
        warn!(%start, %goal, "start and goal differ in parity; no solution exists");
    }

    let result = solve(start, &goal, method, policy)?;
    info!(
        %start,
        method,
        solved = result.is_goal_reached(),
        expanded = result.expanded_count,
        "run complete"
    );
    Ok(SolveRunV1 {
        start,
        goal,
        result,
    })
}

/// [`parse_start`] followed by [`solve_board`].
///
/// # Errors
///
/// Returns [`RunError::Board`] if `start` does not parse and
/// [`RunError::Search`] for an unknown `method` or an invalid policy.
pub fn solve_puzzle(
    start: &str,
    method: &str,
    policy: &SearchPolicyV1,
) -> Result<SolveRunV1, RunError> {
    solve_board(parse_start(start)?, method, policy)
}

/// Human-readable summary of a result.
///
/// ```text
/// found solution of length 4, cost 26
///   start 142035678
///   left  142305678
///   ...
/// 7 states placed on frontier, 4 states expanded
/// ```
#[must_use]
pub fn render_summary(result: &SearchResultV1<EightPuzzleBoard, Move>) -> String {
    let mut lines = Vec::new();
    match &result.solution {
        Some(solution) => {
            lines.push(format!(
                "found solution of length {}, cost {}",
                solution.path.len(),
                solution.path_cost
            ));
            for step in &solution.path {
                lines.push(format!("  {:5} {}", step.label, step.state));
            }
        }
        None => match result.termination {
            TerminationReasonV1::ExpansionBudgetExceeded => {
                lines.push("no solution found (expansion budget exceeded)".to_string());
            }
            _ => lines.push("no solution found".to_string()),
        },
    }
    lines.push(format!(
        "{} states placed on frontier, {} states expanded",
        result.frontier_count, result.expanded_count
    ));
    lines.join("\n")
}

/// Write the canonical JSON report of `result` to `path`.
///
/// # Errors
///
/// Returns [`RunError::Report`] if rendering fails or [`RunError::Io`] if
/// the file cannot be written.
pub fn write_report(
    path: &Path,
    result: &SearchResultV1<EightPuzzleBoard, Move>,
) -> Result<(), RunError> {
    let bytes = result.to_canonical_json_bytes()?;
    std::fs::write(path, bytes).map_err(|e| RunError::Io {
        detail: format!("{}: {e}", path.display()),
    })
}
