//! Typed search errors.
//!
//! `SearchError` covers pre-flight failures (unknown strategy, invalid
//! policy) and frontier bookkeeping faults surfaced mid-run. Normal
//! terminations, including exhaustion and budget overrun, are reported via
//! [`crate::search::TerminationReasonV1`] inside an `Ok` result.

/// Failure of an [`crate::frontier::UpdatablePriorityQueue`] operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierError {
    /// `get` or `remove` on a task that is not live in the queue.
    NotFound,
    /// `pop` with no live task left.
    Empty,
}

impl std::fmt::Display for FrontierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => f.write_str("task not found in priority queue"),
            Self::Empty => f.write_str("pop from an empty priority queue"),
        }
    }
}

impl std::error::Error for FrontierError {}

/// Typed failure for a search invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The strategy identifier matched none of the known strategies.
    UnknownStrategy { name: String },
    /// The policy failed validation.
    InvalidPolicy { detail: String },
    /// The frontier reported an inconsistency. Always a logic bug.
    Frontier(FrontierError),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStrategy { name } => write!(f, "unknown search strategy: {name:?}"),
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
            Self::Frontier(err) => write!(f, "frontier bookkeeping failed: {err}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Frontier(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FrontierError> for SearchError {
    fn from(err: FrontierError) -> Self {
        Self::Frontier(err)
    }
}
