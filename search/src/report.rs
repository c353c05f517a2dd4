//! Canonical JSON rendering and content digest of a search result.
//!
//! # Canonical form
//!
//! - Object keys sorted (`serde_json::Map` is a `BTreeMap` without the
//!   `preserve_order` feature).
//! - Compact separators, no trailing newline.
//! - Integers only.
//! - `path` and `path_cost` keys are omitted when the search failed.

use sha2::{Digest, Sha256};

use crate::contract::SearchStateV1;
use crate::search::{SearchResultV1, TerminationReasonV1};

/// Domain prefix for search report hashing.
pub const DOMAIN_SEARCH_REPORT: &[u8] = b"SLIDER::SEARCH_REPORT::V1\0";

/// Error rendering a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// JSON serialization failed.
    Serialize { detail: String },
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize { detail } => write!(f, "report serialization failed: {detail}"),
        }
    }
}

impl std::error::Error for ReportError {}

impl<S: SearchStateV1> SearchResultV1<S, S::Action> {
    /// Convert to a `serde_json::Value`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let mut obj = serde_json::json!({
            "expanded_count": self.expanded_count,
            "frontier_count": self.frontier_count,
            "strategy": self.strategy.to_string(),
            "termination": termination_str(self.termination),
        });
        if let Some(solution) = &self.solution {
            obj["path"] = solution
                .path
                .iter()
                .map(|step| {
                    serde_json::json!({
                        "action": step.label.to_string(),
                        "state": step.state.to_string(),
                    })
                })
                .collect();
            obj["path_cost"] = serde_json::json!(solution.path_cost);
        }
        obj
    }

    /// Serialize to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Serialize`] if `serde_json` fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, ReportError> {
        serde_json::to_vec(&self.to_json_value()).map_err(|e| ReportError::Serialize {
            detail: e.to_string(),
        })
    }

    /// Content digest over the canonical bytes: `"sha256:<hex>"`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Serialize`] if `serde_json` fails.
    pub fn digest(&self) -> Result<String, ReportError> {
        let bytes = self.to_canonical_json_bytes()?;
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_SEARCH_REPORT);
        hasher.update(&bytes);
        Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
    }
}

fn termination_str(t: TerminationReasonV1) -> &'static str {
    match t {
        TerminationReasonV1::GoalReached => "goal_reached",
        TerminationReasonV1::FrontierExhausted => "frontier_exhausted",
        TerminationReasonV1::ExpansionBudgetExceeded => "expansion_budget_exceeded",
    }
}
