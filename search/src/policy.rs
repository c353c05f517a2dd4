//! Search policy types.

use crate::error::SearchError;

/// Default expansion ceiling.
///
/// Above 9!/2 = 181,440, the size of one 8-puzzle parity class, so an
/// unsolvable instance exhausts its frontier before the ceiling trips.
pub const DEFAULT_MAX_EXPANSIONS: u64 = 200_000;

/// Search budget configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicyV1 {
    /// Hard cap on node expansions, checked before every pop.
    pub max_expansions: u64,
}

impl SearchPolicyV1 {
    /// Validate the policy before any search step is taken.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }
}
