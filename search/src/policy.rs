//! Search policy types.

use crate::error::SearchError;

/// Search budget configuration.
///
/// The default policy is unbounded: the search runs until it pops a goal or
/// exhausts the reachable state space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchPolicyV1 {
    /// Hard cap on node expansions. Hitting it yields
    /// [`crate::search::SearchOutcomeV1::BudgetExhausted`], which says
    /// nothing about solvability.
    pub max_expansions: Option<u64>,
}

impl SearchPolicyV1 {
    /// Policy with an expansion cap.
    #[must_use]
    pub fn with_max_expansions(max_expansions: u64) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }

    /// Validate the policy before any search step is taken.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be positive when set".into(),
            });
        }
        Ok(())
    }

    /// Policy as a JSON value (sorted keys on serialization).
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({ "max_expansions": self.max_expansions })
    }
}
