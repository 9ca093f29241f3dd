//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Search outcomes
//! (solved, unsolvable, budget exhausted) are values in
//! [`crate::search::SearchOutcomeV1`], never errors.

/// Typed failure for pre-flight search validation.
///
/// Returned before any node is expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The search policy is self-contradictory.
    InvalidPolicy { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
