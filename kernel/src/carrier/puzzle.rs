//! `PuzzleV1`: a puzzle instance (shared peg capacity + initial state).

use crate::carrier::pegstate::PegStateV1;
use crate::proof::canon::canonical_json_bytes;
use crate::proof::hash::{canonical_hash, ContentHash};
use crate::proof::hash_domain::HashDomain;

/// Typed failure for puzzle construction. Fail-closed: no instance is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Capacity must be positive.
    ZeroCapacity,
    /// A peg holds more nuts than the shared capacity allows.
    PegOverCapacity {
        peg: usize,
        len: usize,
        capacity: usize,
    },
}

impl std::fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "peg capacity must be positive"),
            Self::PegOverCapacity { peg, len, capacity } => {
                write!(f, "peg {peg} holds {len} nuts, capacity is {capacity}")
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

/// A validated puzzle instance.
///
/// Invariant: `capacity > 0` and every peg of `initial` has at most
/// `capacity` nuts. Moves preserve the invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleV1 {
    capacity: usize,
    initial: PegStateV1,
}

impl PuzzleV1 {
    /// Validate and build a puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::ZeroCapacity`] or
    /// [`PuzzleError::PegOverCapacity`] (first offending peg).
    pub fn new(capacity: usize, initial: PegStateV1) -> Result<Self, PuzzleError> {
        if capacity == 0 {
            return Err(PuzzleError::ZeroCapacity);
        }
        if let Some((peg, len)) = initial
            .pegs()
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len > capacity)
        {
            return Err(PuzzleError::PegOverCapacity { peg, len, capacity });
        }
        Ok(Self { capacity, initial })
    }

    /// Shared capacity of every peg.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The initial configuration.
    #[must_use]
    pub fn initial(&self) -> &PegStateV1 {
        &self.initial
    }

    /// JSON payload form: `{"capacity": N, "pegs": [[code, ...], ...]}`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let pegs: Vec<Vec<u8>> = self
            .initial
            .pegs()
            .iter()
            .map(|peg| peg.iter().map(|nut| nut.code()).collect())
            .collect();
        serde_json::json!({
            "capacity": self.capacity,
            "pegs": pegs,
        })
    }

    /// Canonical JSON bytes of the payload form.
    #[must_use]
    pub fn canonical_bytes(&self) -> Vec<u8> {
        // Only integers are emitted by `to_json_value`, so canonicalization
        // cannot fail here.
        canonical_json_bytes(&self.to_json_value()).unwrap_or_default()
    }

    /// Content digest of the puzzle, stable across runs and processes.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        canonical_hash(HashDomain::Puzzle, &self.canonical_bytes())
    }
}
