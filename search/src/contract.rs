//! State space contract trait.

/// A problem the search engine can explore.
///
/// # Contract
///
/// - `successors` must be finite and deterministic: same state → same
///   successors in the same order. The order, together with the frontier
///   tie-break, decides which of several optimal paths is returned.
/// - `identity_bytes` must be injective over states the engine should
///   distinguish: two states are the same search node exactly when their
///   identity bytes are equal.
/// - `heuristic` must never overestimate the true remaining move count if
///   the caller needs optimal paths. The engine does not check this.
/// - Every successor is one unit-cost move away from its parent.
///
/// Violating the contract (non-terminating enumeration, inconsistent
/// identity bytes) is a caller bug; the engine does not guard against it.
pub trait StateSpace {
    /// Immutable state value. Every move produces a new one.
    type State: Clone + Eq;

    /// Stable identity encoding of `state`, hashed into the dedup key.
    fn identity_bytes(&self, state: &Self::State) -> Vec<u8>;

    /// Estimated number of moves still needed to reach a goal.
    fn heuristic(&self, state: &Self::State) -> u64;

    /// All states reachable from `state` in exactly one move.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;

    /// Whether `state` is a goal.
    fn is_goal(&self, state: &Self::State) -> bool;
}
