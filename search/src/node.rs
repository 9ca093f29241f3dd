//! Search node, frontier key, and per-state metadata record.

use nutsort_kernel::proof::hash::ContentHash;

/// An immutable search node.
///
/// Nodes live in an arena indexed by `node_id`. Rediscovering a state along
/// a cheaper path creates a new node; older nodes for the same state become
/// stale and are skipped when their frontier entries surface.
#[derive(Debug, Clone)]
pub struct SearchNodeV1<S> {
    /// Arena index, assigned in creation order.
    pub node_id: u64,
    /// Parent node ID (`None` for root).
    pub parent_id: Option<u64>,
    /// Full immutable state at this node.
    pub state: S,
    /// Canonical hash of the state's identity bytes (dedup key).
    pub state_fingerprint: ContentHash,
    /// Cumulative path cost (+1 per move).
    pub g_cost: u64,
    /// Heuristic estimate from the state space.
    pub h_cost: u64,
    /// Global insertion counter for deterministic tie-breaking.
    pub creation_order: u64,
}

impl<S> SearchNodeV1<S> {
    /// Compute `f_cost = g_cost + h_cost` (the frontier ordering key).
    #[must_use]
    pub fn f_cost(&self) -> u64 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

/// The frontier ordering key: `(f_cost, creation_order)`.
///
/// Lower `f_cost` first; on ties the earlier-inserted entry wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: u64,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

impl<S> From<&SearchNodeV1<S>> for FrontierKey {
    fn from(node: &SearchNodeV1<S>) -> Self {
        Self {
            f_cost: node.f_cost(),
            creation_order: node.creation_order,
        }
    }
}

/// Engine-owned metadata for one distinct state, keyed by fingerprint.
///
/// Created on first discovery; `g_cost`/`node_id` are rewritten whenever a
/// cheaper path is found; frozen once `finalized` is set. A popped node whose
/// id differs from `node_id` has been superseded and is discarded as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateRecordV1 {
    /// Best known cost from the root.
    pub g_cost: u64,
    /// Node carrying the best known path (its `parent_id` is the parent link).
    pub node_id: u64,
    /// Expanded; never re-expanded or improved again.
    pub finalized: bool,
}
