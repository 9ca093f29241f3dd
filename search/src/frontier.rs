//! Best-first frontier (open set).
//!
//! Holds `(FrontierKey, node_id)` pairs only; nodes themselves live in the
//! search arena. Entries are never removed early: stale entries surface in
//! key order and the search loop discards them.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::FrontierKey;

/// A frontier entry.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest `f_cost` first).
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node_id: u64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority frontier keyed by [`FrontierKey`].
///
/// `creation_order` is unique per entry, so the ordering is total and pops
/// are fully deterministic.
pub struct BestFirstFrontier {
    heap: BinaryHeap<FrontierEntry>,
    high_water: u64,
}

impl BestFirstFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            high_water: 0,
        }
    }

    /// Push an entry for `node_id`.
    pub fn push(&mut self, key: FrontierKey, node_id: u64) {
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node_id,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the best (lowest key) entry.
    #[must_use]
    pub fn pop(&mut self) -> Option<(FrontierKey, u64)> {
        self.heap.pop().map(|e| (e.key.0, e.node_id))
    }

    /// Current frontier size, stale entries included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl Default for BestFirstFrontier {
    fn default() -> Self {
        Self::new()
    }
}
