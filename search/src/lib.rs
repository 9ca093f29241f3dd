//! Nutsort Search: deterministic A* over any [`contract::StateSpace`].
//!
//! This crate depends only on `nutsort_kernel` (for fingerprint hashing);
//! it does NOT depend on `nutsort_harness` or on any concrete puzzle.
//!
//! # Crate dependency graph
//!
//! ```text
//! nutsort_kernel  ←  nutsort_search  ←  nutsort_harness
//! (state, moves,     (frontier, nodes,    (worlds, runner, CLI)
//!  hashing)           A* loop)
//! ```
//!
//! # Key types
//!
//! - [`StateSpace`] -- successors, goal test, heuristic, identity bytes
//! - [`SearchNodeV1`] -- immutable node with deterministic frontier key
//! - [`SearchPolicyV1`] -- optional expansion budget
//! - [`SearchOutcomeV1`] -- solved path, unsolvable, or budget exhausted
//! - [`SearchStatsV1`] -- counters and termination reason for one run

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;

pub use contract::StateSpace;
pub use node::SearchNodeV1;
pub use policy::SearchPolicyV1;
pub use search::{search, solve, SearchOutcomeV1, SearchResult};
pub use stats::SearchStatsV1;
