//! Search entry points and the A* expansion loop.

use std::collections::HashMap;

use log::{debug, trace};
use nutsort_kernel::proof::hash::{canonical_hash, ContentHash};
use nutsort_kernel::proof::hash_domain::HashDomain;

use crate::contract::StateSpace;
use crate::error::SearchError;
use crate::frontier::BestFirstFrontier;
use crate::node::{FrontierKey, SearchNodeV1, StateRecordV1};
use crate::policy::SearchPolicyV1;
use crate::stats::{termination_reason_str, SearchStatsV1, TerminationReasonV1};

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcomeV1<S> {
    /// Path from the initial state to a goal, both ends included.
    Solved { path: Vec<S> },
    /// The reachable state space holds no goal.
    Unsolvable,
    /// The expansion cap was hit first. Solvability is unknown.
    BudgetExhausted,
}

impl<S> SearchOutcomeV1<S> {
    /// The solution path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&[S]> {
        match self {
            Self::Solved { path } => Some(path),
            Self::Unsolvable | Self::BudgetExhausted => None,
        }
    }

    /// Consume the outcome, keeping only the solution path.
    #[must_use]
    pub fn into_path(self) -> Option<Vec<S>> {
        match self {
            Self::Solved { path } => Some(path),
            Self::Unsolvable | Self::BudgetExhausted => None,
        }
    }
}

/// Result of a search execution: the outcome plus its statistics.
#[derive(Debug, Clone)]
pub struct SearchResult<S> {
    pub outcome: SearchOutcomeV1<S>,
    pub stats: SearchStatsV1,
}

impl<S> SearchResult<S> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, SearchOutcomeV1::Solved { .. })
    }
}

/// Find a shortest path from `initial` to a goal of `space`.
///
/// Returns `None` when no goal is reachable. Paths are optimal only if the
/// heuristic never overestimates (see [`StateSpace`]).
pub fn solve<W>(space: &W, initial: W::State) -> Option<Vec<W::State>>
where
    W: StateSpace + ?Sized,
{
    // The default policy is unbounded and always passes validation.
    search(space, initial, &SearchPolicyV1::default())
        .ok()?
        .outcome
        .into_path()
}

/// Run A* from `initial` under `policy`.
///
/// Frontier order is `(g + h, insertion counter)`; successors are taken in
/// the order the state space yields them. A state is finalized when first
/// expanded and never reopened.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] only for pre-flight policy
/// validation failures. Every search outcome, including "no solution", is
/// an `Ok` value.
pub fn search<W>(
    space: &W,
    initial: W::State,
    policy: &SearchPolicyV1,
) -> Result<SearchResult<W::State>, SearchError>
where
    W: StateSpace + ?Sized,
{
    policy.validate()?;

    let mut frontier = BestFirstFrontier::new();
    let mut nodes: Vec<SearchNodeV1<W::State>> = Vec::new();
    let mut records: HashMap<ContentHash, StateRecordV1> = HashMap::new();
    let mut next_creation_order: u64 = 0;
    let mut total_expansions: u64 = 0;
    let mut total_duplicates_suppressed: u64 = 0;
    let mut total_path_improvements: u64 = 0;
    let mut total_stale_pops: u64 = 0;

    let root_fp = fingerprint(space, &initial);
    let root_h = space.heuristic(&initial);
    debug!("search start: root={root_fp} h={root_h} policy={policy:?}");

    let root = SearchNodeV1 {
        node_id: 0,
        parent_id: None,
        state: initial,
        state_fingerprint: root_fp.clone(),
        g_cost: 0,
        h_cost: root_h,
        creation_order: next_creation_order,
    };
    next_creation_order += 1;
    records.insert(
        root_fp.clone(),
        StateRecordV1 {
            g_cost: 0,
            node_id: 0,
            finalized: false,
        },
    );
    frontier.push(FrontierKey::from(&root), root.node_id);
    nodes.push(root);

    let termination_reason = loop {
        let Some((key, node_id)) = frontier.pop() else {
            break TerminationReasonV1::FrontierExhausted;
        };
        let current = &nodes[slot(node_id)];

        // Every node's fingerprint was recorded when the node was created.
        let Some(record) = records.get_mut(&current.state_fingerprint) else {
            continue;
        };
        // Superseded by a cheaper node for the same state, or already expanded.
        if record.finalized || record.node_id != node_id {
            total_stale_pops += 1;
            continue;
        }

        if space.is_goal(&current.state) {
            break TerminationReasonV1::GoalReached {
                node_id,
                g_cost: current.g_cost,
            };
        }

        if policy
            .max_expansions
            .is_some_and(|max| total_expansions >= max)
        {
            break TerminationReasonV1::ExpansionBudgetExceeded;
        }

        record.finalized = true;
        total_expansions += 1;

        let g_cost = current.g_cost;
        let successors = space.successors(&current.state);
        trace!(
            "expand node={node_id} f={} g={g_cost} successors={}",
            key.f_cost,
            successors.len()
        );

        let tentative_g = g_cost.saturating_add(1);
        for successor in successors {
            let child_fp = fingerprint(space, &successor);
            let child_id = nodes.len() as u64;

            match records.get_mut(&child_fp) {
                Some(existing) if existing.finalized || tentative_g >= existing.g_cost => {
                    total_duplicates_suppressed += 1;
                    continue;
                }
                Some(existing) => {
                    total_path_improvements += 1;
                    existing.g_cost = tentative_g;
                    existing.node_id = child_id;
                }
                None => {
                    records.insert(
                        child_fp.clone(),
                        StateRecordV1 {
                            g_cost: tentative_g,
                            node_id: child_id,
                            finalized: false,
                        },
                    );
                }
            }

            let h_cost = space.heuristic(&successor);
            let child = SearchNodeV1 {
                node_id: child_id,
                parent_id: Some(node_id),
                state: successor,
                state_fingerprint: child_fp,
                g_cost: tentative_g,
                h_cost,
                creation_order: next_creation_order,
            };
            next_creation_order += 1;
            frontier.push(FrontierKey::from(&child), child_id);
            nodes.push(child);
        }
    };

    let stats = SearchStatsV1 {
        root_state_fingerprint: root_fp.as_str().to_string(),
        total_expansions,
        total_nodes_created: nodes.len() as u64,
        total_duplicates_suppressed,
        total_path_improvements,
        total_stale_pops,
        frontier_high_water: frontier.high_water(),
        termination_reason,
    };
    debug!(
        "search end: {} expansions={} nodes={} high_water={}",
        termination_reason_str(&termination_reason),
        stats.total_expansions,
        stats.total_nodes_created,
        stats.frontier_high_water
    );

    let outcome = match termination_reason {
        TerminationReasonV1::GoalReached { node_id, .. } => SearchOutcomeV1::Solved {
            path: reconstruct_path(&nodes, node_id)
                .into_iter()
                .map(|id| nodes[slot(id)].state.clone())
                .collect(),
        },
        TerminationReasonV1::FrontierExhausted => SearchOutcomeV1::Unsolvable,
        TerminationReasonV1::ExpansionBudgetExceeded => SearchOutcomeV1::BudgetExhausted,
    };

    Ok(SearchResult { outcome, stats })
}

/// Reconstruct the node-id path from root to `goal_node_id` by following
/// parent links.
#[must_use]
pub fn reconstruct_path<S>(nodes: &[SearchNodeV1<S>], goal_node_id: u64) -> Vec<u64> {
    let mut path = Vec::new();
    let mut current_id = Some(goal_node_id);

    while let Some(id) = current_id {
        path.push(id);
        current_id = nodes.get(slot(id)).and_then(|n| n.parent_id);
    }

    path.reverse();
    path
}

/// Dedup key of a state: domain-separated hash of its identity bytes.
fn fingerprint<W>(space: &W, state: &W::State) -> ContentHash
where
    W: StateSpace + ?Sized,
{
    canonical_hash(HashDomain::SearchNode, &space.identity_bytes(state))
}

/// Arena index of a node id. Ids are assigned from `nodes.len()`, so they
/// always fit in `usize`.
#[allow(clippy::cast_possible_truncation)]
fn slot(node_id: u64) -> usize {
    node_id as usize
}
