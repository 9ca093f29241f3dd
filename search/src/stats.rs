//! Per-run search statistics and termination reason.
//!
//! Serialized with `serde_json` (sorted keys). Two runs of the same search
//! produce byte-identical stats.

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// A goal node was popped from the frontier.
    GoalReached { node_id: u64, g_cost: u64 },
    /// The frontier emptied: no reachable goal exists.
    FrontierExhausted,
    /// The policy's expansion cap was hit before a goal was popped.
    ExpansionBudgetExceeded,
}

/// Counters for one search invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatsV1 {
    /// Fingerprint of the root state.
    pub root_state_fingerprint: String,
    /// Nodes finalized and expanded.
    pub total_expansions: u64,
    /// Nodes created (root + every successor that won a g-score).
    pub total_nodes_created: u64,
    /// Successors dropped because they were finalized or not cheaper.
    pub total_duplicates_suppressed: u64,
    /// Successors that lowered an already-known, unfinalized g-score.
    pub total_path_improvements: u64,
    /// Frontier entries discarded on pop because their state was finalized.
    pub total_stale_pops: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReasonV1,
}

impl SearchStatsV1 {
    /// Convert to a `serde_json::Value`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "frontier_high_water": self.frontier_high_water,
            "root_state_fingerprint": self.root_state_fingerprint,
            "termination_reason": termination_reason_to_json(&self.termination_reason),
            "total_duplicates_suppressed": self.total_duplicates_suppressed,
            "total_expansions": self.total_expansions,
            "total_nodes_created": self.total_nodes_created,
            "total_path_improvements": self.total_path_improvements,
            "total_stale_pops": self.total_stale_pops,
        })
    }
}

/// Stable string tag for a termination reason.
#[must_use]
pub fn termination_reason_str(r: &TerminationReasonV1) -> &'static str {
    match r {
        TerminationReasonV1::GoalReached { .. } => "goal_reached",
        TerminationReasonV1::FrontierExhausted => "frontier_exhausted",
        TerminationReasonV1::ExpansionBudgetExceeded => "expansion_budget_exceeded",
    }
}

fn termination_reason_to_json(r: &TerminationReasonV1) -> serde_json::Value {
    match r {
        TerminationReasonV1::GoalReached { node_id, g_cost } => {
            serde_json::json!({
                "g_cost": g_cost,
                "node_id": node_id,
                "type": termination_reason_str(r),
            })
        }
        TerminationReasonV1::FrontierExhausted | TerminationReasonV1::ExpansionBudgetExceeded => {
            serde_json::json!({"type": termination_reason_str(r)})
        }
    }
}
