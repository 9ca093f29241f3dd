//! Harness runner: solve a puzzle and package the result as a report.
//!
//! # Pipeline
//!
//! ```text
//! PuzzleV1 → NutsAndPegs world → search() → infer_move() per step
//!   → SolveReportV1 (canonical JSON, content-hashed)
//! ```
//!
//! The runner owns no search logic; it delegates to `nutsort_search` and
//! the kernel's move operator.

use log::info;

use nutsort_kernel::carrier::pegstate::PegStateV1;
use nutsort_kernel::carrier::puzzle::PuzzleV1;
use nutsort_kernel::operators::run_move::{infer_move, MoveV1};
use nutsort_kernel::proof::canon::{canonical_json_bytes, CanonError};
use nutsort_kernel::proof::hash::{canonical_hash, ContentHash};
use nutsort_kernel::proof::hash_domain::HashDomain;

use nutsort_search::error::SearchError;
use nutsort_search::policy::SearchPolicyV1;
use nutsort_search::search::{search, SearchOutcomeV1};
use nutsort_search::stats::SearchStatsV1;

use crate::worlds::nuts_and_pegs::NutsAndPegs;

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Search pre-flight validation failed.
    Search(SearchError),
    /// Two consecutive path states are not one legal move apart.
    BrokenPath { step: usize },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Search(e) => write!(f, "search failed: {e}"),
            Self::BrokenPath { step } => {
                write!(f, "solution step {step} is not a single legal move")
            }
        }
    }
}

impl std::error::Error for RunError {}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// Everything a caller needs to present or verify one solve.
#[derive(Debug, Clone)]
pub struct SolveReportV1 {
    pub world_id: String,
    pub capacity: usize,
    pub puzzle_digest: ContentHash,
    pub policy: SearchPolicyV1,
    pub outcome: SearchOutcomeV1<PegStateV1>,
    /// One entry per step of the solution path (empty unless solved).
    pub moves: Vec<MoveV1>,
    pub stats: SearchStatsV1,
}

impl SolveReportV1 {
    /// Number of moves in the solution, if solved.
    #[must_use]
    pub fn move_count(&self) -> Option<usize> {
        self.outcome.path().map(|_| self.moves.len())
    }

    /// Stable outcome tag: `solved`, `unsolvable`, or `budget_exhausted`.
    #[must_use]
    pub fn outcome_str(&self) -> &'static str {
        match self.outcome {
            SearchOutcomeV1::Solved { .. } => "solved",
            SearchOutcomeV1::Unsolvable => "unsolvable",
            SearchOutcomeV1::BudgetExhausted => "budget_exhausted",
        }
    }

    /// Convert to a `serde_json::Value`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let path: Vec<serde_json::Value> = self
            .outcome
            .path()
            .unwrap_or_default()
            .iter()
            .map(state_to_json)
            .collect();
        serde_json::json!({
            "capacity": self.capacity,
            "move_count": self.move_count(),
            "moves": self.moves.iter().map(move_to_json).collect::<Vec<_>>(),
            "outcome": self.outcome_str(),
            "path": path,
            "policy": self.policy.to_json_value(),
            "puzzle_digest": self.puzzle_digest.as_str(),
            "stats": self.stats.to_json_value(),
            "world_id": self.world_id,
        })
    }

    /// Canonical JSON bytes of the report.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if a non-integer number slipped into the report.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content digest of the canonical report bytes.
    ///
    /// # Errors
    ///
    /// Same as [`SolveReportV1::to_canonical_json_bytes`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            HashDomain::SolveReport,
            &self.to_canonical_json_bytes()?,
        ))
    }
}

/// Solve `puzzle` under `policy` and build a report.
///
/// # Errors
///
/// Returns [`RunError::Search`] for an invalid policy and
/// [`RunError::BrokenPath`] if the returned path contains a step that is not
/// a legal move (an engine or world bug, never a normal outcome).
pub fn run_solve(puzzle: &PuzzleV1, policy: &SearchPolicyV1) -> Result<SolveReportV1, RunError> {
    let world = NutsAndPegs::for_puzzle(puzzle);
    let puzzle_digest = puzzle.digest();
    info!("solving {} ({})", puzzle_digest, world.world_id());

    let result = search(&world, puzzle.initial().clone(), policy)?;

    let moves = match result.outcome.path() {
        Some(path) => path_moves(path, puzzle.capacity())?,
        None => Vec::new(),
    };

    let report = SolveReportV1 {
        world_id: world.world_id().to_string(),
        capacity: puzzle.capacity(),
        puzzle_digest,
        policy: *policy,
        outcome: result.outcome,
        moves,
        stats: result.stats,
    };
    info!(
        "{} after {} expansions",
        report.outcome_str(),
        report.stats.total_expansions
    );
    Ok(report)
}

/// The move behind every consecutive pair of `path`.
///
/// # Errors
///
/// Returns [`RunError::BrokenPath`] with the 1-based step index of the first
/// pair that is not one legal move apart.
pub fn path_moves(path: &[PegStateV1], capacity: usize) -> Result<Vec<MoveV1>, RunError> {
    path.windows(2)
        .enumerate()
        .map(|(i, pair)| {
            infer_move(&pair[0], &pair[1], capacity).ok_or(RunError::BrokenPath { step: i + 1 })
        })
        .collect()
}

fn move_to_json(mv: &MoveV1) -> serde_json::Value {
    serde_json::json!({
        "count": mv.count,
        "from": mv.from,
        "nut": mv.nut.code(),
        "to": mv.to,
    })
}

fn state_to_json(state: &PegStateV1) -> serde_json::Value {
    let pegs: Vec<Vec<u8>> = state
        .pegs()
        .iter()
        .map(|peg| peg.iter().map(|nut| nut.code()).collect())
        .collect();
    serde_json::json!(pegs)
}
