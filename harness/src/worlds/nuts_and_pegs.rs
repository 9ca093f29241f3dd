//! `NutsAndPegs`: the peg-sorting puzzle as a search world.
//!
//! State is a [`PegStateV1`]; moves come from the kernel's run-move
//! operator, so successor order is the kernel's source-major,
//! destination-minor enumeration.
//!
//! # Goal
//!
//! Every non-empty peg is monochromatic and no two non-empty pegs share a
//! color. Empty pegs never matter.
//!
//! # Heuristic
//!
//! `disorder = breaks + duplicate_bottoms` where `breaks` counts adjacent
//! nuts of different color on the same peg (scanned bottom to top) and
//! `duplicate_bottoms` is the number of non-empty pegs minus the number of
//! distinct bottom colors. Both terms are zero exactly at a goal, and one
//! move lowers their sum by at most one, so the estimate is consistent.

use std::collections::BTreeSet;

use nutsort_kernel::carrier::pegstate::PegStateV1;
use nutsort_kernel::carrier::puzzle::PuzzleV1;
use nutsort_kernel::operators::run_move;

use nutsort_search::contract::StateSpace;

/// The nuts-and-pegs world for one peg capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutsAndPegs {
    capacity: usize,
    world_id: String,
}

impl NutsAndPegs {
    /// World for pegs holding at most `capacity` nuts.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            world_id: format!("nuts_and_pegs:v1:cap{capacity}"),
        }
    }

    /// World matching a validated puzzle instance.
    #[must_use]
    pub fn for_puzzle(puzzle: &PuzzleV1) -> Self {
        Self::new(puzzle.capacity())
    }

    /// Unique world identifier (capacity included).
    #[must_use]
    pub fn world_id(&self) -> &str {
        &self.world_id
    }

    /// Shared peg capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl StateSpace for NutsAndPegs {
    type State = PegStateV1;

    fn identity_bytes(&self, state: &PegStateV1) -> Vec<u8> {
        state.identity_bytes()
    }

    fn heuristic(&self, state: &PegStateV1) -> u64 {
        disorder(state)
    }

    fn successors(&self, state: &PegStateV1) -> Vec<PegStateV1> {
        run_move::successors(state, self.capacity)
    }

    fn is_goal(&self, state: &PegStateV1) -> bool {
        is_sorted(state)
    }
}

/// Goal test: monochromatic pegs, one color per peg.
#[must_use]
pub fn is_sorted(state: &PegStateV1) -> bool {
    let mut colors = BTreeSet::new();
    for peg in state.pegs() {
        let Some(&bottom) = peg.first() else {
            continue;
        };
        if peg.iter().any(|&nut| nut != bottom) || !colors.insert(bottom) {
            return false;
        }
    }
    true
}

/// Heuristic: color breaks within pegs plus duplicated bottom colors.
#[must_use]
pub fn disorder(state: &PegStateV1) -> u64 {
    let breaks: usize = state
        .pegs()
        .iter()
        .map(|peg| peg.windows(2).filter(|pair| pair[0] != pair[1]).count())
        .sum();

    let bottoms: Vec<_> = state.pegs().iter().filter_map(|peg| peg.first()).collect();
    let distinct: BTreeSet<_> = bottoms.iter().collect();

    (breaks + bottoms.len() - distinct.len()) as u64
}
