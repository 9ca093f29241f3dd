//! Shared instances for the nutsort benchmark suites.

use nutsort_kernel::carrier::pegstate::PegStateV1;
use nutsort_kernel::carrier::puzzle::PuzzleV1;

/// A named benchmark instance.
pub struct Instance {
    pub name: &'static str,
    pub puzzle: PuzzleV1,
}

/// Build a puzzle from raw codes.
///
/// # Panics
///
/// Panics if the layout violates the capacity. Benchmark setup failures
/// are fatal.
#[must_use]
pub fn puzzle(capacity: usize, pegs: &[&[u8]]) -> PuzzleV1 {
    PuzzleV1::new(capacity, PegStateV1::from_codes(pegs)).expect("valid benchmark puzzle")
}

/// Instances small enough to solve thousands of times per sample.
#[must_use]
pub fn small_instances() -> Vec<Instance> {
    vec![
        Instance {
            name: "crossed_pair",
            puzzle: puzzle(2, &[&[1, 2], &[2, 1], &[]]),
        },
        Instance {
            name: "three_colors",
            puzzle: puzzle(3, &[&[1, 2, 3], &[2, 3, 1], &[3, 1, 2], &[], &[]]),
        },
        Instance {
            name: "dead_end",
            puzzle: puzzle(3, &[&[1, 2, 1], &[2, 1, 2]]),
        },
    ]
}

/// A state with many legal moves: every peg topped by the same color, plus
/// empty pegs to receive runs.
#[must_use]
pub fn wide_state() -> PegStateV1 {
    PegStateV1::from_codes(&[
        &[2, 3, 1],
        &[3, 2, 1],
        &[4, 5, 1],
        &[5, 4],
        &[6, 1],
        &[],
        &[],
        &[],
    ])
}
