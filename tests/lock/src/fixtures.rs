//! Small puzzle instances with known properties.
//!
//! Every instance here solves (or proves unsolvable) in well under a second
//! in a debug build.

use nutsort_kernel::carrier::pegstate::PegStateV1;
use nutsort_kernel::carrier::puzzle::PuzzleV1;

/// Build a puzzle from raw codes.
///
/// # Panics
///
/// Panics if the layout violates the capacity. Fixtures are constants.
#[must_use]
pub fn puzzle(capacity: usize, pegs: &[&[u8]]) -> PuzzleV1 {
    PuzzleV1::new(capacity, PegStateV1::from_codes(pegs)).unwrap()
}

/// Already a goal: one full monochromatic peg and an empty one.
#[must_use]
pub fn already_sorted() -> PuzzleV1 {
    puzzle(2, &[&[1, 1], &[]])
}

/// Two colors crossed over, with one empty peg to shuffle through.
/// Optimal solution is three moves.
#[must_use]
pub fn crossed_pair() -> PuzzleV1 {
    puzzle(2, &[&[1, 2], &[2, 1], &[]])
}

/// Two full pegs, no empty peg, no legal move.
#[must_use]
pub fn deadlocked() -> PuzzleV1 {
    puzzle(2, &[&[1, 2], &[2, 1]])
}

/// Three colors, capacity three, two empty pegs.
#[must_use]
pub fn three_colors() -> PuzzleV1 {
    puzzle(3, &[&[1, 2, 3], &[2, 3, 1], &[3, 1, 2], &[], &[]])
}

/// Same color on two bottoms: the pegs must be merged.
#[must_use]
pub fn split_color() -> PuzzleV1 {
    puzzle(4, &[&[1, 1], &[1, 2], &[2, 2], &[]])
}

/// Four colors, capacity three, two empty pegs.
#[must_use]
pub fn four_colors() -> PuzzleV1 {
    puzzle(
        3,
        &[&[1, 2, 3], &[4, 1, 2], &[3, 4, 1], &[2, 3, 4], &[], &[]],
    )
}

/// Every fixture that must agree with the breadth-first oracle.
#[must_use]
pub fn all() -> Vec<(&'static str, PuzzleV1)> {
    vec![
        ("already_sorted", already_sorted()),
        ("crossed_pair", crossed_pair()),
        ("deadlocked", deadlocked()),
        ("three_colors", three_colors()),
        ("split_color", split_color()),
        ("four_colors", four_colors()),
    ]
}
