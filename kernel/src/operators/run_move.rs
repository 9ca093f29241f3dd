//! The run move: the only way a peg state changes.
//!
//! A move picks a non-empty source peg, lifts the maximal run of identical
//! nuts from its top, and drops the whole run onto a different destination
//! peg that is empty or topped by the same color, provided the destination
//! stays within capacity.
//!
//! Enumeration order is normative: ascending source index, then ascending
//! destination index. Together with the search tie-break it decides which of
//! several equally short solutions is returned.

use crate::carrier::nut::Nut;
use crate::carrier::pegstate::PegStateV1;

/// The maximal run of identical nuts at the top of a peg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunV1 {
    /// Color of every nut in the run.
    pub nut: Nut,
    /// Run length (>= 1).
    pub len: usize,
}

/// A single legal transition between two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoveV1 {
    /// Source peg index.
    pub from: usize,
    /// Destination peg index.
    pub to: usize,
    /// Color of the moved run.
    pub nut: Nut,
    /// Number of nuts moved (the full top run of the source).
    pub count: usize,
}

impl std::fmt::Display for MoveV1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "move {} x {} from peg {} to peg {}",
            self.count, self.nut, self.from, self.to
        )
    }
}

/// Typed failure for move application. Fail-closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveFailure {
    /// A peg index is outside the state.
    PegOutOfRange { peg: usize, peg_count: usize },
    /// Source and destination are the same peg.
    SamePeg { peg: usize },
    /// The source peg has no nuts.
    EmptySource { peg: usize },
    /// The move does not describe the source's actual top run.
    RunMismatch { expected: RunV1, found: RunV1 },
    /// The destination top has a different color than the run.
    ColorMismatch { peg: usize, top: Nut, nut: Nut },
    /// The destination would exceed the shared capacity.
    CapacityExceeded {
        peg: usize,
        len: usize,
        count: usize,
        capacity: usize,
    },
}

impl std::fmt::Display for MoveFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PegOutOfRange { peg, peg_count } => {
                write!(f, "peg {peg} out of range ({peg_count} pegs)")
            }
            Self::SamePeg { peg } => write!(f, "peg {peg} cannot be its own destination"),
            Self::EmptySource { peg } => write!(f, "source peg {peg} is empty"),
            Self::RunMismatch { expected, found } => write!(
                f,
                "top run is {} x {}, move claims {} x {}",
                found.len, found.nut, expected.len, expected.nut
            ),
            Self::ColorMismatch { peg, top, nut } => {
                write!(f, "peg {peg} is topped by {top}, cannot take {nut}")
            }
            Self::CapacityExceeded {
                peg,
                len,
                count,
                capacity,
            } => write!(
                f,
                "peg {peg} holds {len}, adding {count} exceeds capacity {capacity}"
            ),
        }
    }
}

impl std::error::Error for MoveFailure {}

/// The maximal top run of `peg`, or `None` if the peg is empty.
#[must_use]
pub fn top_run(peg: &[Nut]) -> Option<RunV1> {
    let &nut = peg.last()?;
    let len = peg.iter().rev().take_while(|&&n| n == nut).count();
    Some(RunV1 { nut, len })
}

/// Whether `dest` can take `run` under `capacity`.
fn accepts(dest: &[Nut], run: RunV1, capacity: usize) -> bool {
    match dest.last() {
        Some(&top) if top != run.nut => false,
        _ => dest.len() + run.len <= capacity,
    }
}

/// Enumerate every legal move from `state`, source-major, destination-minor.
#[must_use]
pub fn legal_moves(state: &PegStateV1, capacity: usize) -> Vec<MoveV1> {
    let pegs = state.pegs();
    let mut moves = Vec::new();
    for (from, src) in pegs.iter().enumerate() {
        let Some(run) = top_run(src) else {
            continue;
        };
        for (to, dest) in pegs.iter().enumerate() {
            if to != from && accepts(dest, run, capacity) {
                moves.push(MoveV1 {
                    from,
                    to,
                    nut: run.nut,
                    count: run.len,
                });
            }
        }
    }
    moves
}

/// Every successor state of `state`, in [`legal_moves`] order.
#[must_use]
pub fn successors(state: &PegStateV1, capacity: usize) -> Vec<PegStateV1> {
    legal_moves(state, capacity)
        .iter()
        .map(|mv| perform(state, mv))
        .collect()
}

/// Apply a move after checking it against the legality predicate.
///
/// # Errors
///
/// Returns [`MoveFailure`] if any part of the move rule is violated.
pub fn apply_move(
    state: &PegStateV1,
    mv: &MoveV1,
    capacity: usize,
) -> Result<PegStateV1, MoveFailure> {
    let peg_count = state.peg_count();
    let (Some(src), Some(dest)) = (state.peg(mv.from), state.peg(mv.to)) else {
        let peg = if mv.from >= peg_count { mv.from } else { mv.to };
        return Err(MoveFailure::PegOutOfRange { peg, peg_count });
    };
    if mv.from == mv.to {
        return Err(MoveFailure::SamePeg { peg: mv.from });
    }
    let run = top_run(src).ok_or(MoveFailure::EmptySource { peg: mv.from })?;
    let claimed = RunV1 {
        nut: mv.nut,
        len: mv.count,
    };
    if run != claimed {
        return Err(MoveFailure::RunMismatch {
            expected: claimed,
            found: run,
        });
    }
    if let Some(&top) = dest.last() {
        if top != run.nut {
            return Err(MoveFailure::ColorMismatch {
                peg: mv.to,
                top,
                nut: run.nut,
            });
        }
    }
    if dest.len() + run.len > capacity {
        return Err(MoveFailure::CapacityExceeded {
            peg: mv.to,
            len: dest.len(),
            count: run.len,
            capacity,
        });
    }
    Ok(perform(state, mv))
}

/// Recover the single legal move that turns `before` into `after`.
///
/// Returns `None` when the two states are not one legal move apart.
#[must_use]
pub fn infer_move(before: &PegStateV1, after: &PegStateV1, capacity: usize) -> Option<MoveV1> {
    legal_moves(before, capacity)
        .into_iter()
        .find(|mv| perform(before, mv) == *after)
}

/// Move the run without re-checking legality. `mv` must come from
/// [`legal_moves`] or have passed the checks in [`apply_move`].
fn perform(state: &PegStateV1, mv: &MoveV1) -> PegStateV1 {
    let pegs = state.pegs();
    let src = &pegs[mv.from];
    let split = src.len() - mv.count;
    let mut dest = pegs[mv.to].clone();
    dest.extend_from_slice(&src[split..]);
    state.with_two_pegs(mv.from, src[..split].to_vec(), mv.to, dest)
}
