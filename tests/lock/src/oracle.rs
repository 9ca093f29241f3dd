//! Reference checks that do not share code with the A* engine.

use std::collections::{HashSet, VecDeque};

use nutsort_harness::worlds::nuts_and_pegs::is_sorted;
use nutsort_kernel::carrier::pegstate::PegStateV1;
use nutsort_kernel::operators::run_move::{apply_move, legal_moves, successors};

/// Fewest moves from `initial` to any goal, by exhaustive breadth-first
/// search. `None` if no goal is reachable.
#[must_use]
pub fn bfs_distance(initial: &PegStateV1, capacity: usize) -> Option<usize> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(initial.clone());
    queue.push_back((initial.clone(), 0usize));
    while let Some((state, depth)) = queue.pop_front() {
        if is_sorted(&state) {
            return Some(depth);
        }
        for next in successors(&state, capacity) {
            if seen.insert(next.clone()) {
                queue.push_back((next, depth + 1));
            }
        }
    }
    None
}

/// Every state reachable from `initial`, itself first.
#[must_use]
pub fn reachable(initial: &PegStateV1, capacity: usize) -> Vec<PegStateV1> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![initial.clone()];
    seen.insert(initial.clone());
    while let Some(state) = stack.pop() {
        for next in successors(&state, capacity) {
            if seen.insert(next.clone()) {
                stack.push(next);
            }
        }
        order.push(state);
    }
    order
}

/// Check that `path` starts at `initial`, that each step is exactly one
/// legal move, and that only the last state is a goal.
///
/// # Errors
///
/// Returns a description of the first violation.
pub fn check_path(
    path: &[PegStateV1],
    initial: &PegStateV1,
    capacity: usize,
) -> Result<(), String> {
    let (first, last) = match (path.first(), path.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err("empty path".into()),
    };
    if first != initial {
        return Err("path does not start at the initial state".into());
    }
    if !is_sorted(last) {
        return Err("path does not end at a goal".into());
    }
    for (i, pair) in path.windows(2).enumerate() {
        if is_sorted(&pair[0]) {
            return Err(format!("state {i} is already a goal"));
        }
        let legal = legal_moves(&pair[0], capacity)
            .iter()
            .any(|mv| apply_move(&pair[0], mv, capacity).is_ok_and(|next| next == pair[1]));
        if !legal {
            return Err(format!("step {} is not a legal move", i + 1));
        }
    }
    Ok(())
}
