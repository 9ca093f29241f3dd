//! Move-rule invariants over every state reachable from the small
//! fixtures: nuts are conserved, capacity holds, and each successor
//! differs from its parent in exactly two pegs.

use lock_tests::fixtures;
use lock_tests::oracle::reachable;
use nutsort_kernel::carrier::pegstate::PegStateV1;
use nutsort_kernel::operators::run_move::{apply_move, legal_moves, successors};

#[test]
fn successors_conserve_nuts_and_respect_capacity() {
    for (name, puzzle) in fixtures::all() {
        let capacity = puzzle.capacity();
        for state in reachable(puzzle.initial(), capacity) {
            let counts = state.nut_counts();
            for next in successors(&state, capacity) {
                assert_eq!(next.nut_counts(), counts, "{name}: nuts not conserved");
                assert_eq!(
                    next.peg_count(),
                    state.peg_count(),
                    "{name}: peg count changed"
                );
                assert!(next.max_height() <= capacity, "{name}: capacity exceeded");
                let changed = state
                    .pegs()
                    .iter()
                    .zip(next.pegs())
                    .filter(|(a, b)| a != b)
                    .count();
                assert_eq!(changed, 2, "{name}: a move touches exactly two pegs");
            }
        }
    }
}

#[test]
fn moves_follow_source_then_destination_order() {
    for (name, puzzle) in fixtures::all() {
        let capacity = puzzle.capacity();
        for state in reachable(puzzle.initial(), capacity) {
            let moves = legal_moves(&state, capacity);
            let keys: Vec<(usize, usize)> = moves.iter().map(|mv| (mv.from, mv.to)).collect();
            let mut sorted = keys.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(keys, sorted, "{name}: moves out of order or repeated");
            assert!(moves.iter().all(|mv| mv.from != mv.to), "{name}: self move");
        }
    }
}

#[test]
fn checked_apply_agrees_with_successors() {
    for (name, puzzle) in fixtures::all() {
        let capacity = puzzle.capacity();
        for state in reachable(puzzle.initial(), capacity) {
            let applied: Vec<PegStateV1> = legal_moves(&state, capacity)
                .iter()
                .map(|mv| apply_move(&state, mv, capacity).unwrap())
                .collect();
            assert_eq!(applied, successors(&state, capacity), "{name}");
        }
    }
}

/// Take `count` nuts off the top of peg `to` and put them back on `from`.
fn undo(state: &PegStateV1, from: usize, to: usize, count: usize) -> PegStateV1 {
    let mut pegs = state.pegs().to_vec();
    let split = pegs[to].len() - count;
    let moved = pegs[to].split_off(split);
    pegs[from].extend(moved);
    PegStateV1::new(pegs)
}

#[test]
fn every_move_is_undone_by_moving_the_run_back() {
    for (name, puzzle) in fixtures::all() {
        let capacity = puzzle.capacity();
        for state in reachable(puzzle.initial(), capacity) {
            for mv in legal_moves(&state, capacity) {
                let next = apply_move(&state, &mv, capacity).unwrap();
                let dest = next.peg(mv.to).unwrap();
                assert!(dest.len() >= mv.count, "{name}");
                assert!(
                    dest[dest.len() - mv.count..].iter().all(|&nut| nut == mv.nut),
                    "{name}: destination top is not the moved run"
                );
                assert_eq!(
                    undo(&next, mv.from, mv.to, mv.count),
                    state,
                    "{name}: {mv}"
                );
            }
        }
    }
}

#[test]
fn whole_run_moves_together() {
    // Top run of peg 0 is three reds; the empty peg takes all three.
    let state = PegStateV1::from_codes(&[&[2, 1, 1, 1], &[]]);
    let moves = legal_moves(&state, 4);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].count, 3);
    assert_eq!(
        successors(&state, 4),
        vec![PegStateV1::from_codes(&[&[2], &[1, 1, 1]])]
    );
}
