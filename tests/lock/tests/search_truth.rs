//! A* results on the fixture puzzles, checked against the breadth-first
//! oracle: every returned path is legal, ends at its first goal, and is as
//! short as the shortest path BFS finds.

use lock_tests::fixtures;
use lock_tests::oracle::{bfs_distance, check_path};
use nutsort_harness::worlds::nuts_and_pegs::NutsAndPegs;
use nutsort_search::policy::SearchPolicyV1;
use nutsort_search::search::{search, solve, SearchOutcomeV1};

#[test]
fn solved_paths_are_legal_and_optimal() {
    for (name, puzzle) in fixtures::all() {
        let world = NutsAndPegs::for_puzzle(&puzzle);
        let expected = bfs_distance(puzzle.initial(), puzzle.capacity());
        let path = solve(&world, puzzle.initial().clone());

        match (path, expected) {
            (Some(path), Some(moves)) => {
                check_path(&path, puzzle.initial(), puzzle.capacity())
                    .unwrap_or_else(|e| panic!("{name}: {e}"));
                assert_eq!(path.len() - 1, moves, "{name}: not a shortest path");
            }
            (None, None) => {}
            (got, want) => panic!(
                "{name}: A* says {:?} moves, BFS says {want:?}",
                got.map(|p| p.len() - 1)
            ),
        }
    }
}

#[test]
fn known_move_counts() {
    let cases = [
        ("already_sorted", fixtures::already_sorted(), Some(0)),
        ("crossed_pair", fixtures::crossed_pair(), Some(3)),
        ("deadlocked", fixtures::deadlocked(), None),
    ];
    for (name, puzzle, moves) in cases {
        let world = NutsAndPegs::for_puzzle(&puzzle);
        let got = solve(&world, puzzle.initial().clone()).map(|p| p.len() - 1);
        assert_eq!(got, moves, "{name}");
    }
}

#[test]
fn search_is_deterministic_n10() {
    for (name, puzzle) in fixtures::all() {
        let world = NutsAndPegs::for_puzzle(&puzzle);
        let policy = SearchPolicyV1::default();
        let first = search(&world, puzzle.initial().clone(), &policy).unwrap();
        for i in 1..10 {
            let again = search(&world, puzzle.initial().clone(), &policy).unwrap();
            assert_eq!(
                first.outcome, again.outcome,
                "{name}: outcome differed on run {i}"
            );
            assert_eq!(
                first.stats, again.stats,
                "{name}: stats differed on run {i}"
            );
        }
    }
}

#[test]
fn unsolvable_exhausts_the_frontier() {
    let puzzle = fixtures::deadlocked();
    let world = NutsAndPegs::for_puzzle(&puzzle);
    let result = search(&world, puzzle.initial().clone(), &SearchPolicyV1::default()).unwrap();
    assert_eq!(result.outcome, SearchOutcomeV1::Unsolvable);
    assert_eq!(result.stats.total_expansions, 1);
    assert_eq!(result.stats.total_nodes_created, 1);
}

#[test]
fn budget_exhaustion_is_not_unsolvable() {
    let puzzle = fixtures::four_colors();
    let world = NutsAndPegs::for_puzzle(&puzzle);
    let result = search(
        &world,
        puzzle.initial().clone(),
        &SearchPolicyV1::with_max_expansions(1),
    )
    .unwrap();
    assert_eq!(result.outcome, SearchOutcomeV1::BudgetExhausted);
    assert_eq!(result.stats.total_expansions, 1);
}

#[test]
fn generous_budget_matches_unbounded_search() {
    let puzzle = fixtures::three_colors();
    let world = NutsAndPegs::for_puzzle(&puzzle);
    let unbounded = search(&world, puzzle.initial().clone(), &SearchPolicyV1::default()).unwrap();
    let bounded = search(
        &world,
        puzzle.initial().clone(),
        &SearchPolicyV1::with_max_expansions(unbounded.stats.total_expansions + 1),
    )
    .unwrap();
    assert_eq!(unbounded.outcome, bounded.outcome);
    assert_eq!(
        unbounded.stats.total_expansions,
        bounded.stats.total_expansions
    );
}
