//! End-to-end scenarios through the harness: puzzle file in, report out.

use lock_tests::fixtures;
use nutsort_harness::puzzle_file::load_puzzle;
use nutsort_harness::render::render_report;
use nutsort_harness::runner::run_solve;
use nutsort_harness::worlds::shipped::shipped_puzzle;
use nutsort_kernel::carrier::pegstate::PegStateV1;
use nutsort_search::policy::SearchPolicyV1;

#[test]
fn already_sorted_yields_single_state_path() {
    let report = run_solve(&fixtures::already_sorted(), &SearchPolicyV1::default()).unwrap();
    let path = report.outcome.path().unwrap();
    assert_eq!(path, [PegStateV1::from_codes(&[&[1, 1], &[]])]);
    assert_eq!(report.stats.total_expansions, 0);
}

#[test]
fn full_pegs_without_free_space_are_unsolvable() {
    let report = run_solve(&fixtures::deadlocked(), &SearchPolicyV1::default()).unwrap();
    assert_eq!(report.outcome_str(), "unsolvable");
    assert_eq!(report.move_count(), None);
}

#[test]
fn crossed_pair_renders_every_step() {
    let report = run_solve(&fixtures::crossed_pair(), &SearchPolicyV1::default()).unwrap();
    assert_eq!(report.move_count(), Some(3));
    let text = render_report(&report);
    assert!(text.starts_with("# start\nred,yellow\nyellow,red\n\n"));
    assert_eq!(text.matches("# step ").count(), 3);
    assert!(text.ends_with("# solved in 3 moves\n"));
}

#[test]
fn crossed_pair_returns_the_first_optimal_path() {
    // Successor order plus the insertion tie-break pick this path among the
    // optimal ones.
    let report = run_solve(&fixtures::crossed_pair(), &SearchPolicyV1::default()).unwrap();
    let expected = [
        PegStateV1::from_codes(&[&[1, 2], &[2, 1], &[]]),
        PegStateV1::from_codes(&[&[1], &[2, 1], &[2]]),
        PegStateV1::from_codes(&[&[1, 1], &[2], &[2]]),
        PegStateV1::from_codes(&[&[1, 1], &[], &[2, 2]]),
    ];
    assert_eq!(report.outcome.path().unwrap(), expected);

    let moves: Vec<(usize, usize, usize)> = report
        .moves
        .iter()
        .map(|mv| (mv.from, mv.to, mv.count))
        .collect();
    assert_eq!(moves, [(0, 2, 1), (1, 0, 1), (1, 2, 1)]);
}

#[test]
fn puzzle_file_round_trips_through_solver() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("three.json");
    std::fs::write(
        &path,
        br#"{"capacity": 3, "pegs": [[1, 2, 3], [2, 3, 1], [3, 1, 2], [], []]}"#,
    )
    .unwrap();

    let loaded = load_puzzle(&path).unwrap();
    assert_eq!(loaded, fixtures::three_colors());

    let from_file = run_solve(&loaded, &SearchPolicyV1::default()).unwrap();
    let in_memory = run_solve(&fixtures::three_colors(), &SearchPolicyV1::default()).unwrap();
    assert_eq!(from_file.digest().unwrap(), in_memory.digest().unwrap());
}

#[test]
fn report_json_is_canonical() {
    let report = run_solve(&fixtures::split_color(), &SearchPolicyV1::default()).unwrap();
    let bytes = report.to_canonical_json_bytes().unwrap();
    let reparsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(reparsed, report.to_json_value());
    assert_eq!(reparsed["world_id"], "nuts_and_pegs:v1:cap4");
    assert_eq!(
        reparsed["moves"].as_array().unwrap().len(),
        report.moves.len()
    );
}

#[test]
#[ignore = "slow in debug builds"]
fn shipped_puzzle_solves() {
    let puzzle = shipped_puzzle().unwrap();
    let report = run_solve(&puzzle, &SearchPolicyV1::default()).unwrap();
    assert_eq!(report.outcome_str(), "solved");
    let path = report.outcome.path().unwrap();
    lock_tests::oracle::check_path(path, puzzle.initial(), puzzle.capacity()).unwrap();
}
