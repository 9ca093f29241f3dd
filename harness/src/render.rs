//! Plain-text rendering of states and solve reports.
//!
//! A state renders as its non-empty pegs, one per line, bottom nut first,
//! nuts comma-separated by palette name. Steps are separated by a blank line.
//! Nuts print as color names rather than raw codes; codes outside the palette
//! fall back to their number.

use std::fmt::Write as _;

use nutsort_kernel::carrier::pegstate::PegStateV1;
use nutsort_kernel::operators::run_move::MoveV1;
use nutsort_search::search::SearchOutcomeV1;

use crate::runner::SolveReportV1;
use crate::worlds::palette::nut_label;

/// Render the non-empty pegs of `state`.
#[must_use]
pub fn render_state(state: &PegStateV1) -> String {
    let mut out = String::new();
    for peg in state.pegs().iter().filter(|peg| !peg.is_empty()) {
        let labels: Vec<String> = peg.iter().map(|&nut| nut_label(nut)).collect();
        out.push_str(&labels.join(","));
        out.push('\n');
    }
    out
}

/// One-line description of a move using palette names.
#[must_use]
pub fn describe_move(mv: &MoveV1) -> String {
    format!(
        "move {} {} from peg {} to peg {}",
        mv.count,
        nut_label(mv.nut),
        mv.from,
        mv.to
    )
}

/// Render a full report: every path state, headed by the move reaching it.
#[must_use]
pub fn render_report(report: &SolveReportV1) -> String {
    let path = match &report.outcome {
        SearchOutcomeV1::Solved { path } => path,
        SearchOutcomeV1::Unsolvable => return "No solution\n".to_string(),
        SearchOutcomeV1::BudgetExhausted => {
            return format!(
                "Search stopped after {} expansions without a result\n",
                report.stats.total_expansions
            )
        }
    };

    let mut out = String::new();
    for (step, state) in path.iter().enumerate() {
        match step.checked_sub(1).and_then(|i| report.moves.get(i)) {
            Some(mv) => {
                let _ = writeln!(out, "# step {step}: {}", describe_move(mv));
            }
            None => out.push_str("# start\n"),
        }
        out.push_str(&render_state(state));
        out.push('\n');
    }
    let _ = writeln!(out, "# solved in {} moves", report.moves.len());
    out
}
