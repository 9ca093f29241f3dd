//! `nutsort [PUZZLE.json] [--max-expansions N] [--json]`
//!
//! Solves the puzzle in `PUZZLE.json`, or the shipped layout when no file is
//! given, and prints the solution path. Exit status: 0 solved, 1 no solution
//! or budget exhausted, 2 usage or input error.

use std::path::PathBuf;
use std::process::ExitCode;

use log::error;

use nutsort_harness::puzzle_file::load_puzzle;
use nutsort_harness::render::render_report;
use nutsort_harness::runner::run_solve;
use nutsort_harness::worlds::shipped::shipped_puzzle;
use nutsort_search::policy::SearchPolicyV1;

const USAGE: &str = "usage: nutsort [PUZZLE.json] [--max-expansions N] [--json]";

struct Args {
    puzzle: Option<PathBuf>,
    policy: SearchPolicyV1,
    json: bool,
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut args = Args {
        puzzle: None,
        policy: SearchPolicyV1::default(),
        json: false,
    };
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--max-expansions" => {
                let value = argv
                    .next()
                    .ok_or_else(|| "--max-expansions needs a value".to_string())?;
                let n = value
                    .parse::<u64>()
                    .map_err(|e| format!("--max-expansions {value}: {e}"))?;
                args.policy = SearchPolicyV1::with_max_expansions(n);
            }
            flag if flag.starts_with("--") => return Err(format!("unknown flag {flag}")),
            path if args.puzzle.is_none() => args.puzzle = Some(PathBuf::from(path)),
            extra => return Err(format!("unexpected argument {extra}")),
        }
    }
    Ok(args)
}

fn run(args: &Args) -> Result<bool, String> {
    let puzzle = match &args.puzzle {
        Some(path) => load_puzzle(path).map_err(|e| e.to_string())?,
        None => shipped_puzzle().map_err(|e| e.to_string())?,
    };
    let report = run_solve(&puzzle, &args.policy).map_err(|e| e.to_string())?;

    if args.json {
        let bytes = report.to_canonical_json_bytes().map_err(|e| e.to_string())?;
        println!("{}", String::from_utf8_lossy(&bytes));
    } else {
        print!("{}", render_report(&report));
    }
    Ok(report.outcome.path().is_some())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(msg) => {
            error!("{msg}");
            eprintln!("nutsort: {msg}");
            ExitCode::from(2)
        }
    }
}
