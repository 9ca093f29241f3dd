//! Operators: the only way a peg state changes.

pub mod run_move;
