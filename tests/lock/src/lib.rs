//! Shared helpers for the lock tests: fixture puzzles and an uninformed
//! breadth-first oracle to check search results against.

pub mod fixtures;
pub mod oracle;
