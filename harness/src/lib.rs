//! Nutsort Harness: puzzle-level orchestration around the search engine.
//!
//! The harness turns puzzle instances into search runs
//! (`PuzzleV1` → `NutsAndPegs` → `search()`) and packages the outcome as a
//! report that can be rendered as text or canonical JSON.
//!
//! The harness does NOT implement search logic; it delegates to
//! `nutsort_search`. Worlds provide domain rules only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod puzzle_file;
pub mod render;
pub mod runner;
pub mod worlds;
