//! Nutsort Kernel: the deterministic core of the nuts-and-pegs puzzle.
//!
//! # API Surface
//!
//! - [`carrier::compile::compile`] -- parse a JSON puzzle payload into a
//!   [`carrier::puzzle::PuzzleV1`]
//! - [`operators::run_move::legal_moves`] / [`operators::run_move::apply_move`] -- the move rule
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256
//!
//! # Module Dependency Direction
//!
//! `proof` ← `carrier` ← `operators`
//!
//! One-way only. No cycles.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod proof;
