//! Carrier module: the puzzle's value types.
//!
//! `nut` ← `pegstate` ← `puzzle` ← `compile`. States are immutable values;
//! every move produces a new [`pegstate::PegStateV1`].

pub mod compile;
pub mod nut;
pub mod pegstate;
pub mod puzzle;
