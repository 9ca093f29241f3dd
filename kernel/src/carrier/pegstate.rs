//! `PegStateV1`: an immutable arrangement of nuts on pegs.
//!
//! # Layout
//!
//! An ordered list of pegs; each peg is an ordered list of nuts, bottom
//! first, so the last element is the top of the peg. Peg order is
//! significant: peg 0 and peg 1 are distinct slots.
//!
//! # Equality semantics
//!
//! Equality and the identity bytes both cover the peg sequence only. Peg
//! capacity belongs to the [`crate::carrier::puzzle::PuzzleV1`] instance, not
//! the state, so it never participates in dedup.

use std::collections::BTreeMap;

use crate::carrier::nut::Nut;

/// A puzzle configuration: which nuts sit on which peg, bottom to top.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PegStateV1 {
    pegs: Vec<Vec<Nut>>,
}

impl PegStateV1 {
    /// Build a state from pegs listed bottom to top.
    #[must_use]
    pub fn new(pegs: Vec<Vec<Nut>>) -> Self {
        Self { pegs }
    }

    /// Convenience constructor from raw color codes.
    #[must_use]
    pub fn from_codes(pegs: &[&[u8]]) -> Self {
        Self {
            pegs: pegs
                .iter()
                .map(|peg| peg.iter().copied().map(Nut::new).collect())
                .collect(),
        }
    }

    /// All pegs, in slot order.
    #[must_use]
    pub fn pegs(&self) -> &[Vec<Nut>] {
        &self.pegs
    }

    /// A single peg (bottom first), or `None` if `index` is out of range.
    #[must_use]
    pub fn peg(&self, index: usize) -> Option<&[Nut]> {
        self.pegs.get(index).map(Vec::as_slice)
    }

    /// Number of pegs (fixed for the lifetime of a search).
    #[must_use]
    pub fn peg_count(&self) -> usize {
        self.pegs.len()
    }

    /// Length of the tallest peg.
    #[must_use]
    pub fn max_height(&self) -> usize {
        self.pegs.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Multiset of nut colors on the board. Moves never change it.
    #[must_use]
    pub fn nut_counts(&self) -> BTreeMap<Nut, usize> {
        let mut counts = BTreeMap::new();
        for nut in self.pegs.iter().flatten() {
            *counts.entry(*nut).or_insert(0) += 1;
        }
        counts
    }

    /// Injective byte encoding of the peg sequence, used for fingerprints.
    ///
    /// `u64 LE peg_count`, then for each peg `u64 LE len` followed by one
    /// byte per nut code (bottom first).
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let nut_total: usize = self.pegs.iter().map(Vec::len).sum();
        let mut out = Vec::with_capacity(8 + 8 * self.pegs.len() + nut_total);
        out.extend_from_slice(&(self.pegs.len() as u64).to_le_bytes());
        for peg in &self.pegs {
            out.extend_from_slice(&(peg.len() as u64).to_le_bytes());
            out.extend(peg.iter().map(|nut| nut.code()));
        }
        out
    }

    /// Replace two pegs at once, producing a new state.
    ///
    /// Used by the move operator; callers guarantee `a != b` and both in range.
    pub(crate) fn with_two_pegs(
        &self,
        a: usize,
        peg_a: Vec<Nut>,
        b: usize,
        peg_b: Vec<Nut>,
    ) -> Self {
        let mut pegs = self.pegs.clone();
        pegs[a] = peg_a;
        pegs[b] = peg_b;
        Self { pegs }
    }
}
