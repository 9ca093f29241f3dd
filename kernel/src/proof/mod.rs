//! Proof module: canonical JSON and domain-separated content hashing.
//!
//! Depends on nothing internal. `carrier` uses it for puzzle digests.

pub mod canon;
pub mod hash;
pub mod hash_domain;
