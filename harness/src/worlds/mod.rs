//! World implementations for the harness runner.

pub mod nuts_and_pegs;
pub mod palette;
pub mod shipped;
