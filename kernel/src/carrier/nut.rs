//! `Nut`: a single colored token.
//!
//! The kernel knows colors only as opaque one-byte codes. Naming a code
//! ("red", "light blue") is a presentation concern owned by the caller.

/// A colored token stacked on a peg.
///
/// Two nuts are interchangeable exactly when their codes are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nut(u8);

impl Nut {
    /// Construct a nut from its color code.
    #[must_use]
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// The raw color code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Nut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
