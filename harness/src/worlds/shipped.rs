//! The fixed example layout: nine colors, eleven pegs of capacity four,
//! two of them empty.

use nutsort_kernel::carrier::nut::Nut;
use nutsort_kernel::carrier::pegstate::PegStateV1;
use nutsort_kernel::carrier::puzzle::{PuzzleError, PuzzleV1};

use crate::worlds::palette::Color::{
    self, Blue, Green, Ice, LightBlue, Orange, Pink, Purple, Red, Yellow,
};

/// Peg capacity of the shipped layout.
pub const SHIPPED_CAPACITY: usize = 4;

/// Pegs listed bottom to top.
const SHIPPED_PEGS: [&[Color]; 11] = [
    &[Yellow, LightBlue, Yellow, Red],
    &[Purple, Red, Green, Ice],
    &[Blue, LightBlue, Blue, LightBlue],
    &[Orange, Pink, Green, Pink],
    &[Green, Orange, Ice, Purple],
    &[Purple, Red, Green, Blue],
    &[Yellow, Pink, Blue, Pink],
    &[Yellow, Ice, LightBlue, Red],
    &[Orange, Orange, Purple, Ice],
    &[],
    &[],
];

/// The shipped puzzle instance.
///
/// # Errors
///
/// Never fails for the constant layout; the `Result` surfaces
/// [`PuzzleV1::new`] validation unchanged.
pub fn shipped_puzzle() -> Result<PuzzleV1, PuzzleError> {
    let pegs = SHIPPED_PEGS
        .iter()
        .map(|peg| peg.iter().map(|&c| c.nut()).collect::<Vec<Nut>>())
        .collect();
    PuzzleV1::new(SHIPPED_CAPACITY, PegStateV1::new(pegs))
}
