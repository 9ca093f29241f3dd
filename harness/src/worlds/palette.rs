//! Named colors for the shipped layout and for rendering.
//!
//! Codes start at 1 and follow declaration order. Codes outside the palette
//! are still valid nuts; they render as their number.

use nutsort_kernel::carrier::nut::Nut;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Color {
    Red = 1,
    Yellow = 2,
    Green = 3,
    Pink = 4,
    Purple = 5,
    Orange = 6,
    Ice = 7,
    Blue = 8,
    LightBlue = 9,
}

impl Color {
    /// All palette colors in code order.
    pub const ALL: [Color; 9] = [
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Pink,
        Color::Purple,
        Color::Orange,
        Color::Ice,
        Color::Blue,
        Color::LightBlue,
    ];

    /// The nut carrying this color.
    #[must_use]
    pub const fn nut(self) -> Nut {
        Nut::new(self as u8)
    }

    /// Palette color for `nut`, if its code is in the palette.
    #[must_use]
    pub fn from_nut(nut: Nut) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.nut() == nut)
    }

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Ice => "ice",
            Self::Blue => "blue",
            Self::LightBlue => "light_blue",
        }
    }
}

/// Display label for any nut: palette name, or the raw code.
#[must_use]
pub fn nut_label(nut: Nut) -> String {
    Color::from_nut(nut).map_or_else(|| nut.to_string(), |c| c.name().to_string())
}
