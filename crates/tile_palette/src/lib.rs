//! The fixed palette of solid colours that the Tilr test tiles are made of.
//!
//! The order of the palette is significant: a colour's position in the
//! palette is the index used in the filename of its tile.

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// Number of colours in the palette.
pub const PALETTE_LEN: usize = TileColor::COUNT;

/// A colour as three 8-bit channels. No alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub red:   u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue:  u8,
}

impl Rgb {
    /// Create a new colour from its channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.red, rgb.green, rgb.blue]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self { red, green, blue }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// A colour of the tile palette, declared in palette order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCountMacro, derive_more::Display)]
pub enum TileColor {
    #[display(fmt = "black")]
    Black,
    #[display(fmt = "white")]
    White,
    #[display(fmt = "red")]
    Red,
    #[display(fmt = "pink")]
    Pink,
    #[display(fmt = "purple")]
    Purple,
    #[display(fmt = "blue")]
    Blue,
    #[display(fmt = "lighter blue")]
    LighterBlue,
    #[display(fmt = "blue-ish green-ish")]
    BlueGreen,
    #[display(fmt = "green")]
    Green,
    #[display(fmt = "green-ish yellow-ish")]
    GreenYellow,
    #[display(fmt = "yellow")]
    Yellow,
    #[display(fmt = "orange")]
    Orange,
}

impl TileColor {
    /// The exact channel values of the colour.
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Black => Rgb::new(0, 0, 0),
            Self::White => Rgb::new(255, 255, 255),
            Self::Red => Rgb::new(208, 35, 35),
            Self::Pink => Rgb::new(209, 136, 192),
            Self::Purple => Rgb::new(125, 36, 209),
            Self::Blue => Rgb::new(52, 36, 209),
            Self::LighterBlue => Rgb::new(36, 167, 209),
            Self::BlueGreen => Rgb::new(36, 209, 136),
            Self::Green => Rgb::new(42, 209, 36),
            Self::GreenYellow => Rgb::new(159, 209, 36),
            Self::Yellow => Rgb::new(209, 207, 36),
            Self::Orange => Rgb::new(209, 108, 36),
        }
    }

    /// Zero-based position of the colour in the palette.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up the colour at `index`, if the palette has one there.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }
}

/// Iterate over the palette as `(index, colour)` pairs, in palette order.
pub fn palette() -> impl Iterator<Item = (usize, TileColor)> {
    TileColor::iter().enumerate()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn palette_has_twelve_entries() {
        assert_eq!(PALETTE_LEN, 12);
        assert_eq!(TileColor::iter().count(), PALETTE_LEN);
        assert_eq!(palette().count(), PALETTE_LEN);
    }

    #[test]
    fn palette_order_and_values() {
        let expected: [[u8; 3]; PALETTE_LEN] = [
            [0, 0, 0],
            [255, 255, 255],
            [208, 35, 35],
            [209, 136, 192],
            [125, 36, 209],
            [52, 36, 209],
            [36, 167, 209],
            [36, 209, 136],
            [42, 209, 36],
            [159, 209, 36],
            [209, 207, 36],
            [209, 108, 36],
        ];

        let actual: Vec<[u8; 3]> = TileColor::iter().map(|c| c.rgb().into()).collect();
        assert_eq!(actual, expected.to_vec());
    }

    #[test]
    fn palette_len_follows_the_variants() {
        assert_eq!(PALETTE_LEN, TileColor::COUNT);
        assert_eq!(TileColor::Orange.index(), PALETTE_LEN - 1);
    }

    #[test]
    fn index_matches_iteration_order() {
        for (i, color) in palette() {
            assert_eq!(color.index(), i);
            assert_eq!(TileColor::from_index(i), Some(color));
        }
        assert_eq!(TileColor::from_index(PALETTE_LEN), None);
    }

    #[test]
    fn display_uses_informal_names() {
        assert_eq!(TileColor::Black.to_string(), "black");
        assert_eq!(TileColor::LighterBlue.to_string(), "lighter blue");
        assert_eq!(TileColor::GreenYellow.to_string(), "green-ish yellow-ish");
        assert_eq!(TileColor::Red.rgb().to_string(), "(208, 35, 35)");
    }

    #[test]
    fn rgb_array_conversion() {
        let rgb = Rgb::from([1, 2, 3]);
        assert_eq!(rgb, Rgb::new(1, 2, 3));
        assert_eq!(<[u8; 3]>::from(rgb), [1, 2, 3]);
    }
}
