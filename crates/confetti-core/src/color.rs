//! Stroke colors: the fixed flake palette plus alpha-carrying RGBA values

use std::fmt;

/// The 12 base colors confetti flakes draw from.
pub const PALETTE: [(u8, u8, u8); 12] = [
    (30, 144, 255),
    (107, 142, 35),
    (255, 215, 0),
    (255, 192, 203),
    (106, 90, 205),
    (173, 216, 230),
    (238, 130, 238),
    (152, 251, 152),
    (70, 130, 180),
    (244, 164, 96),
    (210, 105, 30),
    (220, 20, 60),
];

/// An RGB color with an alpha channel.
///
/// Displays CSS-style as `rgba(r,g,b,a)`, which is what string-keyed drawing
/// surfaces expect for stroke styles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Palette entry `index % PALETTE.len()` combined with the given alpha.
    pub fn from_palette(index: usize, alpha: f64) -> Self {
        let (r, g, b) = PALETTE[index % PALETTE.len()];
        Self { r, g, b, a: alpha }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}
