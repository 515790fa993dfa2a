//! Color representation for command annotations

use std::fmt;

/// An 8-bit per channel RGBA color
///
/// Prism reads colors as four integers in the range [0, 255], so this is
/// what command annotations write: `r g b a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a color from RGBA components
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Create an opaque color from RGB components
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color::new(r, g, b, 255)
    }

    /// Create a color from normalized float components in [0, 1].
    /// Components are clamped then scaled to [0, 255]
    pub fn from_unit_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        let scale = |c: f64| (c.clamp(0.0, 1.0) * 255.0) as u8;
        Color::new(scale(r), scale(g), scale(b), scale(a))
    }

    /// Components as an array
    pub const fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Same color with a different alpha
    pub const fn with_alpha(&self, a: u8) -> Self {
        Color::new(self.r, self.g, self.b, a)
    }

    /// Common color constants
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const RED: Color = Color::from_rgb(255, 0, 0);
    pub const GREEN: Color = Color::from_rgb(0, 255, 0);
    pub const BLUE: Color = Color::from_rgb(0, 0, 255);
    pub const YELLOW: Color = Color::from_rgb(255, 255, 0);
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl From<[u8; 4]> for Color {
    fn from(c: [u8; 4]) -> Self {
        Color::new(c[0], c[1], c[2], c[3])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGBA({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
