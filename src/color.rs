//! RGBA colors and the interpolation helpers used to combine them

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGBA color
///
/// Serializes as a `[r, g, b, a]` array so palette files stay compact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Blend toward `other` by `t` (0 = self, 1 = other)
    #[inline]
    pub fn mix(self, other: Self, t: f64) -> Self {
        mix(self, other, t)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<Color> for [u8; 4] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

/// Linear interpolation between two scalars
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Per-channel linear blend of two colors
///
/// Channels round half to even, so a midpoint like 12.5 lands on 12.
pub fn mix(c0: Color, c1: Color, t: f64) -> Color {
    let ch = |a: u8, b: u8| lerp(a as f64, b as f64, t).round_ties_even().clamp(0.0, 255.0) as u8;
    Color::rgba(
        ch(c0.r, c1.r),
        ch(c0.g, c1.g),
        ch(c0.b, c1.b),
        ch(c0.a, c1.a),
    )
}
