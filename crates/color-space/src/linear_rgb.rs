//! Linear RGB color type
//!
//! Linear RGB is the color space where light adds physically. WCAG relative
//! luminance and the OKLab matrices both take linear input.

use super::srgb::Srgb;
use crate::transfer::srgb_to_linear;

/// A color in linear RGB color space.
///
/// Values are typically in the range 0.0..=1.0, but may exceed this range
/// for out-of-gamut OKLab input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Whether every channel lies in 0.0..=1.0, within `epsilon`.
    #[inline]
    pub fn in_gamut(self, epsilon: f64) -> bool {
        let lo = -epsilon;
        let hi = 1.0 + epsilon;
        self.r >= lo && self.r <= hi && self.g >= lo && self.g <= hi && self.b >= lo && self.b <= hi
    }
}

impl From<Srgb> for LinearRgb {
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}
