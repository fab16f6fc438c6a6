//! sRGB color type
//!
//! sRGB is the gamma-encoded space that 8-bit channels, hex tokens and CSS
//! `rgb()` values live in.

use super::linear_rgb::LinearRgb;
use crate::transfer::linear_to_srgb;

/// A color in sRGB color space.
///
/// Values are in the range 0.0..=1.0 (mapping to 0..255 for 8-bit) for
/// in-gamut colors. Nothing here clamps except [`Srgb::to_bytes`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-encoded)
    pub r: f64,
    /// Green channel (gamma-encoded)
    pub g: f64,
    /// Blue channel (gamma-encoded)
    pub b: f64,
}

impl Srgb {
    /// Create a new Srgb color from float values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit unsigned integer values.
    ///
    /// # Example
    /// ```
    /// use color_space::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// Create an Srgb color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    ///
    /// Rounds to the nearest integer and saturates to 0..=255. NaN
    /// channels become 0.
    ///
    /// # Example
    /// ```
    /// use color_space::Srgb;
    /// let color = Srgb::new(1.0, 0.5, 0.0);
    /// assert_eq!(color.to_bytes(), [255, 128, 0]);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
        ]
    }
}

/// Scale a 0.0..=1.0 channel to a rounded, saturated byte.
#[inline]
pub(crate) fn channel_to_u8(value: f64) -> u8 {
    // `as` saturates and maps NaN to 0.
    (value * 255.0).round() as u8
}

impl From<LinearRgb> for Srgb {
    /// Gamma-encode linear light with the exact IEC 61966-2-1 curve.
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: linear_to_srgb(linear.r),
            g: linear_to_srgb(linear.g),
            b: linear_to_srgb(linear.b),
        }
    }
}
