//! sRGB transfer functions (IEC 61966-2-1)
//!
//! Exact piecewise formulas. Inputs are not clamped: out-of-range values
//! follow the same branches, which keeps conversions permissive.

/// Linear segment threshold on the encoded side.
pub const DECODE_THRESHOLD: f64 = 0.04045;

/// Linear segment threshold on the linear side.
pub const ENCODE_THRESHOLD: f64 = 0.0031308;

/// Decode a gamma-encoded sRGB channel (0.0..=1.0) to linear light.
///
/// `c <= 0.04045 ? c / 12.92 : ((c + 0.055) / 1.055)^2.4`
#[inline]
pub fn srgb_to_linear(srgb: f64) -> f64 {
    if srgb <= DECODE_THRESHOLD {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode a linear light channel (0.0..=1.0) to gamma-encoded sRGB.
///
/// `v > 0.0031308 ? 1.055 * v^(1/2.4) - 0.055 : 12.92 * v`
#[inline]
pub fn linear_to_srgb(linear: f64) -> f64 {
    if linear > ENCODE_THRESHOLD {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * linear
    }
}
