#![allow(clippy::excessive_precision, clippy::manual_range_contains)]

//! color-space: exact numeric color conversions
//!
//! This crate holds the floating point core of huecraft. It knows nothing
//! about hex tokens, CSS, alpha or export formats; it only moves numbers
//! between color spaces.
//!
//! # Quick Start
//!
//! ```
//! use color_space::{LinearRgb, Oklab, Oklch, Srgb};
//!
//! let red = Srgb::from_u8(255, 0, 0);
//! let lch = Oklch::from(Oklab::from(LinearRgb::from(red)));
//! assert!(lch.h.is_some());
//!
//! let back = Srgb::from(LinearRgb::from(Oklab::from(lch)));
//! assert_eq!(back.to_bytes(), [255, 0, 0]);
//! ```
//!
//! # Color Spaces
//!
//! | Color Space | Key Property | Used For |
//! |-------------|--------------|----------|
//! | **sRGB** | Standard encoding (IEC 61966-2-1) | 8-bit channels, hex, WCAG input |
//! | **Linear RGB** | Proportional to light intensity | Relative luminance, OKLab input |
//! | **OKLab** | Perceptually uniform distances | Cartesian step between linear RGB and OKLCH |
//! | **OKLCH** | Polar OKLab | Hue rotation, lightness/chroma steps |
//!
//! ```text
//! Srgb  <--gamma-->  LinearRgb  <--M1/M2-->  Oklab  <--polar-->  Oklch
//! ```
//!
//! The transfer functions in [`transfer`] are the exact piecewise formulas,
//! evaluated in `f64`.
//!
//! # Achromatic Hue
//!
//! [`Oklch::h`] is `Option<f64>`. A chroma below [`ACHROMATIC_CHROMA`]
//! yields `None`; there is no NaN sentinel anywhere in this crate.

mod linear_rgb;
mod oklab;
mod oklch;
mod srgb;
pub mod transfer;

pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use oklch::{normalize_hue, Oklch, ACHROMATIC_CHROMA};
pub use srgb::Srgb;
