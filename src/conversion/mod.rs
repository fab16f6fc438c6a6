//! Conversion between the five color representations.
//!
//! Every conversion goes through [`Rgb`] as the pivot: `X -> RGB -> Y`.
//! Converting to the color's own space is a plain clone. The OKLCH path
//! additionally passes through linear-light sRGB and OKLab inside
//! `color_space`.
//!
//! Conversions are permissive: out-of-range HSL, CMYK or OKLCH input is not
//! rejected. The RGB sink is the one clamp point; it rounds to the nearest
//! integer and saturates into `u8`.

mod cmyk;
mod hex;
mod hsl;
mod oklch;

pub use cmyk::{cmyk_to_rgb, rgb_to_cmyk};
pub use hex::{hex_to_rgb, rgb_to_hex};
pub use hsl::{hsl_to_rgb, rgb_to_hsl};
pub use oklch::{oklch_to_rgb, rgb_to_oklch};

use crate::models::{Cmyk, Color, ColorSpace, Hex, Hsl, Oklch, Rgb};

/// Convert `color` into the `target` representation.
///
/// Alpha is carried to every target that has an alpha slot (CMYK drops it).
pub fn convert_color(color: &Color, target: ColorSpace) -> Color {
    if color.space() == target {
        return color.clone();
    }

    tracing::trace!(from = %color.space(), to = %target, "Converting color");

    let rgb = color.to_rgb();
    match target {
        ColorSpace::Hex => Color::Hex(rgb_to_hex(rgb)),
        ColorSpace::Rgb => Color::Rgb(rgb),
        ColorSpace::Hsl => Color::Hsl(rgb_to_hsl(rgb)),
        ColorSpace::Cmyk => Color::Cmyk(rgb_to_cmyk(rgb)),
        ColorSpace::Oklch => Color::Oklch(rgb_to_oklch(rgb)),
    }
}

impl Color {
    /// The RGB pivot for this color.
    pub fn to_rgb(&self) -> Rgb {
        match self {
            Color::Hex(hex) => hex_to_rgb(hex),
            Color::Rgb(rgb) => *rgb,
            Color::Hsl(hsl) => hsl_to_rgb(*hsl),
            Color::Cmyk(cmyk) => cmyk_to_rgb(*cmyk),
            Color::Oklch(lch) => oklch_to_rgb(*lch),
        }
    }

    pub fn to_hex(&self) -> Hex {
        match self {
            Color::Hex(hex) => hex.clone(),
            other => rgb_to_hex(other.to_rgb()),
        }
    }

    pub fn to_hsl(&self) -> Hsl {
        match self {
            Color::Hsl(hsl) => *hsl,
            other => rgb_to_hsl(other.to_rgb()),
        }
    }

    pub fn to_cmyk(&self) -> Cmyk {
        match self {
            Color::Cmyk(cmyk) => *cmyk,
            other => rgb_to_cmyk(other.to_rgb()),
        }
    }

    pub fn to_oklch(&self) -> Oklch {
        match self {
            Color::Oklch(lch) => *lch,
            other => rgb_to_oklch(other.to_rgb()),
        }
    }

    /// Shorthand for [`convert_color`].
    pub fn convert(&self, target: ColorSpace) -> Color {
        convert_color(self, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_rgbs() -> Vec<Rgb> {
        let mut out = Vec::new();
        for r in (0..=255u16).step_by(51) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(85) {
                    out.push(Rgb::new(r as u8, g as u8, b as u8));
                }
            }
        }
        out.push(Rgb::new(1, 2, 3));
        out.push(Rgb::new(254, 253, 252));
        out
    }

    fn assert_close(a: Rgb, b: Rgb) {
        let close = |x: u8, y: u8| (i16::from(x) - i16::from(y)).abs() <= 1;
        assert!(
            close(a.r, b.r) && close(a.g, b.g) && close(a.b, b.b),
            "{a:?} vs {b:?}"
        );
    }

    #[test]
    fn test_same_space_is_identity() {
        let colors = [
            Color::hex("#AbC").unwrap(),
            Color::rgb(1, 2, 3),
            Color::hsl(400.0, 10.0, 10.0),
            Color::cmyk(1.0, 2.0, 3.0, 4.0),
            Color::oklch(0.5, 0.1, None),
        ];
        for color in colors {
            assert_eq!(convert_color(&color, color.space()), color);
        }
    }

    #[test]
    fn test_every_pair_round_trips() {
        let base = Color::rgb(200, 120, 40);
        for from in ColorSpace::ALL {
            for to in ColorSpace::ALL {
                let there = convert_color(&base, from);
                let other = convert_color(&there, to);
                assert_eq!(other.space(), to);
                assert_close(other.to_rgb(), base.to_rgb());
            }
        }
    }

    #[test]
    fn test_rgb_hsl_rgb_round_trip() {
        for rgb in sample_rgbs() {
            let back = Color::Hsl(rgb_to_hsl(rgb)).to_rgb();
            assert_close(back, rgb);
        }
    }

    #[test]
    fn test_rgb_oklch_rgb_round_trip() {
        for rgb in sample_rgbs() {
            let back = Color::Oklch(rgb_to_oklch(rgb)).to_rgb();
            assert_close(back, rgb);
        }
    }

    #[test]
    fn test_hex_expansion_matches() {
        let short = Color::hex("#fff").unwrap().to_rgb();
        let long = Color::hex("#ffffff").unwrap().to_rgb();
        assert_eq!(short, long);
        assert_eq!(short, Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_alpha_is_carried() {
        let rgba = Color::rgb(10, 20, 30).with_alpha(Some(0.25));
        for target in [ColorSpace::Hex, ColorSpace::Hsl, ColorSpace::Oklch] {
            assert_eq!(convert_color(&rgba, target).alpha(), Some(0.25));
        }
        assert_eq!(convert_color(&rgba, ColorSpace::Cmyk).alpha(), None);
    }

    #[test]
    fn test_gray_to_oklch_is_achromatic() {
        let lch = Color::rgb(128, 128, 128).to_oklch();
        assert_eq!(lch.h, None);
        assert!(lch.c < 1e-4);
    }

    #[test]
    fn test_permissive_out_of_range() {
        // Saturation above 100 is not rejected; the RGB sink saturates.
        let wild = Color::hsl(0.0, 250.0, 50.0).to_rgb();
        assert_eq!(wild.r, 255);
        let nan = Color::oklch(f64::NAN, 0.1, Some(10.0)).to_rgb();
        assert_eq!(nan, Rgb::new(0, 0, 0));
    }
}
