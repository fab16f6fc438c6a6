//! Range validators.
//!
//! Pure predicates: they never panic and never clamp. NaN fails every check
//! except the OKLCH hue, where `None` is the achromatic marker.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::Color;

fn hex_pattern() -> &'static Regex {
    static HEX: OnceLock<Regex> = OnceLock::new();
    HEX.get_or_init(|| {
        Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex pattern is valid")
    })
}

#[inline]
fn in_range(value: f64, lo: f64, hi: f64) -> bool {
    value >= lo && value <= hi
}

/// `#` followed by exactly 3 or 6 hex digits.
pub fn validate_hex(s: &str) -> bool {
    hex_pattern().is_match(s)
}

pub fn validate_rgb(r: f64, g: f64, b: f64) -> bool {
    [r, g, b].iter().all(|&v| in_range(v, 0.0, 255.0))
}

pub fn validate_hsl(h: f64, s: f64, l: f64) -> bool {
    in_range(h, 0.0, 360.0) && in_range(s, 0.0, 100.0) && in_range(l, 0.0, 100.0)
}

pub fn validate_cmyk(c: f64, m: f64, y: f64, k: f64) -> bool {
    [c, m, y, k].iter().all(|&v| in_range(v, 0.0, 100.0))
}

/// Chroma is checked against the 0.4 soft ceiling.
pub fn validate_oklch(l: f64, c: f64, h: Option<f64>) -> bool {
    in_range(l, 0.0, 1.0) && in_range(c, 0.0, 0.4) && h.map_or(true, |h| in_range(h, 0.0, 360.0))
}

/// `None` (opaque) or 0..=1.
pub fn validate_alpha(alpha: Option<f64>) -> bool {
    alpha.map_or(true, |a| in_range(a, 0.0, 1.0))
}

impl Color {
    /// Apply the matching validator to this color's fields.
    pub fn validate(&self) -> bool {
        let fields = match self {
            Color::Hex(hex) => validate_hex(hex.as_str()),
            Color::Rgb(rgb) => validate_rgb(f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b)),
            Color::Hsl(hsl) => validate_hsl(hsl.h, hsl.s, hsl.l),
            Color::Cmyk(cmyk) => validate_cmyk(cmyk.c, cmyk.m, cmyk.y, cmyk.k),
            Color::Oklch(lch) => validate_oklch(lch.l, lch.c, lch.h),
        };
        fields && validate_alpha(self.alpha())
    }
}
