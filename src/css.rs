//! CSS color text: canonical formatting and parsing.

use regex::{Captures, Regex};
use std::sync::OnceLock;

use crate::error::ColorError;
use crate::models::{Color, Hex, Hsl, Oklch, Rgb};
use crate::validation::validate_hex;

const NUM: &str = r"(-?\d*\.?\d+)";

/// Render a number with at most `decimals` places, trailing zeros removed.
fn trim_number(value: f64, decimals: usize) -> String {
    let text = format!("{value:.decimals$}");
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    };
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

fn translucent(alpha: Option<f64>) -> Option<f64> {
    alpha.filter(|a| *a < 1.0)
}

fn rgb_css(rgb: Rgb) -> String {
    match translucent(rgb.alpha) {
        Some(a) => format!("rgba({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, trim_number(a, 3)),
        None => format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b),
    }
}

/// Hue rounded to whole degrees in [0, 360); 359.5 wraps to 0.
pub(crate) fn whole_hue(h: f64) -> i64 {
    (h.round() as i64).rem_euclid(360)
}

fn hsl_css(hsl: Hsl) -> String {
    let h = whole_hue(hsl.h);
    let s = hsl.s.round() as i64;
    let l = hsl.l.round() as i64;
    match translucent(hsl.alpha) {
        Some(a) => format!("hsla({h}, {s}%, {l}%, {})", trim_number(a, 3)),
        None => format!("hsl({h}, {s}%, {l}%)"),
    }
}

fn oklch_css(lch: Oklch) -> String {
    let hue = match lch.h {
        Some(h) => format!("{h:.1}"),
        None => "none".to_string(),
    };
    let body = format!("{:.3} {:.3} {hue}", lch.l, lch.c);
    match translucent(lch.alpha) {
        Some(a) => format!("oklch({body} / {})", trim_number(a, 3)),
        None => format!("oklch({body})"),
    }
}

/// Canonical CSS text for a color.
///
/// Alpha is appended only when present and below 1. A hex token cannot
/// carry alpha, so a translucent hex color renders as `rgba(...)`; CMYK has
/// no CSS form and renders through its RGB conversion.
pub fn color_to_css(color: &Color) -> String {
    match color {
        Color::Hex(hex) if translucent(hex.alpha()).is_some() => rgb_css(color.to_rgb()),
        Color::Hex(hex) => hex.as_str().to_string(),
        Color::Rgb(rgb) => rgb_css(*rgb),
        Color::Hsl(hsl) => hsl_css(*hsl),
        Color::Cmyk(_) => rgb_css(color.to_rgb()),
        Color::Oklch(lch) => oklch_css(*lch),
    }
}

fn rgb_pattern() -> &'static Regex {
    static RGB: OnceLock<Regex> = OnceLock::new();
    RGB.get_or_init(|| {
        let pattern = format!(r"(?i)^rgba?\(\s*{NUM}\s*,\s*{NUM}\s*,\s*{NUM}\s*(?:,\s*{NUM}\s*)?\)$");
        Regex::new(&pattern).expect("rgb pattern is valid")
    })
}

fn hsl_pattern() -> &'static Regex {
    static HSL: OnceLock<Regex> = OnceLock::new();
    HSL.get_or_init(|| {
        let pattern =
            format!(r"(?i)^hsla?\(\s*{NUM}\s*,\s*{NUM}%\s*,\s*{NUM}%\s*(?:,\s*{NUM}\s*)?\)$");
        Regex::new(&pattern).expect("hsl pattern is valid")
    })
}

fn oklch_pattern() -> &'static Regex {
    static OKLCH: OnceLock<Regex> = OnceLock::new();
    OKLCH.get_or_init(|| {
        let pattern = format!(
            r"(?i)^oklch\(\s*{NUM}\s+{NUM}\s+(?:{NUM}|(none))\s*(?:/\s*{NUM}\s*)?\)$"
        );
        Regex::new(&pattern).expect("oklch pattern is valid")
    })
}

fn number(caps: &Captures<'_>, index: usize, input: &str) -> Result<Option<f64>, ColorError> {
    caps.get(index)
        .map(|m| {
            m.as_str()
                .parse::<f64>()
                .map_err(|_| ColorError::InvalidCss(input.to_string()))
        })
        .transpose()
}

fn required(caps: &Captures<'_>, index: usize, input: &str) -> Result<f64, ColorError> {
    number(caps, index, input)?.ok_or_else(|| ColorError::InvalidCss(input.to_string()))
}

fn channel(value: f64, input: &str) -> Result<u8, ColorError> {
    if value.fract() == 0.0 && (0.0..=255.0).contains(&value) {
        Ok(value as u8)
    } else {
        Err(ColorError::InvalidCss(input.to_string()))
    }
}

/// Parse `#RGB`, `#RRGGBB`, `rgb()`/`rgba()`, `hsl()`/`hsla()` or
/// `oklch()` (with `none` hue and `/ alpha`).
///
/// Parsing checks syntax and integer RGB channels only; use
/// [`Color::validate`] for range checks.
pub fn parse_color(input: &str) -> Result<Color, ColorError> {
    let text = input.trim();

    if text.starts_with('#') {
        if validate_hex(text) {
            return Hex::parse(text).map(Color::Hex);
        }
        return Err(ColorError::InvalidCss(input.to_string()));
    }

    if let Some(caps) = rgb_pattern().captures(text) {
        let r = channel(required(&caps, 1, input)?, input)?;
        let g = channel(required(&caps, 2, input)?, input)?;
        let b = channel(required(&caps, 3, input)?, input)?;
        let alpha = number(&caps, 4, input)?;
        return Ok(Color::Rgb(Rgb::new(r, g, b).with_alpha(alpha)));
    }

    if let Some(caps) = hsl_pattern().captures(text) {
        let hsl = Hsl::new(
            required(&caps, 1, input)?,
            required(&caps, 2, input)?,
            required(&caps, 3, input)?,
        );
        return Ok(Color::Hsl(hsl.with_alpha(number(&caps, 4, input)?)));
    }

    if let Some(caps) = oklch_pattern().captures(text) {
        let lch = Oklch::new(
            required(&caps, 1, input)?,
            required(&caps, 2, input)?,
            number(&caps, 3, input)?,
        );
        return Ok(Color::Oklch(lch.with_alpha(number(&caps, 5, input)?)));
    }

    Err(ColorError::InvalidCss(input.to_string()))
}
