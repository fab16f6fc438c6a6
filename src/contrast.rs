//! WCAG 2.1 contrast auditing.
//!
//! Luminance is measured on the 8-bit RGB conversion of a color, using the
//! exact sRGB transfer function. Adjustments made by [`ensure_readable`]
//! happen in OKLCH lightness, where steps are perceptually even.

use color_space::transfer::srgb_to_linear;
use serde::Serialize;
use std::fmt;

use crate::models::{Color, Oklch};

pub const AA_NORMAL: f64 = 4.5;
pub const AA_LARGE: f64 = 3.0;
pub const AAA_NORMAL: f64 = 7.0;
pub const AAA_LARGE: f64 = 4.5;

/// Relative luminance in [0, 1]: `0.2126 R + 0.7152 G + 0.0722 B` over
/// linearized channels.
pub fn relative_luminance(color: &Color) -> f64 {
    let [r, g, b] = color.to_rgb().to_bytes();
    let lin = |v: u8| srgb_to_linear(f64::from(v) / 255.0);
    0.2126 * lin(r) + 0.7152 * lin(g) + 0.0722 * lin(b)
}

/// `(L_lighter + 0.05) / (L_darker + 0.05)`, always in [1, 21] and
/// independent of argument order.
pub fn contrast_ratio(a: &Color, b: &Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContrastLevel {
    Aaa,
    Aa,
    Fail,
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContrastLevel::Aaa => "AAA",
            ContrastLevel::Aa => "AA",
            ContrastLevel::Fail => "Fail",
        })
    }
}

/// Pass/fail flags for one foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    pub ratio: f64,
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
    pub normal_level: ContrastLevel,
    pub large_level: ContrastLevel,
}

impl ContrastResult {
    /// Apply the WCAG thresholds to a ratio. Every comparison is `>=`.
    pub fn from_ratio(ratio: f64) -> Self {
        let aa_normal = ratio >= AA_NORMAL;
        let aa_large = ratio >= AA_LARGE;
        let aaa_normal = ratio >= AAA_NORMAL;
        let aaa_large = ratio >= AAA_LARGE;

        Self {
            ratio,
            aa_normal,
            aa_large,
            aaa_normal,
            aaa_large,
            normal_level: level(aaa_normal, aa_normal),
            large_level: level(aaa_large, aa_large),
        }
    }
}

fn level(aaa: bool, aa: bool) -> ContrastLevel {
    if aaa {
        ContrastLevel::Aaa
    } else if aa {
        ContrastLevel::Aa
    } else {
        ContrastLevel::Fail
    }
}

pub fn check_contrast(foreground: &Color, background: &Color) -> ContrastResult {
    ContrastResult::from_ratio(contrast_ratio(foreground, background))
}

/// White and black text evaluated against one background.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastScorecard {
    pub white: ContrastResult,
    pub black: ContrastResult,
    pub recommendations: Vec<String>,
}

fn band(ratio: f64) -> &'static str {
    if ratio >= AAA_NORMAL {
        "meets AAA"
    } else if ratio >= AA_NORMAL {
        "meets AA"
    } else if ratio >= AA_LARGE {
        "use large text only"
    } else {
        "very low contrast"
    }
}

pub fn contrast_scorecard(background: &Color) -> ContrastScorecard {
    let white = check_contrast(&Color::WHITE, background);
    let black = check_contrast(&Color::BLACK, background);

    // Ties go to white.
    let best = if white.ratio >= black.ratio {
        "white"
    } else {
        "black"
    };

    let recommendations = vec![
        format!("White text: {} ({:.2}:1)", band(white.ratio), white.ratio),
        format!("Black text: {} ({:.2}:1)", band(black.ratio), black.ratio),
        format!("Use {best} text for the best contrast"),
    ];

    ContrastScorecard {
        white,
        black,
        recommendations,
    }
}

/// Move the foreground's OKLCH lightness until it reaches `min_ratio`
/// against `background`, staying as close to the original lightness as
/// possible. Hue is kept; chroma is reduced only as far as the sRGB gamut
/// requires.
///
/// Dark backgrounds (where white out-scores black) push the foreground
/// lighter, light backgrounds push it darker. If no lightness reaches the
/// target, the extreme in that direction is returned. The result is always
/// `Color::Oklch` with the foreground's alpha.
pub fn ensure_readable(foreground: &Color, background: &Color, min_ratio: f64) -> Color {
    let fg = foreground.to_oklch();
    if contrast_ratio(foreground, background) >= min_ratio {
        return Color::Oklch(fg);
    }

    let lighten =
        contrast_ratio(&Color::WHITE, background) >= contrast_ratio(&Color::BLACK, background);
    let candidate = |l: f64| Oklch::new(l, fg.c, fg.h).with_alpha(fg.alpha).to_gamut();

    let (mut lo, mut hi) = if lighten { (fg.l, 1.0) } else { (0.0, fg.l) };
    let mut best = candidate(if lighten { 1.0 } else { 0.0 });

    for _ in 0..32 {
        let mid = (lo + hi) * 0.5;
        let trial = candidate(mid);
        if contrast_ratio(&Color::Oklch(trial), background) >= min_ratio {
            best = trial;
            if lighten {
                hi = mid;
            } else {
                lo = mid;
            }
        } else if lighten {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    tracing::debug!(
        from = fg.l,
        to = best.l,
        min_ratio,
        "Adjusted lightness for readability"
    );
    Color::Oklch(best)
}
