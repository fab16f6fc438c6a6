//! Harmony palettes and lightness variations, computed in OKLCH.
//!
//! Rotated colors keep the base's lightness, chroma and alpha and are
//! returned as `Color::Oklch`. The base itself is returned exactly as
//! passed. An achromatic base is rotated from 0° and stays achromatic.

use color_space::ACHROMATIC_CHROMA;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::models::{Color, Oklch, VariationConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    Complementary,
    Triadic,
    Tetradic,
    Analogous,
}

impl PaletteKind {
    pub const ALL: [PaletteKind; 4] = [
        PaletteKind::Complementary,
        PaletteKind::Triadic,
        PaletteKind::Tetradic,
        PaletteKind::Analogous,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaletteKind::Complementary => "complementary",
            PaletteKind::Triadic => "triadic",
            PaletteKind::Tetradic => "tetradic",
            PaletteKind::Analogous => "analogous",
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteKind {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        PaletteKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| ColorError::UnknownPaletteKind(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    #[serde(rename = "type")]
    pub kind: PaletteKind,
    pub colors: Vec<Color>,
}

/// Every harmony for one base color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllPalettes {
    pub complementary: Palette,
    pub triadic: Palette,
    pub tetradic: Palette,
    pub analogous: Palette,
}

impl AllPalettes {
    pub fn get(&self, kind: PaletteKind) -> &Palette {
        match kind {
            PaletteKind::Complementary => &self.complementary,
            PaletteKind::Triadic => &self.triadic,
            PaletteKind::Tetradic => &self.tetradic,
            PaletteKind::Analogous => &self.analogous,
        }
    }
}

fn rotated(base: &Color, degrees: f64) -> Color {
    Color::Oklch(base.to_oklch().rotate_hue(degrees))
}

/// `[base, h + 180]`
pub fn generate_complementary(base: &Color) -> Palette {
    Palette {
        kind: PaletteKind::Complementary,
        colors: vec![base.clone(), rotated(base, 180.0)],
    }
}

/// `[base, h + 120, h + 240]`
pub fn generate_triadic(base: &Color) -> Palette {
    Palette {
        kind: PaletteKind::Triadic,
        colors: vec![base.clone(), rotated(base, 120.0), rotated(base, 240.0)],
    }
}

/// `[base, h + 90, h + 180, h + 270]`
pub fn generate_tetradic(base: &Color) -> Palette {
    Palette {
        kind: PaletteKind::Tetradic,
        colors: vec![
            base.clone(),
            rotated(base, 90.0),
            rotated(base, 180.0),
            rotated(base, 270.0),
        ],
    }
}

/// `[h - 30, base, h + 30]`
pub fn generate_analogous(base: &Color) -> Palette {
    Palette {
        kind: PaletteKind::Analogous,
        colors: vec![rotated(base, -30.0), base.clone(), rotated(base, 30.0)],
    }
}

pub fn generate_palette(kind: PaletteKind, base: &Color) -> Palette {
    match kind {
        PaletteKind::Complementary => generate_complementary(base),
        PaletteKind::Triadic => generate_triadic(base),
        PaletteKind::Tetradic => generate_tetradic(base),
        PaletteKind::Analogous => generate_analogous(base),
    }
}

pub fn generate_all_palettes(base: &Color) -> AllPalettes {
    AllPalettes {
        complementary: generate_complementary(base),
        triadic: generate_triadic(base),
        tetradic: generate_tetradic(base),
        analogous: generate_analogous(base),
    }
}

/// Lighter and darker steps around a base, nearest step first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variations {
    pub lighter: Vec<Color>,
    pub darker: Vec<Color>,
}

/// Step `i` in `1..=steps` moves lightness by `i * lightness_step` (up for
/// `lighter`, down for `darker`) and lowers chroma by `i * chroma_step` in
/// both directions. Lightness is clamped to [0, 1], chroma to [0, ∞).
pub fn generate_variations(base: &Color, config: &VariationConfig) -> Variations {
    let lch = base.to_oklch();

    let step = |i: usize, direction: f64| {
        let i = i as f64;
        let l = (lch.l + direction * i * config.lightness_step).clamp(0.0, 1.0);
        let c = (lch.c - i * config.chroma_step).max(0.0);
        let h = if c < ACHROMATIC_CHROMA { None } else { lch.h };
        Color::Oklch(Oklch::new(l, c, h).with_alpha(lch.alpha))
    };

    Variations {
        lighter: (1..=config.steps).map(|i| step(i, 1.0)).collect(),
        darker: (1..=config.steps).map(|i| step(i, -1.0)).collect(),
    }
}
