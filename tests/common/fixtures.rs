//! Test fixtures and constants.

use huecraft::Color;

/// Hex tokens with known conversions
pub mod hex {
    pub const WHITE_SHORT: &str = "#fff";
    pub const WHITE_LONG: &str = "#ffffff";
    pub const SLATE: &str = "#336699";
    pub const NIGHT: &str = "#1a1b26";
    pub const PAPER: &str = "#f8f8f8";
}

/// Fixed export timestamp so JSON output is stable
pub const EXPORTED_AT: &str = "2024-06-01T12:00:00Z";

pub fn exported_at() -> chrono::DateTime<chrono::Utc> {
    EXPORTED_AT.parse().unwrap()
}

/// A small brand palette covering every representation
pub fn brand_colors() -> Vec<Color> {
    vec![
        Color::hex(hex::SLATE).unwrap(),
        Color::rgb(230, 57, 70),
        Color::hsl(45.0, 90.0, 55.0),
        Color::cmyk(60.0, 0.0, 40.0, 20.0),
        Color::oklch(0.7, 0.12, Some(160.0)),
    ]
}

/// Grid of 8-bit colors for round-trip checks
pub fn rgb_grid() -> Vec<Color> {
    let steps = [0u8, 1, 37, 64, 127, 128, 200, 254, 255];
    let mut colors = Vec::with_capacity(steps.len().pow(3));
    for r in steps {
        for g in steps {
            for b in steps {
                colors.push(Color::rgb(r, g, b));
            }
        }
    }
    colors
}

/// Engine configuration as a caller would ship it
pub const CONFIG_YAML: &str = r#"
default_palette_name: brand
readable_ratio: 7.0
variations:
  steps: 4
  lightness_step: 0.08
  chroma_step: 0.01
"#;
