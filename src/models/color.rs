use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::validation::validate_hex;

/// A color in one of the five supported representations.
///
/// Values are immutable; every operation in the crate returns a new `Color`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "space", rename_all = "lowercase")]
pub enum Color {
    Hex(Hex),
    Rgb(Rgb),
    Hsl(Hsl),
    Cmyk(Cmyk),
    Oklch(Oklch),
}

/// Representation selector for conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    Hex,
    Rgb,
    Hsl,
    Cmyk,
    Oklch,
}

impl ColorSpace {
    pub const ALL: [ColorSpace; 5] = [
        ColorSpace::Hex,
        ColorSpace::Rgb,
        ColorSpace::Hsl,
        ColorSpace::Cmyk,
        ColorSpace::Oklch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorSpace::Hex => "hex",
            ColorSpace::Rgb => "rgb",
            ColorSpace::Hsl => "hsl",
            ColorSpace::Cmyk => "cmyk",
            ColorSpace::Oklch => "oklch",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorSpace {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ColorSpace::ALL
            .into_iter()
            .find(|space| space.as_str() == lower)
            .ok_or_else(|| ColorError::UnknownSpace(s.to_string()))
    }
}

/// A validated `#RGB` / `#RRGGBB` token. Alpha is kept beside the token,
/// never encoded in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHex")]
pub struct Hex {
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alpha: Option<f64>,
}

#[derive(Deserialize)]
struct RawHex {
    value: String,
    #[serde(default)]
    alpha: Option<f64>,
}

impl TryFrom<RawHex> for Hex {
    type Error = ColorError;

    fn try_from(raw: RawHex) -> Result<Self, Self::Error> {
        Ok(Hex::parse(&raw.value)?.with_alpha(raw.alpha))
    }
}

impl Hex {
    /// Parse a hex token. Surrounding whitespace is trimmed; case is kept.
    pub fn parse(token: &str) -> Result<Self, ColorError> {
        let token = token.trim();
        if !validate_hex(token) {
            return Err(ColorError::InvalidHex(token.to_string()));
        }
        Ok(Self {
            value: token.to_string(),
            alpha: None,
        })
    }

    /// Build from bytes as a lowercase `#rrggbb` token.
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self {
            value: format!("#{}", hex::encode(bytes)),
            alpha: None,
        }
    }

    pub fn with_alpha(self, alpha: Option<f64>) -> Self {
        Self { alpha, ..self }
    }

    /// The token including its leading `#`.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn alpha(&self) -> Option<f64> {
        self.alpha
    }

    /// Channel bytes; 3-digit tokens double each nibble (`f` -> `ff`).
    pub fn to_bytes(&self) -> [u8; 3] {
        let digits = &self.value[1..];
        let expanded: String = if digits.len() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_string()
        };

        let mut bytes = [0u8; 3];
        // Validated on construction.
        if hex::decode_to_slice(&expanded, &mut bytes).is_err() {
            tracing::warn!(token = %self.value, "Hex token failed to decode");
        }
        bytes
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// 8-bit sRGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: None,
        }
    }

    pub const fn with_alpha(self, alpha: Option<f64>) -> Self {
        Self { alpha, ..self }
    }

    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Hue 0-360 (wraps), saturation and lightness 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h,
            s,
            l,
            alpha: None,
        }
    }

    pub const fn with_alpha(self, alpha: Option<f64>) -> Self {
        Self { alpha, ..self }
    }
}

/// Subtractive channels, each 0-100. CMYK carries no alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }
}

/// Lightness 0-1, chroma 0-0.4 (soft ceiling), hue in degrees or `None`
/// for achromatic colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

impl Oklch {
    pub const fn new(l: f64, c: f64, h: Option<f64>) -> Self {
        Self {
            l,
            c,
            h,
            alpha: None,
        }
    }

    pub const fn with_alpha(self, alpha: Option<f64>) -> Self {
        Self { alpha, ..self }
    }

    pub const fn is_achromatic(&self) -> bool {
        self.h.is_none()
    }
}

impl Color {
    pub const WHITE: Color = Color::Rgb(Rgb::new(255, 255, 255));
    pub const BLACK: Color = Color::Rgb(Rgb::new(0, 0, 0));

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(Rgb::new(r, g, b))
    }

    pub fn hex(token: &str) -> Result<Self, ColorError> {
        Hex::parse(token).map(Color::Hex)
    }

    pub const fn hsl(h: f64, s: f64, l: f64) -> Self {
        Color::Hsl(Hsl::new(h, s, l))
    }

    pub const fn cmyk(c: f64, m: f64, y: f64, k: f64) -> Self {
        Color::Cmyk(Cmyk::new(c, m, y, k))
    }

    pub const fn oklch(l: f64, c: f64, h: Option<f64>) -> Self {
        Color::Oklch(Oklch::new(l, c, h))
    }

    pub fn space(&self) -> ColorSpace {
        match self {
            Color::Hex(_) => ColorSpace::Hex,
            Color::Rgb(_) => ColorSpace::Rgb,
            Color::Hsl(_) => ColorSpace::Hsl,
            Color::Cmyk(_) => ColorSpace::Cmyk,
            Color::Oklch(_) => ColorSpace::Oklch,
        }
    }

    pub fn is_hex(&self) -> bool {
        matches!(self, Color::Hex(_))
    }

    pub fn is_rgb(&self) -> bool {
        matches!(self, Color::Rgb(_))
    }

    pub fn is_hsl(&self) -> bool {
        matches!(self, Color::Hsl(_))
    }

    pub fn is_cmyk(&self) -> bool {
        matches!(self, Color::Cmyk(_))
    }

    pub fn is_oklch(&self) -> bool {
        matches!(self, Color::Oklch(_))
    }

    /// Alpha if the variant carries one. `None` means fully opaque.
    pub fn alpha(&self) -> Option<f64> {
        match self {
            Color::Hex(hex) => hex.alpha(),
            Color::Rgb(rgb) => rgb.alpha,
            Color::Hsl(hsl) => hsl.alpha,
            Color::Cmyk(_) => None,
            Color::Oklch(lch) => lch.alpha,
        }
    }

    /// A copy with the given alpha. CMYK has no alpha slot and is returned
    /// unchanged.
    pub fn with_alpha(&self, alpha: Option<f64>) -> Self {
        match self {
            Color::Hex(hex) => Color::Hex(hex.clone().with_alpha(alpha)),
            Color::Rgb(rgb) => Color::Rgb(rgb.with_alpha(alpha)),
            Color::Hsl(hsl) => Color::Hsl(hsl.with_alpha(alpha)),
            Color::Cmyk(cmyk) => Color::Cmyk(*cmyk),
            Color::Oklch(lch) => Color::Oklch(lch.with_alpha(alpha)),
        }
    }
}

impl From<Hex> for Color {
    fn from(hex: Hex) -> Self {
        Color::Hex(hex)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Color::Hsl(hsl)
    }
}

impl From<Cmyk> for Color {
    fn from(cmyk: Cmyk) -> Self {
        Color::Cmyk(cmyk)
    }
}

impl From<Oklch> for Color {
    fn from(lch: Oklch) -> Self {
        Color::Oklch(lch)
    }
}
