use crate::models::{Hex, Rgb};

pub fn hex_to_rgb(hex: &Hex) -> Rgb {
    let [r, g, b] = hex.to_bytes();
    Rgb::new(r, g, b).with_alpha(hex.alpha())
}

/// Lowercase `#rrggbb`; alpha travels beside the token.
pub fn rgb_to_hex(rgb: Rgb) -> Hex {
    Hex::from_bytes(rgb.to_bytes()).with_alpha(rgb.alpha)
}
