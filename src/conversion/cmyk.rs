use color_space::Srgb;

use crate::models::{Cmyk, Rgb};

/// `k = 1 - max(r, g, b) / 255`, `c = (1 - r' - k) / (1 - k)`, scaled to
/// 0-100. Pure black is `(0, 0, 0, 100)`. Alpha is dropped.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        return Cmyk::new(0.0, 0.0, 0.0, 100.0);
    }

    let c = (1.0 - r - k) / (1.0 - k);
    let m = (1.0 - g - k) / (1.0 - k);
    let y = (1.0 - b - k) / (1.0 - k);

    Cmyk::new(c * 100.0, m * 100.0, y * 100.0, k * 100.0)
}

/// `r = 255 * (1 - c) * (1 - k)`, rounded to the nearest integer.
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let k = 1.0 - cmyk.k / 100.0;
    let [r, g, b] = Srgb::new(
        (1.0 - cmyk.c / 100.0) * k,
        (1.0 - cmyk.m / 100.0) * k,
        (1.0 - cmyk.y / 100.0) * k,
    )
    .to_bytes();
    Rgb::new(r, g, b)
}
