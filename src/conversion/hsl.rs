use color_space::{normalize_hue, Srgb};

use crate::models::{Hsl, Rgb};

/// Standard chroma / hue-sector algorithm. Channels are rounded to the
/// nearest integer.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = normalize_hue(hsl.h) / 60.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let m = l - chroma / 2.0;

    let (r, g, b) = if h < 1.0 {
        (chroma, x, 0.0)
    } else if h < 2.0 {
        (x, chroma, 0.0)
    } else if h < 3.0 {
        (0.0, chroma, x)
    } else if h < 4.0 {
        (0.0, x, chroma)
    } else if h < 5.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };

    let [r, g, b] = Srgb::new(r + m, g + m, b + m).to_bytes();
    Rgb::new(r, g, b).with_alpha(hsl.alpha)
}

/// Hue in [0, 360), saturation and lightness in 0-100, unrounded.
/// Grays report hue 0 and saturation 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let delta = max - min;

    if delta == 0.0 {
        return Hsl::new(0.0, 0.0, l * 100.0).with_alpha(rgb.alpha);
    }

    let s = delta / (1.0 - (2.0 * l - 1.0).abs());
    let sector = if max == r {
        (g - b) / delta
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl::new(normalize_hue(sector * 60.0), s * 100.0, l * 100.0).with_alpha(rgb.alpha)
}
