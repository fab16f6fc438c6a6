//! Assertion helpers for tests.

use huecraft::Color;

/// Assert two colors land on RGB channels at most `tolerance` apart
pub fn assert_rgb_close(actual: &Color, expected: &Color, tolerance: u8) {
    let a = actual.to_rgb();
    let e = expected.to_rgb();
    let close = |x: u8, y: u8| x.abs_diff(y) <= tolerance;
    assert!(
        close(a.r, e.r) && close(a.g, e.g) && close(a.b, e.b),
        "Expected {:?} within {} of {:?} (from {:?})",
        a,
        tolerance,
        e,
        actual
    );
}

/// Assert a color converts to the given channels
pub fn assert_rgb(color: &Color, r: u8, g: u8, b: u8) {
    let rgb = color.to_rgb();
    assert_eq!(
        (rgb.r, rgb.g, rgb.b),
        (r, g, b),
        "Expected rgb({r}, {g}, {b}) from {color:?}"
    );
}

/// Assert an OKLCH hue equals `expected` modulo 360
pub fn assert_hue(color: &Color, expected: f64) {
    let h = color
        .to_oklch()
        .h
        .unwrap_or_else(|| panic!("Expected a chromatic color, got {color:?}"));
    let diff = (h - expected).rem_euclid(360.0);
    assert!(
        diff < 1e-6 || diff > 360.0 - 1e-6,
        "Expected hue {expected}, got {h}"
    );
}

/// Assert a contrast ratio lies in the WCAG range
pub fn assert_ratio_in_bounds(ratio: f64) {
    assert!(
        (1.0..=21.0 + 1e-9).contains(&ratio),
        "Contrast ratio {ratio} outside [1, 21]"
    );
}

/// Read a big-endian u32 at `offset`
pub fn be_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes(bytes[offset..offset + 4].try_into().unwrap())
}

/// Read a big-endian u16 at `offset`
pub fn be_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes(bytes[offset..offset + 2].try_into().unwrap())
}
