//! Oklch polar color space for hue and lightness manipulation.
//!
//! Oklch is the polar form of Oklab:
//! - **L** (Lightness): Same as Oklab L
//! - **C** (Chroma): distance from the neutral axis, `sqrt(a^2 + b^2)`
//! - **h** (Hue): angle in degrees, `atan2(b, a)` normalized to [0, 360)
//!
//! Hue is `None` for achromatic colors. `atan2(0, 0)` returns 0 in Rust,
//! which would make gray indistinguishable from a red hue.

use crate::{LinearRgb, Oklab, Srgb};

/// Chroma below this value is treated as achromatic (hue `None`).
pub const ACHROMATIC_CHROMA: f64 = 1e-4;

/// Gamut tolerance used by [`Oklch::in_srgb_gamut`].
const GAMUT_EPSILON: f64 = 1e-6;

/// Normalize an angle in degrees to [0, 360).
#[inline]
pub fn normalize_hue(degrees: f64) -> f64 {
    let h = degrees.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Oklch: Polar form of Oklab (Lightness, Chroma, Hue).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white)
    pub l: f64,
    /// Chroma: 0.0 (gray) to about 0.37 for sRGB colors
    pub c: f64,
    /// Hue in degrees, `None` when achromatic
    pub h: Option<f64>,
}

impl Oklch {
    /// Build an Oklch color, normalizing the hue and dropping it when the
    /// chroma is below [`ACHROMATIC_CHROMA`].
    ///
    /// ```
    /// use color_space::Oklch;
    ///
    /// assert_eq!(Oklch::new(0.5, 0.1, Some(-90.0)).h, Some(270.0));
    /// assert_eq!(Oklch::new(0.5, 0.0, Some(40.0)).h, None);
    /// ```
    #[inline]
    pub fn new(l: f64, c: f64, h: Option<f64>) -> Self {
        let h = if c.abs() < ACHROMATIC_CHROMA {
            None
        } else {
            h.map(normalize_hue)
        };
        Self { l, c, h }
    }

    /// Whether the hue carries no meaning.
    #[inline]
    pub fn is_achromatic(self) -> bool {
        self.h.is_none()
    }

    /// Rotate the hue by `degrees`. An achromatic hue is read as 0°.
    #[inline]
    pub fn rotate_hue(self, degrees: f64) -> Self {
        Self::new(self.l, self.c, Some(self.h.unwrap_or(0.0) + degrees))
    }

    /// Whether this color maps into the sRGB gamut without clipping.
    pub fn in_srgb_gamut(self) -> bool {
        LinearRgb::from(Oklab::from(self)).in_gamut(GAMUT_EPSILON)
    }

    /// Reduce chroma until the color fits the sRGB gamut.
    ///
    /// Binary search on chroma; lightness and hue are preserved.
    pub fn to_gamut(self) -> Self {
        if self.in_srgb_gamut() {
            return self;
        }

        let mut lo = 0.0;
        let mut hi = self.c;
        for _ in 0..24 {
            let mid = (lo + hi) * 0.5;
            let candidate = Self { c: mid, ..self };
            if candidate.in_srgb_gamut() {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Self::new(self.l, lo, self.h)
    }
}

impl From<Oklab> for Oklch {
    /// Cartesian to polar. Near-zero chroma yields a `None` hue.
    fn from(lab: Oklab) -> Self {
        let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
        let h = lab.b.atan2(lab.a).to_degrees();
        Self::new(lab.l, c, Some(h))
    }
}

impl From<Oklch> for Oklab {
    /// Polar to Cartesian. A `None` hue contributes no chroma.
    fn from(lch: Oklch) -> Self {
        match lch.h {
            Some(h) => {
                let rad = h.to_radians();
                Self::new(lch.l, lch.c * rad.cos(), lch.c * rad.sin())
            }
            None => Self::new(lch.l, 0.0, 0.0),
        }
    }
}

impl From<Srgb> for Oklch {
    fn from(srgb: Srgb) -> Self {
        Oklch::from(Oklab::from(LinearRgb::from(srgb)))
    }
}

impl From<Oklch> for Srgb {
    fn from(lch: Oklch) -> Self {
        Srgb::from(LinearRgb::from(Oklab::from(lch)))
    }
}
