use color_space::Srgb;

use crate::models::{Oklch, Rgb};

/// Gamma decode, OKLab matrices, then polar form. Chroma below
/// [`color_space::ACHROMATIC_CHROMA`] reports a `None` hue.
pub fn rgb_to_oklch(rgb: Rgb) -> Oklch {
    let lch = color_space::Oklch::from(Srgb::from_bytes(rgb.to_bytes()));
    Oklch::new(lch.l, lch.c, lch.h).with_alpha(rgb.alpha)
}

/// A `None` hue contributes no chroma. Out-of-gamut input clips at the
/// byte conversion.
pub fn oklch_to_rgb(lch: Oklch) -> Rgb {
    let polar = color_space::Oklch {
        l: lch.l,
        c: lch.c,
        h: lch.h,
    };
    let [r, g, b] = Srgb::from(polar).to_bytes();
    Rgb::new(r, g, b).with_alpha(lch.alpha)
}

impl Oklch {
    /// Reduce chroma until the color fits the sRGB gamut.
    pub fn to_gamut(self) -> Self {
        let mapped = self.polar().to_gamut();
        Oklch::new(mapped.l, mapped.c, mapped.h).with_alpha(self.alpha)
    }

    /// Rotate the hue, reading an achromatic hue as 0° and re-applying the
    /// achromatic rule afterwards. Lightness, chroma and alpha are kept.
    pub fn rotate_hue(self, degrees: f64) -> Self {
        let rotated = self.polar().rotate_hue(degrees);
        Oklch::new(rotated.l, rotated.c, rotated.h).with_alpha(self.alpha)
    }

    pub fn in_srgb_gamut(self) -> bool {
        self.polar().in_srgb_gamut()
    }

    fn polar(self) -> color_space::Oklch {
        color_space::Oklch {
            l: self.l,
            c: self.c,
            h: self.h,
        }
    }
}
