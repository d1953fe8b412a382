//! This module implements HSLuv, a reshaping of CIELCHuv into something that behaves like HSL. The
//! hue and lightness are CIELCHuv's, unchanged, so lightness tracks perceived brightness and hue
//! tracks perceived hue far better than in HSL. Saturation is chroma measured as a percentage of the
//! largest chroma sRGB can show at that lightness and hue, so that every combination of hue,
//! saturation between 0 and 100, and lightness between 0 and 100 is a displayable color. The cost is
//! that equal saturations are not equal chromas: 100% saturated yellow is far more colorful than
//! 100% saturated blue at the same lightness.

use super::cielchuvcolor::CIELCHuvColor;
use bound::max_chroma_for_lh;
use color::{Color, XYZColor};

/// A color in HSLuv. See the [module documentation](index.html) for the details.
/// # Example
///
/// ```
/// # use scarlet_hsluv::prelude::*;
/// # use scarlet_hsluv::colors::HSLuvColor;
/// // two colors with the same lightness look equally bright, unlike in HSL
/// let yellow: RGBColor = HSLuvColor{h: 86., s: 100., l: 60.}.convert();
/// let blue: RGBColor = HSLuvColor{h: 265., s: 100., l: 60.}.convert();
/// let yellow_l: HSLuvColor = yellow.convert();
/// let blue_l: HSLuvColor = blue.convert();
/// assert!((yellow_l.l - blue_l.l).abs() <= 1e-8);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLuvColor {
    /// The hue, in degrees from 0 to 360. The same as the hue of CIELCHuv.
    pub h: f64,
    /// The saturation, from 0 to 100: the chroma as a percentage of the most chroma sRGB can
    /// represent at this hue and lightness. Not an absolute measure of colorfulness.
    pub s: f64,
    /// The lightness, from 0 to 100. The same as the lightness of CIELUV.
    pub l: f64,
}

impl HSLuvColor {
    /// Normalizes the chroma of a CIELCHuv color against the sRGB gamut. Black and white have no
    /// room for chroma at all, and come out with 0 saturation whatever their chroma.
    pub fn from_lch(lch: CIELCHuvColor) -> HSLuvColor {
        let max_chroma = max_chroma_for_lh(lch.l, lch.h);
        let s = if max_chroma > 0.0 {
            lch.c / max_chroma * 100.0
        } else {
            0.0
        };
        HSLuvColor {
            h: lch.h,
            s,
            l: lch.l,
        }
    }

    /// Scales saturation back into chroma for the hue and lightness of this color.
    pub fn to_lch(&self) -> CIELCHuvColor {
        CIELCHuvColor {
            l: self.l,
            c: max_chroma_for_lh(self.l, self.h) * self.s / 100.0,
            h: self.h,
        }
    }
}

impl Color for HSLuvColor {
    fn from_xyz(xyz: XYZColor) -> HSLuvColor {
        HSLuvColor::from_lch(CIELCHuvColor::from_xyz(xyz))
    }
    fn to_xyz(&self) -> XYZColor {
        self.to_lch().to_xyz()
    }
}
