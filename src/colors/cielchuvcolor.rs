//! This module implements the CIELCHuv color space, a cylindrical transformation of the
//! CIELUV space, akin to the relationship between CIELAB and CIELCH.

use super::cieluvcolor::CIELUVColor;
use color::{Color, XYZColor};

/// Chroma below which hue is meaningless and reported as 0.
const ACHROMATIC_CHROMA: f64 = 1e-8;

/// The polar version of CIELUV, analogous to the relationship between CIELCH and CIELAB. Sometimes
/// referred to as CIEHCL, but this crate uses CIELCHuv to be explicit and avoid any confusion.
/// # Example
///
/// ```
/// # use scarlet_hsluv::prelude::*;
/// # use scarlet_hsluv::colors::CIELCHuvColor;
/// // hue-shift red to yellow, keeping same lightness and chroma: ends up out of gamut
/// let red = RGBColor{r: 0.7, g: 0.1, b: 0.1};
/// let red_lch: CIELCHuvColor = red.convert();
/// let mut yellow = red_lch;
/// yellow.h = yellow.h + 60.;
/// let yellow_rgb: RGBColor = yellow.convert();
/// assert!(yellow_rgb.b < 0.);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELCHuvColor {
    /// The lightness component. Exactly the same as CIELUV. Varies between 0 and 100 by definition.
    pub l: f64,
    /// The chroma component: essentially, how colorful the color is compared to white. This is the
    /// radius in cylindrical coordinates, and is never negative.
    pub c: f64,
    /// The hue component, in degrees from 0 to 360. 0 degrees is close to pinkish red, 90 to olive,
    /// 180 to teal, and 270 to purple. Any value outside that range will be interpreted as its value
    /// if one added or subtracted multiples of 360 to bring the value inside that range.
    pub h: f64,
}

impl CIELCHuvColor {
    /// Converts from the Cartesian CIELUV to polar coordinates. Grays get a hue of 0.
    pub fn from_luv(luv: CIELUVColor) -> CIELCHuvColor {
        let c = luv.u.hypot(luv.v);
        let h = if c < ACHROMATIC_CHROMA {
            0.0
        } else {
            let unbounded_h = luv.v.atan2(luv.u).to_degrees();
            // atan2 gives -180 to 180
            if unbounded_h < 0.0 {
                unbounded_h + 360.0
            } else {
                unbounded_h
            }
        };
        CIELCHuvColor { l: luv.l, c, h }
    }

    /// Converts back to Cartesian CIELUV.
    pub fn to_luv(&self) -> CIELUVColor {
        let rad_h = self.h.to_radians();
        CIELUVColor {
            l: self.l,
            u: self.c * rad_h.cos(),
            v: self.c * rad_h.sin(),
        }
    }
}

impl Color for CIELCHuvColor {
    /// Converts from XYZ to CIELCHuv through CIELUV.
    fn from_xyz(xyz: XYZColor) -> CIELCHuvColor {
        CIELCHuvColor::from_luv(CIELUVColor::from_xyz(xyz))
    }
    /// Gets the XYZ color that corresponds to this one, through CIELUV.
    fn to_xyz(&self) -> XYZColor {
        self.to_luv().to_xyz()
    }
}
