//! This module implements the CIELUV color specification, which was adopted concurrently with
//! CIELAB. CIELUV is very similar to CIELAB, but its chromaticity plane is a projective transform of
//! XYZ, which is what makes the sRGB gamut boundary a set of straight lines in it at any fixed
//! lightness. That property is the whole reason HSLuv is built on it.

use color::{Color, XYZColor};
use consts::{EPSILON, KAPPA, REF_U, REF_V, REF_Y};

/// A similar color system to CIELAB, adapted at the same time and with similar goals. It attempts to
/// be an easy-to-convert color space from XYZ that approaches perceptual uniformity. U and V
/// represent chromaticity and roughly equate to CIELAB's A and B, but they're scaled differently and
/// act slightly differently. This is always CIELUV relative to D65, the white point of sRGB.
/// # Example
///
/// ```
/// # use scarlet_hsluv::prelude::*;
/// # use scarlet_hsluv::colors::CIELUVColor;
/// # use scarlet_hsluv::color::XYZColor;
/// let white: CIELUVColor = XYZColor::white_point().convert();
/// assert!((white.l - 100.).abs() <= 1e-8);
/// assert!(white.u.abs() <= 1e-8);
/// assert!(white.v.abs() <= 1e-8);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELUVColor {
    /// The lightness component of LUV. Ranges from 0 to 100 by definition.
    pub l: f64,
    /// The component of LUV that roughly equates to how red the color is vs. how green it is.
    pub u: f64,
    /// The component of LUV that roughly equates to how yellow vs. blue the color is.
    pub v: f64,
}

/// CIE lightness from relative luminance: linear near black, cube root everywhere else.
fn y_to_l(y: f64) -> f64 {
    if y <= EPSILON {
        y / REF_Y * KAPPA
    } else {
        116.0 * (y / REF_Y).cbrt() - 16.0
    }
}

/// The inverse of `y_to_l`.
fn l_to_y(l: f64) -> f64 {
    if l <= 8.0 {
        REF_Y * l / KAPPA
    } else {
        REF_Y * ((l + 16.0) / 116.0).powi(3)
    }
}

impl Color for CIELUVColor {
    /// Given an XYZ color, gets a new CIELUV color. Black (zero luminance) is handled separately:
    /// its chromaticity is 0/0, and by convention black has no chroma at all.
    fn from_xyz(xyz: XYZColor) -> CIELUVColor {
        // https://en.wikipedia.org/wiki/CIELUV
        let l = y_to_l(xyz.y);
        if l == 0.0 {
            return CIELUVColor {
                l: 0.0,
                u: 0.0,
                v: 0.0,
            };
        }
        let denom = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
        let u_prime = 4.0 * xyz.x / denom;
        let v_prime = 9.0 * xyz.y / denom;

        let u = 13.0 * l * (u_prime - REF_U);
        let v = 13.0 * l * (v_prime - REF_V);
        CIELUVColor { l, u, v }
    }
    /// Returns a new `XYZColor` that matches the given color. L = 0 is black, whatever u and v say.
    fn to_xyz(&self) -> XYZColor {
        if self.l == 0.0 {
            return XYZColor {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            };
        }
        let u_prime = self.u / (13.0 * self.l) + REF_U;
        let v_prime = self.v / (13.0 * self.l) + REF_V;

        let y = l_to_y(self.l);
        let x = y * 9.0 * u_prime / (4.0 * v_prime);
        let z = y * (12.0 - 3.0 * u_prime - 20.0 * v_prime) / (4.0 * v_prime);
        XYZColor { x, y, z }
    }
}
