//! This file provides the constants that pin down sRGB, CIELUV, and HSLuv: the two matrices between
//! linear sRGB and CIE XYZ, the D65 reference white in CIE 1976 UCS chromaticity coordinates, and
//! the CIE constants used in the lightness nonlinearity. The matrices are the ones from the reference
//! HSLuv definition rather than ones recomputed from the primaries: the gamut boundary computation is
//! derived from the rows of the XYZ to RGB matrix, so the two must agree to the last digit or colors
//! on the edge of the gamut end up a hair outside it.

use na::Matrix3;

lazy_static! {
    /// CIE XYZ (D65, Y of white = 1) to linear sRGB.
    pub static ref XYZ_TO_SRGB: Matrix3<f64> = Matrix3::new(
        3.240969941904521,
        -1.537383177570093,
        -0.498610760293,
        -0.96924363628087,
        1.87596750150772,
        0.041555057407175,
        0.055630079696993,
        -0.20397695888897,
        1.056971514242878,
    );
    /// Linear sRGB to CIE XYZ (D65, Y of white = 1). The inverse of `XYZ_TO_SRGB`.
    pub static ref SRGB_TO_XYZ: Matrix3<f64> = Matrix3::new(
        0.41239079926595,
        0.35758433938387,
        0.18048078840183,
        0.21263900587151,
        0.71516867876775,
        0.072192315360733,
        0.019330818715591,
        0.11919477979462,
        0.95053215224966,
    );
}

/// Luminance of the reference white.
pub const REF_Y: f64 = 1.0;
/// u' chromaticity of the D65 reference white.
pub const REF_U: f64 = 0.19783000664283;
/// v' chromaticity of the D65 reference white.
pub const REF_V: f64 = 0.46831999493879;

/// CIE kappa, 24389/27: the slope of the linear part of the lightness function.
pub const KAPPA: f64 = 903.2962962;
/// CIE epsilon, 216/24389: the relative luminance where the lightness function switches from linear
/// to cube root.
pub const EPSILON: f64 = 0.0088564516;
