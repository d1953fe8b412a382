//! Linear sRGB: the sRGB primaries without the gamma curve. This is the space where the move to and
//! from CIE XYZ is a plain matrix multiplication.

use color::{Color, XYZColor};
use consts::{SRGB_TO_XYZ, XYZ_TO_SRGB};
use na::Vector3;

/// A color in linear sRGB, with channels proportional to the light emitted by each primary. Like
/// [`RGBColor`], channels between 0 and 1 are in gamut and anything else is not.
///
/// [`RGBColor`]: ../../color/struct.RGBColor.html
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRGBColor {
    /// The red primary component.
    pub r: f64,
    /// The green primary component.
    pub g: f64,
    /// The blue primary component.
    pub b: f64,
}

impl Color for LinearRGBColor {
    fn from_xyz(xyz: XYZColor) -> LinearRGBColor {
        let rgb = *XYZ_TO_SRGB * Vector3::new(xyz.x, xyz.y, xyz.z);
        LinearRGBColor {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
        }
    }
    fn to_xyz(&self) -> XYZColor {
        let xyz = *SRGB_TO_XYZ * Vector3::new(self.r, self.g, self.b);
        XYZColor {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }
}
