//! This file defines the [`Color`] trait, the hub color space [`XYZColor`] that every other space
//! converts through, and [`RGBColor`], the gamma-encoded sRGB color that is the usual entry and exit
//! point of any conversion. Everything here is relative to the D65 white point: sRGB is the only
//! gamut this crate targets, so there is no chromatic adaptation to worry about.
//!
//! [`Color`]: trait.Color.html
//! [`XYZColor`]: struct.XYZColor.html
//! [`RGBColor`]: struct.RGBColor.html

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use colors::linearrgbcolor::LinearRGBColor;
use consts::SRGB_TO_XYZ;
use na::Vector3;
use transfer::{to_gamma, to_linear};

/// A point in the CIE 1931 XYZ color space, relative to the D65 white point and normalized so that
/// white has a Y (luminance) of 1. Every [`Color`] converts to and from this space, which is what
/// lets any two of them interconvert.
///
/// [`Color`]: trait.Color.html
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X axis of the CIE 1931 XYZ space, a mix of the cone responses roughly equivalent to a
    /// red-green curve.
    pub x: f64,
    /// The Y axis: luminance. 0 is black, 1 is the luminance of the reference white.
    pub y: f64,
    /// The Z axis, roughly the blue cone response.
    pub z: f64,
}

impl XYZColor {
    /// The D65 white point, as the XYZ coordinates of sRGB white.
    /// # Example
    ///
    /// ```
    /// # use scarlet_hsluv::color::XYZColor;
    /// let white = XYZColor::white_point();
    /// assert!((white.y - 1.0).abs() <= 1e-10);
    /// assert!((white.x - 0.95046).abs() <= 1e-5);
    /// ```
    pub fn white_point() -> XYZColor {
        let xyz = *SRGB_TO_XYZ * Vector3::new(1.0, 1.0, 1.0);
        XYZColor {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }

    /// Returns `true` if the given color is the same as this one down to floating-point error.
    pub fn approx_equal(&self, other: &XYZColor) -> bool {
        approx_eq!(f64, self.x, other.x, epsilon = 1e-10)
            && approx_eq!(f64, self.y, other.y, epsilon = 1e-10)
            && approx_eq!(f64, self.z, other.z, epsilon = 1e-10)
    }
}

/// A trait that includes any color representation that can be converted to and from the CIE 1931 XYZ
/// color space. Because every implementor goes through the same hub, converting between any two of
/// them is a single call to [`convert`].
///
/// [`convert`]: #method.convert
/// # Example
///
/// ```
/// # use scarlet_hsluv::prelude::*;
/// # use scarlet_hsluv::colors::HSLuvColor;
/// let red = RGBColor{r: 1., g: 0., b: 0.};
/// let red_hsluv: HSLuvColor = red.convert();
/// assert!((red_hsluv.s - 100.).abs() <= 1e-6);
/// let back: RGBColor = red_hsluv.convert();
/// assert_eq!(back.to_string(), "#FF0000");
/// ```
pub trait Color: Sized {
    /// Converts from a color in CIE 1931 XYZ to the given color type.
    fn from_xyz(xyz: XYZColor) -> Self;
    /// Converts from the given color type to a color in CIE 1931 XYZ space.
    fn to_xyz(&self) -> XYZColor;
    /// Converts from one color to another, going through XYZ.
    fn convert<T: Color>(&self) -> T {
        T::from_xyz(self.to_xyz())
    }
}

impl Color for XYZColor {
    fn from_xyz(xyz: XYZColor) -> XYZColor {
        xyz
    }
    fn to_xyz(&self) -> XYZColor {
        *self
    }
}

/// A color in the sRGB color space, gamma-encoded, with each channel as a float nominally between 0
/// and 1. Channels outside of that range describe colors outside of the sRGB gamut: conversions
/// leave them alone, and only the integer accessors (and so the hex code) clamp.
/// # Example
///
/// ```
/// # use scarlet_hsluv::prelude::*;
/// let teal = RGBColor::from_hex_code("#008080").unwrap();
/// assert_eq!(teal.int_rgb_tup(), (0, 128, 128));
/// assert_eq!(teal.to_string(), "#008080");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel.
    pub r: f64,
    /// The green channel.
    pub g: f64,
    /// The blue channel.
    pub b: f64,
}

/// Scales a 0-1 channel to a 0-255 integer, clamping first.
fn channel_to_int(c: f64) -> u8 {
    if c < 0.0 || c > 1.0 {
        trace!("clamping out-of-gamut channel {} to 0-1", c);
    }
    if c <= 0.0 {
        0
    } else if c >= 1.0 {
        255
    } else {
        (c * 255.0).round() as u8
    }
}

impl RGBColor {
    /// Gets the red channel as an integer from 0 to 255, clamping out-of-gamut values.
    pub fn int_r(&self) -> u8 {
        channel_to_int(self.r)
    }
    /// Gets the green channel as an integer from 0 to 255, clamping out-of-gamut values.
    pub fn int_g(&self) -> u8 {
        channel_to_int(self.g)
    }
    /// Gets the blue channel as an integer from 0 to 255, clamping out-of-gamut values.
    pub fn int_b(&self) -> u8 {
        channel_to_int(self.b)
    }
    /// Gets all three channels as a tuple `(r, g, b)` of integers from 0 to 255.
    pub fn int_rgb_tup(&self) -> (u8, u8, u8) {
        (self.int_r(), self.int_g(), self.int_b())
    }

    /// Parses a hex code of the form `#RRGGBB` or the shorthand `#RGB`, case-insensitively.
    /// # Errors
    /// Returns `RGBParseError::InvalidHexSyntax` for anything else.
    pub fn from_hex_code(hex: &str) -> Result<RGBColor, RGBParseError> {
        let digits = match hex.strip_prefix('#') {
            Some(digits) => digits,
            None => return Err(RGBParseError::InvalidHexSyntax),
        };
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(RGBParseError::InvalidHexSyntax);
        }
        // expand shorthand so that "#F0A" reads as "#FF00AA"
        let full: String = match digits.len() {
            3 => digits.chars().flat_map(|c| vec![c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(RGBParseError::InvalidHexSyntax),
        };
        let channel = |i: usize| {
            u8::from_str_radix(&full[i..i + 2], 16).map_err(|_| RGBParseError::InvalidHexSyntax)
        };
        Ok(RGBColor::from((channel(0)?, channel(2)?, channel(4)?)))
    }

    /// Decodes the sRGB gamma curve, giving the same color in linear light.
    pub fn to_linear(&self) -> LinearRGBColor {
        LinearRGBColor {
            r: to_linear(self.r),
            g: to_linear(self.g),
            b: to_linear(self.b),
        }
    }

    /// Encodes a linear light color with the sRGB gamma curve.
    pub fn from_linear(rgb: LinearRGBColor) -> RGBColor {
        RGBColor {
            r: to_gamma(rgb.r),
            g: to_gamma(rgb.g),
            b: to_gamma(rgb.b),
        }
    }
}

impl Color for RGBColor {
    /// Converts from XYZ through linear sRGB. Out-of-gamut colors come back with channels outside of
    /// 0-1 rather than being clipped.
    fn from_xyz(xyz: XYZColor) -> RGBColor {
        RGBColor::from_linear(LinearRGBColor::from_xyz(xyz))
    }
    fn to_xyz(&self) -> XYZColor {
        self.to_linear().to_xyz()
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    /// Reads 0-255 integer channels, as found in most image formats.
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        let (r, g, b) = rgb;
        RGBColor {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }
}

impl fmt::Display for RGBColor {
    /// Writes the color as an uppercase hex code, `#RRGGBB`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.int_r(), self.int_g(), self.int_b())
    }
}

impl FromStr for RGBColor {
    type Err = RGBParseError;

    fn from_str(s: &str) -> Result<RGBColor, RGBParseError> {
        RGBColor::from_hex_code(s.trim())
    }
}

/// An error in parsing an `RGBColor` from a string.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum RGBParseError {
    /// The string is not a hex code of the form `#RRGGBB` or `#RGB`.
    InvalidHexSyntax,
}

impl fmt::Display for RGBParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RGBParseError::InvalidHexSyntax => write!(f, "invalid hex code, expected #RRGGBB"),
        }
    }
}

impl Error for RGBParseError {}
