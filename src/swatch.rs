//! This module provides [`Swatch`], an HSLuv color that is guaranteed to be in range, for hosts that
//! take colors from the outside world (user input, configuration files, 8-bit pixels) and want a
//! single place where out-of-range values are caught. The raw [`HSLuvColor`] accepts anything and
//! leaves the consequences to the caller; a `Swatch` can only be built through a validating
//! constructor.
//!
//! Values a little past a bound, within [`BOUNDARY_TOLERANCE`], are snapped to the bound instead of
//! rejected. Round-tripping through other color spaces easily produces a hue of 360.0000001 or a
//! lightness of -1e-12, and those should not be errors.
//!
//! [`Swatch`]: struct.Swatch.html
//! [`HSLuvColor`]: ../colors/hsluvcolor/struct.HSLuvColor.html
//! [`BOUNDARY_TOLERANCE`]: constant.BOUNDARY_TOLERANCE.html

use std::convert::TryFrom;
use std::error::Error;
use std::fmt;

use color::{Color, RGBColor};
use colors::HSLuvColor;

/// The smallest allowed hue.
pub const H_MIN: f64 = 0.0;
/// The largest allowed hue.
pub const H_MAX: f64 = 360.0;
/// The smallest allowed saturation.
pub const S_MIN: f64 = 0.0;
/// The largest allowed saturation.
pub const S_MAX: f64 = 100.0;
/// The smallest allowed lightness.
pub const L_MIN: f64 = 0.0;
/// The largest allowed lightness.
pub const L_MAX: f64 = 100.0;
/// How far past a bound a component may be and still be snapped to the bound rather than rejected.
pub const BOUNDARY_TOLERANCE: f64 = 0.1;

/// An error describing which component of an HSLuv color was out of range. Each variant carries the
/// rejected input.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComponentRangeError {
    /// The hue was outside of 0-360.
    Hue(f64),
    /// The saturation was outside of 0-100.
    Saturation(f64),
    /// The lightness was outside of 0-100.
    Lightness(f64),
}

impl fmt::Display for ComponentRangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ComponentRangeError::Hue(h) => {
                write!(f, "hue {} is outside of {}-{}", h, H_MIN, H_MAX)
            }
            ComponentRangeError::Saturation(s) => {
                write!(f, "saturation {} is outside of {}-{}", s, S_MIN, S_MAX)
            }
            ComponentRangeError::Lightness(l) => {
                write!(f, "lightness {} is outside of {}-{}", l, L_MIN, L_MAX)
            }
        }
    }
}

impl Error for ComponentRangeError {}

/// Checks a single component against its bounds. `None` means the value is out of range even with
/// the tolerance.
fn fit_to_range(value: f64, min: f64, max: f64) -> Option<f64> {
    if value >= min && value <= max {
        Some(value)
    } else if value < min && value + BOUNDARY_TOLERANCE >= min {
        debug!("snapping {} up to bound {}", value, min);
        Some(min)
    } else if value > max && value - BOUNDARY_TOLERANCE <= max {
        debug!("snapping {} down to bound {}", value, max);
        Some(max)
    } else {
        // NaN ends up here too
        None
    }
}

fn check_component(
    value: f64,
    min: f64,
    max: f64,
    err: fn(f64) -> ComponentRangeError,
) -> Result<f64, ComponentRangeError> {
    fit_to_range(value, min, max).ok_or_else(|| {
        let err = err(value);
        debug!("rejecting color: {}", err);
        err
    })
}

/// A validated HSLuv color: hue between 0 and 360, saturation and lightness between 0 and 100.
/// Immutable; the `with_` methods build a new, revalidated swatch.
/// # Example
///
/// ```
/// # use scarlet_hsluv::swatch::{ComponentRangeError, Swatch};
/// let swatch = Swatch::from_hsl(360.05, 80., 40.).unwrap();
/// assert_eq!(swatch.h(), 360.);
/// assert_eq!(Swatch::from_hsl(400., 80., 40.), Err(ComponentRangeError::Hue(400.)));
/// let lighter = swatch.with_l(70.).unwrap();
/// assert_eq!((lighter.h(), lighter.s(), lighter.l()), (360., 80., 70.));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Swatch {
    h: f64,
    s: f64,
    l: f64,
}

impl Swatch {
    /// Makes a new `Swatch` from its components, snapping values within `BOUNDARY_TOLERANCE` of a
    /// bound onto it.
    /// # Errors
    /// Returns the `ComponentRangeError` for the first component, in the order hue, saturation,
    /// lightness, that is out of range.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Result<Swatch, ComponentRangeError> {
        Ok(Swatch {
            h: check_component(h, H_MIN, H_MAX, ComponentRangeError::Hue)?,
            s: check_component(s, S_MIN, S_MAX, ComponentRangeError::Saturation)?,
            l: check_component(l, L_MIN, L_MAX, ComponentRangeError::Lightness)?,
        })
    }

    /// Converts 8-bit sRGB channels to a `Swatch`.
    /// # Errors
    /// Every 8-bit color is in range, so in practice this only fails if floating-point error pushes
    /// a component further past a bound than `BOUNDARY_TOLERANCE`.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Result<Swatch, ComponentRangeError> {
        Swatch::try_from(RGBColor::from((r, g, b)))
    }

    /// The hue, in degrees.
    pub fn h(&self) -> f64 {
        self.h
    }
    /// The saturation, from 0 to 100.
    pub fn s(&self) -> f64 {
        self.s
    }
    /// The lightness, from 0 to 100.
    pub fn l(&self) -> f64 {
        self.l
    }

    /// A new swatch with the given hue, keeping saturation and lightness.
    /// # Errors
    /// Fails like `from_hsl` if the new hue is out of range.
    pub fn with_h(&self, h: f64) -> Result<Swatch, ComponentRangeError> {
        Swatch::from_hsl(h, self.s, self.l)
    }
    /// A new swatch with the given saturation, keeping hue and lightness.
    /// # Errors
    /// Fails like `from_hsl` if the new saturation is out of range.
    pub fn with_s(&self, s: f64) -> Result<Swatch, ComponentRangeError> {
        Swatch::from_hsl(self.h, s, self.l)
    }
    /// A new swatch with the given lightness, keeping hue and saturation.
    /// # Errors
    /// Fails like `from_hsl` if the new lightness is out of range.
    pub fn with_l(&self, l: f64) -> Result<Swatch, ComponentRangeError> {
        Swatch::from_hsl(self.h, self.s, l)
    }

    /// The swatch as an unchecked `HSLuvColor`.
    pub fn to_hsluv(&self) -> HSLuvColor {
        HSLuvColor {
            h: self.h,
            s: self.s,
            l: self.l,
        }
    }

    /// Converts to sRGB with 0-1 float channels.
    pub fn to_rgb(&self) -> RGBColor {
        self.to_hsluv().convert()
    }

    /// Converts to sRGB with 0-255 integer channels.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        self.to_rgb().int_rgb_tup()
    }
}

impl TryFrom<RGBColor> for Swatch {
    type Error = ComponentRangeError;

    /// Converts an sRGB color into HSLuv and validates the result. Out-of-gamut colors convert to
    /// saturations above 100 and are rejected.
    fn try_from(rgb: RGBColor) -> Result<Swatch, ComponentRangeError> {
        let hsluv: HSLuvColor = rgb.convert();
        Swatch::from_hsl(hsluv.h, hsluv.s, hsluv.l)
    }
}

impl From<Swatch> for HSLuvColor {
    fn from(swatch: Swatch) -> HSLuvColor {
        swatch.to_hsluv()
    }
}
