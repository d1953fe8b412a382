//! This module simply brings the most common functionality under a single namespace, to prevent
//! excessive imports. As of now, this prelude includes the [`Color`] trait, the ubiquitous
//! [`RGBColor`] and its parse error [`RGBParseError`], and the validated [`Swatch`] with its
//! [`ComponentRangeError`]. The color spaces in the [`colors`] module are not included.
//!
//! [`Color`]: ../color/trait.Color.html
//! [`RGBColor`]: ../color/struct.RGBColor.html
//! [`RGBParseError`]: ../color/enum.RGBParseError.html
//! [`Swatch`]: ../swatch/struct.Swatch.html
//! [`ComponentRangeError`]: ../swatch/enum.ComponentRangeError.html
//! [`colors`]: ../colors/index.html

pub use color::{Color, RGBColor, RGBParseError};
pub use swatch::{ComponentRangeError, Swatch};
