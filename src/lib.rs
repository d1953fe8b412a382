//! scarlet-hsluv is a library for HSLuv, a human-friendly alternative to HSL. HSL is convenient to
//! reason about, but its lightness has little to do with how bright a color looks and its hues are
//! spaced unevenly. HSLuv keeps the shape of HSL, with hue in degrees and saturation and lightness
//! as percentages, but builds it on CIELUV, where lightness is perceptual and the sRGB gamut can be
//! described exactly. Every HSLuv color with saturation and lightness between 0 and 100 is a
//! displayable sRGB color.
//!
//! Conversions run through a chain of color spaces, sRGB → linear sRGB → CIE XYZ → CIELUV →
//! CIELCHuv → HSLuv, each a type implementing [`Color`] in the [`colors`] module. The piece that
//! makes HSLuv work is in [`bound`]: the outline of the sRGB gamut in the CIELUV chroma plane, used
//! to turn chroma into a percentage. For the common cases, [`convert`] has plain tuple functions,
//! and [`swatch`] has a validated HSLuv type for values that come from outside the program.
//!
//! # Example
//!
//! ```
//! # use scarlet_hsluv::prelude::*;
//! let swatch = Swatch::from_hsl(250., 90., 45.).unwrap();
//! let rgb = swatch.to_rgb();
//! let back = Swatch::from_rgb8(rgb.int_r(), rgb.int_g(), rgb.int_b()).unwrap();
//! assert!((back.l() - 45.).abs() <= 0.5);
//! ```
//!
//! [`Color`]: color/trait.Color.html
//! [`colors`]: colors/index.html
//! [`bound`]: bound/index.html
//! [`convert`]: convert/index.html
//! [`swatch`]: swatch/index.html

#![doc(html_root_url = "https://docs.rs/scarlet-hsluv/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924363628087 with -0.969_243_636_280_87
#![allow(clippy::unreadable_literal)]

#[macro_use]
extern crate float_cmp;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate nalgebra as na;
extern crate serde;
#[macro_use]
extern crate serde_derive;

pub mod bound;
pub mod color;
pub mod colors;
mod consts;
pub mod convert;
pub mod prelude;
pub mod swatch;
pub mod transfer;
