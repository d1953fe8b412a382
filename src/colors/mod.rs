//! This module contains the color spaces between sRGB and HSLuv, each as a type that implements
//! [`Color`]. For convenience, each main type is imported into this module's namespace directly.
//!
//! [`Color`]: ../color/trait.Color.html
pub mod cielchuvcolor;
pub mod cieluvcolor;
pub mod hpluvcolor;
pub mod hsluvcolor;
pub mod linearrgbcolor;

// for convenience, use this namespace for the color objects
pub use self::cielchuvcolor::CIELCHuvColor;
pub use self::cieluvcolor::CIELUVColor;
pub use self::hpluvcolor::HPLuvColor;
pub use self::hsluvcolor::HSLuvColor;
pub use self::linearrgbcolor::LinearRGBColor;
