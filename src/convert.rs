//! Tuple-in, tuple-out entry points for the common conversions, for callers that keep their colors in
//! their own types and just need the math. Each is a thin wrapper around [`Color::convert`]; channels
//! are floats from 0 to 1, hue is in degrees, and saturation and lightness run from 0 to 100.
//!
//! [`Color::convert`]: ../color/trait.Color.html#method.convert

use color::{Color, RGBColor, RGBParseError};
use colors::{HPLuvColor, HSLuvColor};

/// Converts sRGB channels to HSLuv `(h, s, l)`.
/// # Example
///
/// ```
/// # use scarlet_hsluv::convert::rgb_to_hsluv;
/// let (h, s, l) = rgb_to_hsluv(1., 0., 0.);
/// assert!((h - 12.177).abs() <= 1e-3);
/// assert!((s - 100.).abs() <= 1e-6);
/// assert!((l - 53.237).abs() <= 1e-3);
/// ```
pub fn rgb_to_hsluv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let hsluv: HSLuvColor = RGBColor { r, g, b }.convert();
    (hsluv.h, hsluv.s, hsluv.l)
}

/// Converts HSLuv to sRGB channels `(r, g, b)`. In-range input gives channels in 0-1, give or take
/// floating-point error at the edge of the gamut; nothing is clamped.
pub fn hsluv_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let rgb: RGBColor = HSLuvColor { h, s, l }.convert();
    (rgb.r, rgb.g, rgb.b)
}

/// Converts sRGB channels to HPLuv `(h, p, l)`.
pub fn rgb_to_hpluv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let hpluv: HPLuvColor = RGBColor { r, g, b }.convert();
    (hpluv.h, hpluv.p, hpluv.l)
}

/// Converts HPLuv to sRGB channels `(r, g, b)`.
pub fn hpluv_to_rgb(h: f64, p: f64, l: f64) -> (f64, f64, f64) {
    let rgb: RGBColor = HPLuvColor { h, p, l }.convert();
    (rgb.r, rgb.g, rgb.b)
}

/// Converts HSLuv to an uppercase `#RRGGBB` hex code, rounding each channel to the nearest of 256
/// levels.
/// # Example
///
/// ```
/// # use scarlet_hsluv::convert::{hex_to_hsluv, hsluv_to_hex};
/// let (h, s, l) = hex_to_hsluv("#FF0000").unwrap();
/// assert_eq!(hsluv_to_hex(h, s, l), "#FF0000");
/// assert!(hex_to_hsluv("red").is_err());
/// ```
pub fn hsluv_to_hex(h: f64, s: f64, l: f64) -> String {
    let rgb: RGBColor = HSLuvColor { h, s, l }.convert();
    rgb.to_string()
}

/// Parses a `#RRGGBB` or `#RGB` hex code into HSLuv.
/// # Errors
/// Returns `RGBParseError::InvalidHexSyntax` if the hex code is malformed.
pub fn hex_to_hsluv(hex: &str) -> Result<(f64, f64, f64), RGBParseError> {
    let rgb = RGBColor::from_hex_code(hex)?;
    Ok(rgb_to_hsluv(rgb.r, rgb.g, rgb.b))
}

/// Converts HPLuv to an uppercase `#RRGGBB` hex code.
pub fn hpluv_to_hex(h: f64, p: f64, l: f64) -> String {
    let rgb: RGBColor = HPLuvColor { h, p, l }.convert();
    rgb.to_string()
}

/// Parses a `#RRGGBB` or `#RGB` hex code into HPLuv.
/// # Errors
/// Returns `RGBParseError::InvalidHexSyntax` if the hex code is malformed.
pub fn hex_to_hpluv(hex: &str) -> Result<(f64, f64, f64), RGBParseError> {
    let rgb = RGBColor::from_hex_code(hex)?;
    Ok(rgb_to_hpluv(rgb.r, rgb.g, rgb.b))
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    /// Difference between two hues, going the short way around the circle.
    fn hue_difference(h1: f64, h2: f64) -> f64 {
        let diff = (h1 - h2).abs() % 360.0;
        diff.min(360.0 - diff)
    }

    #[test]
    fn test_rgb_round_trip() {
        let steps = 24;
        for ri in 0..=steps {
            for gi in 0..=steps {
                for bi in 0..=steps {
                    let (r, g, b) = (
                        ri as f64 / steps as f64,
                        gi as f64 / steps as f64,
                        bi as f64 / steps as f64,
                    );
                    let (h, s, l) = rgb_to_hsluv(r, g, b);
                    assert!(h.is_finite() && s.is_finite() && l.is_finite());
                    let (r2, g2, b2) = hsluv_to_rgb(h, s, l);
                    assert!((r - r2).abs() <= 1e-4, "{} {} {}", r, g, b);
                    assert!((g - g2).abs() <= 1e-4, "{} {} {}", r, g, b);
                    assert!((b - b2).abs() <= 1e-4, "{} {} {}", r, g, b);
                }
            }
        }
    }

    #[test]
    fn test_hsluv_round_trip() {
        for h_step in 0..72 {
            let h = h_step as f64 * 5.0;
            for s_step in 0..=10 {
                let s = s_step as f64 * 10.0;
                for l_step in 1..20 {
                    let l = l_step as f64 * 5.0;
                    let (r, g, b) = hsluv_to_rgb(h, s, l);
                    let (h2, s2, l2) = rgb_to_hsluv(r, g, b);
                    assert!((s - s2).abs() <= 1e-4, "{} {} {}", h, s, l);
                    assert!((l - l2).abs() <= 1e-4, "{} {} {}", h, s, l);
                    if s > 0.0 {
                        assert!(hue_difference(h, h2) <= 1e-4, "{} {} {}", h, s, l);
                    }
                }
            }
        }
    }

    #[test]
    fn test_achromatic() {
        let mut last_gray = -1.0;
        for l_step in 0..=100 {
            let l = l_step as f64;
            let (r, g, b) = hsluv_to_rgb(0.0, 0.0, l);
            assert!((r - g).abs() <= 1e-9 && (g - b).abs() <= 1e-9);
            assert!(r > last_gray);
            last_gray = r;
            for h_step in 1..36 {
                let other = hsluv_to_rgb(h_step as f64 * 10.0, 0.0, l);
                assert_eq!(other, (r, g, b));
            }
        }
    }

    #[test]
    fn test_black_and_white() {
        for h_step in 0..36 {
            let h = h_step as f64 * 10.0;
            for s_step in 0..=4 {
                let s = s_step as f64 * 25.0;
                assert_eq!(hsluv_to_rgb(h, s, 0.0), (0.0, 0.0, 0.0));
                let (r, g, b) = hsluv_to_rgb(h, s, 100.0);
                assert!((r - 1.0).abs() <= 1e-9);
                assert!((g - 1.0).abs() <= 1e-9);
                assert!((b - 1.0).abs() <= 1e-9);
            }
        }
        assert_eq!(rgb_to_hsluv(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
        let (_, s, l) = rgb_to_hsluv(1.0, 1.0, 1.0);
        assert_eq!(s, 0.0);
        assert!((l - 100.0).abs() <= 1e-8);
    }

    #[test]
    fn test_known_colors() {
        // reference values for the sRGB primaries and secondaries
        let known = [
            ((1.0, 0.0, 0.0), (12.177050630061776, 100.0, 53.23711559542933)),
            ((0.0, 1.0, 0.0), (127.71501294924047, 100.0, 87.73551910965973)),
            ((0.0, 0.0, 1.0), (265.8743202181779, 100.0, 32.30087290398002)),
        ];
        for &((r, g, b), (h, s, l)) in known.iter() {
            let (h2, s2, l2) = rgb_to_hsluv(r, g, b);
            assert!((h - h2).abs() <= 1e-6);
            assert!((s - s2).abs() <= 1e-6);
            assert!((l - l2).abs() <= 1e-6);
        }
    }

    #[test]
    fn test_hpluv_round_trip() {
        for h_step in 0..36 {
            for l_step in 1..10 {
                let (h, p, l) = (h_step as f64 * 10.0, 75.0, l_step as f64 * 10.0);
                let (r, g, b) = hpluv_to_rgb(h, p, l);
                let (h2, p2, l2) = rgb_to_hpluv(r, g, b);
                assert!(hue_difference(h, h2) <= 1e-4);
                assert!((p - p2).abs() <= 1e-4);
                assert!((l - l2).abs() <= 1e-4);
            }
        }
    }

    #[test]
    fn test_hex_round_trip() {
        for hex in &["#000000", "#FFFFFF", "#6E66CC", "#123456", "#FEDCBA", "#00FF7F"] {
            let (h, s, l) = hex_to_hsluv(hex).unwrap();
            assert_eq!(hsluv_to_hex(h, s, l), *hex);
            let (h, p, l) = hex_to_hpluv(hex).unwrap();
            assert_eq!(hpluv_to_hex(h, p, l), *hex);
        }
        assert_eq!(hex_to_hsluv("#12345"), Err(RGBParseError::InvalidHexSyntax));
        assert_eq!(hex_to_hpluv("123456"), Err(RGBParseError::InvalidHexSyntax));
    }
}
