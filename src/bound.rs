//! This module describes the boundary of the sRGB gamut inside CIELUV, which is what lets HSLuv
//! express saturation as a percentage. At a fixed lightness, the colors where one sRGB channel sits
//! exactly at 0 or exactly at 1 form a straight line in the (u, v) chroma plane: CIELUV chromaticity
//! is a projective transform of XYZ, and XYZ is linear in the channels. The three channels with two
//! limits each give six lines, and the colors representable in sRGB at that lightness are the
//! hexagon they enclose around the neutral axis.
//!
//! Two distances fall out of this. The largest chroma along a given hue, [`max_chroma_for_lh`], is
//! where the ray at that hue first crosses one of the lines: it normalizes HSLuv saturation. The
//! largest chroma that is in gamut for *every* hue, [`max_safe_chroma_for_l`], is the radius of the
//! circle inscribed in the hexagon: it normalizes HPLuv.
//!
//! [`max_chroma_for_lh`]: fn.max_chroma_for_lh.html
//! [`max_safe_chroma_for_l`]: fn.max_safe_chroma_for_l.html

use consts::{EPSILON, KAPPA, XYZ_TO_SRGB};

// At these lightnesses the hexagon collapses to the single point of black or white.
const MIN_LIGHTNESS: f64 = 1e-8;
const MAX_LIGHTNESS: f64 = 99.9999999;

/// A line in the CIELUV chroma plane, v = slope * u + intercept.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    /// Change in v per unit u.
    pub slope: f64,
    /// The value of v where the line crosses u = 0.
    pub intercept: f64,
}

impl Line {
    /// Distance from the origin, along the ray at angle `theta` (radians), to where it meets this
    /// line. Negative if the ray points away from the line, and infinite or NaN if the two are
    /// parallel.
    pub fn ray_length(&self, theta: f64) -> f64 {
        self.intercept / (theta.sin() - self.slope * theta.cos())
    }

    /// Perpendicular distance from the origin to this line.
    pub fn distance_from_origin(&self) -> f64 {
        self.intercept.abs() / (self.slope * self.slope + 1.0).sqrt()
    }
}

fn is_degenerate(l: f64) -> bool {
    l <= MIN_LIGHTNESS || l >= MAX_LIGHTNESS
}

/// Gets the six lines bounding the sRGB gamut in the chroma plane at lightness `l`, ordered red at
/// 0, red at 1, green at 0, green at 1, blue at 0, blue at 1. Only meaningful strictly between 0
/// and 100: at the ends every line runs through the origin and the coefficients divide by zero.
/// # Example
///
/// ```
/// # use scarlet_hsluv::bound::get_bounds;
/// let lines = get_bounds(50.);
/// assert_eq!(lines.len(), 6);
/// assert!(lines.iter().all(|line| line.slope.is_finite() && line.intercept.is_finite()));
/// ```
pub fn get_bounds(l: f64) -> [Line; 6] {
    // relative luminance at this lightness, from the inverse of the CIE lightness function
    let sub1 = (l + 16.0).powi(3) / 1560896.0;
    let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };

    let mut lines = [Line {
        slope: 0.0,
        intercept: 0.0,
    }; 6];
    for channel in 0..3 {
        let m1 = XYZ_TO_SRGB[(channel, 0)];
        let m2 = XYZ_TO_SRGB[(channel, 1)];
        let m3 = XYZ_TO_SRGB[(channel, 2)];
        for (limit, &t) in [0.0, 1.0].iter().enumerate() {
            let top1 = (284517.0 * m1 - 94839.0 * m3) * sub2;
            let top2 = (838422.0 * m3 + 769860.0 * m2 + 731718.0 * m1) * l * sub2 - 769860.0 * t * l;
            let bottom = (632260.0 * m3 - 126452.0 * m2) * sub2 + 126452.0 * t;
            lines[channel * 2 + limit] = Line {
                slope: top1 / bottom,
                intercept: top2 / bottom,
            };
        }
    }
    lines
}

/// The largest chroma in gamut at lightness `l` and hue `h` (degrees): how far the ray at that hue
/// goes before it leaves the hexagon. Exactly 0 for black and white.
/// # Example
///
/// ```
/// # use scarlet_hsluv::bound::max_chroma_for_lh;
/// assert_eq!(max_chroma_for_lh(0., 120.), 0.);
/// assert_eq!(max_chroma_for_lh(100., 120.), 0.);
/// // pure sRGB red sits right on the boundary
/// let red_chroma = max_chroma_for_lh(53.23711559542933, 12.177050630061776);
/// assert!((red_chroma - 179.0380969).abs() <= 1e-4);
/// ```
pub fn max_chroma_for_lh(l: f64, h: f64) -> f64 {
    if is_degenerate(l) {
        return 0.0;
    }
    let theta = h.to_radians();
    // the nearest crossing in the direction of the ray; rays parallel to a line never reach it
    let min_length = get_bounds(l)
        .iter()
        .map(|line| line.ray_length(theta))
        .filter(|&length| length >= 0.0)
        .fold(f64::INFINITY, f64::min);
    if min_length.is_finite() {
        min_length
    } else {
        0.0
    }
}

/// The largest chroma at lightness `l` that is in gamut whatever the hue: the distance from the
/// neutral axis to the nearest of the six lines. Exactly 0 for black and white.
pub fn max_safe_chroma_for_l(l: f64) -> f64 {
    if is_degenerate(l) {
        return 0.0;
    }
    get_bounds(l)
        .iter()
        .map(Line::distance_from_origin)
        .fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use color::{Color, RGBColor};
    use colors::CIELCHuvColor;

    #[test]
    fn test_degenerate_lightness() {
        for i in 0..36 {
            let h = i as f64 * 10.0;
            assert_eq!(max_chroma_for_lh(0.0, h), 0.0);
            assert_eq!(max_chroma_for_lh(100.0, h), 0.0);
        }
        assert_eq!(max_safe_chroma_for_l(0.0), 0.0);
        assert_eq!(max_safe_chroma_for_l(100.0), 0.0);
    }

    #[test]
    fn test_max_chroma_nonnegative() {
        for l_step in 0..=200 {
            let l = l_step as f64 * 0.5;
            for h_step in 0..720 {
                let h = h_step as f64 * 0.5;
                let chroma = max_chroma_for_lh(l, h);
                assert!(chroma.is_finite());
                assert!(chroma >= 0.0);
                if l > 0.0 && l < 100.0 {
                    assert!(chroma > 0.0);
                }
            }
        }
    }

    #[test]
    fn test_safe_chroma_is_inscribed() {
        // the inscribed circle never reaches past the hexagon
        for l_step in 1..100 {
            let l = l_step as f64;
            let safe = max_safe_chroma_for_l(l);
            assert!(safe > 0.0);
            for h_step in 0..360 {
                assert!(safe <= max_chroma_for_lh(l, h_step as f64) + 1e-9);
            }
        }
    }

    #[test]
    fn test_boundary_is_gamut_edge() {
        // stepping out to the boundary lands on a color with some channel at 0 or 1, and no channel
        // outside of 0-1
        for &l in &[5.0, 20.0, 53.0, 80.0, 97.0] {
            for h_step in 0..72 {
                let h = h_step as f64 * 5.0;
                let lch = CIELCHuvColor {
                    l,
                    c: max_chroma_for_lh(l, h),
                    h,
                };
                let rgb: RGBColor = lch.convert();
                let channels = [rgb.r, rgb.g, rgb.b];
                assert!(channels.iter().all(|&c| c >= -1e-8 && c <= 1.0 + 1e-8));
                assert!(channels
                    .iter()
                    .any(|&c| c.abs() <= 1e-6 || (c - 1.0).abs() <= 1e-6));
            }
        }
    }

    #[test]
    fn test_hue_on_vertex() {
        // pure red is a corner of the hexagon, where two of the lines cross
        let red = RGBColor {
            r: 1.,
            g: 0.,
            b: 0.,
        };
        let lch: CIELCHuvColor = red.convert();
        let max = max_chroma_for_lh(lch.l, lch.h);
        assert!((max - lch.c).abs() <= 1e-6);
        // walking the hue a hair either way along the boundary can't increase chroma much
        assert!(max_chroma_for_lh(lch.l, lch.h - 1e-7) <= max + 1e-4);
        assert!(max_chroma_for_lh(lch.l, lch.h + 1e-7) <= max + 1e-4);
    }

    #[test]
    fn test_line_geometry() {
        let line = Line {
            slope: 0.0,
            intercept: 2.0,
        };
        assert!((line.ray_length(90f64.to_radians()) - 2.0).abs() <= 1e-12);
        assert!(line.ray_length(270f64.to_radians()) < 0.0);
        assert!((line.distance_from_origin() - 2.0).abs() <= 1e-12);
        let diagonal = Line {
            slope: 1.0,
            intercept: -2.0,
        };
        assert!((diagonal.distance_from_origin() - 2f64.sqrt()).abs() <= 1e-12);
    }
}
