//! HPLuv, the pastel sibling of HSLuv. Instead of stretching chroma to fill the gamut at every hue,
//! HPLuv measures it against the one chroma that fits at every hue of a given lightness. Colors with
//! the same "pastel saturation" and lightness then really are equally colorful whatever their hue,
//! which HSLuv gives up, at the price of never reaching the most vivid colors sRGB can show.

use super::cielchuvcolor::CIELCHuvColor;
use bound::max_safe_chroma_for_l;
use color::{Color, XYZColor};

/// A color in HPLuv. Every color with `p` between 0 and 100 is in the sRGB gamut, but not every sRGB
/// color has `p` below 100: vivid colors come out well above it.
/// # Example
///
/// ```
/// # use scarlet_hsluv::prelude::*;
/// # use scarlet_hsluv::colors::HPLuvColor;
/// let red = RGBColor{r: 1., g: 0., b: 0.};
/// let red_hpluv: HPLuvColor = red.convert();
/// assert!(red_hpluv.p > 100.);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HPLuvColor {
    /// The hue, in degrees from 0 to 360. The same as the hue of CIELCHuv.
    pub h: f64,
    /// The pastel saturation: chroma as a percentage of the largest chroma that is in gamut for
    /// every hue at this lightness.
    pub p: f64,
    /// The lightness, from 0 to 100. The same as the lightness of CIELUV.
    pub l: f64,
}

impl HPLuvColor {
    /// Normalizes the chroma of a CIELCHuv color. Black and white come out with 0 saturation.
    pub fn from_lch(lch: CIELCHuvColor) -> HPLuvColor {
        let max_chroma = max_safe_chroma_for_l(lch.l);
        let p = if max_chroma > 0.0 {
            lch.c / max_chroma * 100.0
        } else {
            0.0
        };
        HPLuvColor {
            h: lch.h,
            p,
            l: lch.l,
        }
    }

    /// Scales pastel saturation back into chroma.
    pub fn to_lch(&self) -> CIELCHuvColor {
        CIELCHuvColor {
            l: self.l,
            c: max_safe_chroma_for_l(self.l) * self.p / 100.0,
            h: self.h,
        }
    }
}

impl Color for HPLuvColor {
    fn from_xyz(xyz: XYZColor) -> HPLuvColor {
        HPLuvColor::from_lch(CIELCHuvColor::from_xyz(xyz))
    }
    fn to_xyz(&self) -> XYZColor {
        self.to_lch().to_xyz()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use color::RGBColor;

    #[test]
    fn test_pastel_in_gamut() {
        for h_step in 0..72 {
            for l_step in 1..20 {
                let color = HPLuvColor {
                    h: h_step as f64 * 5.0,
                    p: 100.0,
                    l: l_step as f64 * 5.0,
                };
                let rgb: RGBColor = color.convert();
                for &c in &[rgb.r, rgb.g, rgb.b] {
                    assert!(c >= -1e-8 && c <= 1.0 + 1e-8);
                }
            }
        }
    }

    #[test]
    fn test_equal_chroma_across_hues() {
        let chromas: Vec<f64> = (0..12)
            .map(|i| {
                HPLuvColor {
                    h: i as f64 * 30.0,
                    p: 80.0,
                    l: 65.0,
                }
                .to_lch()
                .c
            })
            .collect();
        assert!(chromas.iter().all(|&c| (c - chromas[0]).abs() <= 1e-10));
    }

    #[test]
    fn test_hpluv_rgb_round_trip() {
        let rgb = RGBColor {
            r: 0.62,
            g: 0.55,
            b: 0.58,
        };
        let hpluv: HPLuvColor = rgb.convert();
        let rgb2: RGBColor = hpluv.convert();
        assert!((rgb.r - rgb2.r).abs() <= 1e-8);
        assert!((rgb.g - rgb2.g).abs() <= 1e-8);
        assert!((rgb.b - rgb2.b).abs() <= 1e-8);
    }
}
