//! The sRGB transfer function, which maps between gamma-encoded sRGB channels and linear light. The
//! curve is a power law with a short linear segment near black, offset so that the two pieces meet
//! with matching slope. Neither direction clamps: values outside of 0-1 go through the same formulas.

/// Linear light value at which the encoding switches from the linear segment to the power law.
const LINEAR_BREAKPOINT: f64 = 0.0031308;
/// Encoded value at which decoding switches from the linear segment to the power law.
const ENCODED_BREAKPOINT: f64 = 0.04045;
const SLOPE: f64 = 12.92;
const OFFSET: f64 = 0.055;
const GAMMA: f64 = 2.4;

/// Decodes a single gamma-encoded sRGB channel into linear light.
/// # Example
///
/// ```
/// # use scarlet_hsluv::transfer::to_linear;
/// assert_eq!(to_linear(0.0), 0.0);
/// assert!((to_linear(1.0) - 1.0).abs() <= 1e-12);
/// assert!((to_linear(0.5) - 0.21404114).abs() <= 1e-7);
/// ```
pub fn to_linear(c: f64) -> f64 {
    if c > ENCODED_BREAKPOINT {
        ((c + OFFSET) / (1.0 + OFFSET)).powf(GAMMA)
    } else {
        c / SLOPE
    }
}

/// Encodes a single linear light channel with the sRGB gamma curve. The inverse of [`to_linear`].
///
/// [`to_linear`]: fn.to_linear.html
pub fn to_gamma(c: f64) -> f64 {
    if c <= LINEAR_BREAKPOINT {
        SLOPE * c
    } else {
        (1.0 + OFFSET) * c.powf(1.0 / GAMMA) - OFFSET
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_transfer_round_trip() {
        for i in 0..=1000 {
            let c = i as f64 / 1000.0;
            assert!((to_gamma(to_linear(c)) - c).abs() <= 1e-12);
            assert!((to_linear(to_gamma(c)) - c).abs() <= 1e-12);
        }
    }

    #[test]
    fn test_transfer_continuity() {
        // the two pieces meet at the breakpoint
        let below = LINEAR_BREAKPOINT * SLOPE;
        let above = (1.0 + OFFSET) * LINEAR_BREAKPOINT.powf(1.0 / GAMMA) - OFFSET;
        assert!((below - above).abs() <= 1e-5);
    }

    #[test]
    fn test_transfer_out_of_range() {
        // slightly out-of-gamut values still come back as finite numbers
        assert!(to_gamma(-1e-9).is_finite());
        assert!(to_gamma(1.0 + 1e-9).is_finite());
        assert!(to_linear(-0.01) < 0.0);
    }
}
