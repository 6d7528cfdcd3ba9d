//! OkLCH: the polar form of OkLab.
//!
//! ```text
//! C = sqrt(a^2 + b^2)
//! h = atan2(b, a), in degrees, wrapped to [0, 360)
//! ```
//!
//! Hue math runs in radians; the public hue is degrees.

use crate::oklab::{Oklab, color_to_oklab, oklab_to_color};
use okpick_core::Color;
use okpick_math::{sanitize, wrap_degrees};

/// Upper bound of OkLCH chroma at the public-facing layer.
pub const CHROMA_MAX: f32 = 0.4;

/// A color in OkLCH.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklch {
    /// Perceptual lightness, [0, 1]
    pub l: f32,
    /// Chroma, [0, 0.4]
    pub c: f32,
    /// Hue in degrees, [0, 360)
    pub h: f32,
}

impl Oklch {
    /// Creates a new OkLCH value. No normalization is applied.
    #[inline]
    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }
}

/// Cartesian to polar.
#[inline]
pub fn oklab_to_oklch(lab: Oklab) -> Oklch {
    Oklch {
        l: lab.l,
        c: lab.chroma(),
        h: wrap_degrees(lab.b.atan2(lab.a).to_degrees()),
    }
}

/// Polar to Cartesian.
#[inline]
pub fn oklch_to_oklab(lch: Oklch) -> Oklab {
    let (sin, cos) = lch.h.to_radians().sin_cos();
    Oklab::new(lch.l, lch.c * cos, lch.c * sin)
}

/// Clamps L to [0, 1] and C to [0, 0.4], and wraps h into [0, 360).
///
/// NaN lightness or chroma becomes 0; non-finite hue becomes 0.
///
/// # Example
///
/// ```rust
/// use okpick_color::{Oklch, normalize_oklch};
///
/// let n = normalize_oklch(Oklch::new(1.2, 0.9, -30.0));
/// assert_eq!(n, Oklch::new(1.0, 0.4, 330.0));
/// ```
pub fn normalize_oklch(lch: Oklch) -> Oklch {
    Oklch {
        l: sanitize(lch.l, 0.0, 1.0),
        c: sanitize(lch.c, 0.0, CHROMA_MAX),
        h: wrap_degrees(lch.h),
    }
}

/// Converts a display color to OkLCH.
pub fn color_to_oklch(color: Color) -> Oklch {
    oklab_to_oklch(color_to_oklab(color))
}

/// Converts OkLCH to an opaque sRGB display color.
///
/// Input is normalized first; out-of-gamut results are hard-clipped.
///
/// # Example
///
/// ```rust
/// use okpick_color::{Oklch, oklch_to_color};
///
/// let c = oklch_to_color(Oklch::new(1.0, 0.0, 123.0));
/// assert!((c.r - 1.0).abs() < 1e-5 && (c.b - 1.0).abs() < 1e-5);
/// ```
pub fn oklch_to_color(lch: Oklch) -> Color {
    oklab_to_color(oklch_to_oklab(normalize_oklch(lch)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use okpick_math::hue_distance;

    #[test]
    fn test_polar_roundtrip() {
        let lab = Oklab::new(0.7, -0.1, 0.05);
        let back = oklch_to_oklab(oklab_to_oklch(lab));
        assert_abs_diff_eq!(back.a, lab.a, epsilon = 1e-6);
        assert_abs_diff_eq!(back.b, lab.b, epsilon = 1e-6);
    }

    #[test]
    fn test_negative_angle_wraps() {
        // b < 0 gives a negative atan2
        let lch = oklab_to_oklch(Oklab::new(0.5, 0.1, -0.1));
        assert_abs_diff_eq!(lch.h, 315.0, epsilon = 1e-3);
    }

    #[test]
    fn test_achromatic_hue_is_zero() {
        assert_eq!(oklab_to_oklch(Oklab::new(0.5, 0.0, 0.0)).h, 0.0);
    }

    #[test]
    fn test_normalize_bounds() {
        let n = normalize_oklch(Oklch::new(-0.5, -1.0, 720.0));
        assert_eq!(n, Oklch::new(0.0, 0.0, 0.0));

        let n = normalize_oklch(Oklch::new(f32::NAN, f32::NAN, f32::NAN));
        assert_eq!(n, Oklch::new(0.0, 0.0, 0.0));

        for h in [-1000.0, -360.0, -0.5, 359.99, 360.0, 1e6] {
            let n = normalize_oklch(Oklch::new(0.5, 0.1, h));
            assert!((0.0..360.0).contains(&n.h), "h={} -> {}", h, n.h);
        }
    }

    #[test]
    fn test_hue_wraparound() {
        let a = color_to_oklch(oklch_to_color(Oklch::new(0.7, 0.08, 359.0)));
        let b = color_to_oklch(oklch_to_color(Oklch::new(0.7, 0.08, 1.0)));
        assert_abs_diff_eq!(hue_distance(a.h, b.h), 2.0, epsilon = 0.5);
    }

    #[test]
    fn test_white_ignores_hue() {
        for h in [0.0, 90.0, 200.0, 359.0] {
            let c = oklch_to_color(Oklch::new(1.0, 0.0, h));
            assert_abs_diff_eq!(c.r, 1.0, epsilon = 1e-5);
            assert_abs_diff_eq!(c.g, 1.0, epsilon = 1e-5);
            assert_abs_diff_eq!(c.b, 1.0, epsilon = 1e-5);
        }
    }
}
