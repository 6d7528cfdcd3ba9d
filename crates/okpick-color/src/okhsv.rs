//! OkHSV: an HSV-shaped model built on OkLab gamut geometry.
//!
//! Hue is the OkLab hue as a fraction of a turn. Saturation and value are
//! measured against the sRGB gamut triangle for that hue (see [`crate::gamut`]),
//! so `s = 1, v = 1` always lands on the gamut cusp and `v = 1` is the
//! brightest in-gamut color along a saturation line.
//!
//! The triangle is an approximation of the true gamut, so colors on the
//! gamut faces can read back with `s` or `v` a little above 1. Those values
//! are returned as computed and accepted on the way back, up to [`SV_LIMIT`].
//!
//! # Example
//!
//! ```rust
//! use okpick_color::okhsv::{Okhsv, color_to_okhsv, okhsv_to_color};
//! use okpick_core::Color;
//!
//! let c = Color::rgb(0.2, 0.5, 0.7);
//! let hsv = color_to_okhsv(c);
//! let back = okhsv_to_color(hsv);
//! assert!((back.g - c.g).abs() < 1e-3);
//! ```

use crate::gamut::{find_cusp, to_st, toe, toe_inv};
use crate::oklab::{Oklab, color_to_oklab, oklab_to_linear_rgb, oklab_to_linear_rgb_unclamped};
use okpick_core::Color;
use okpick_math::{sanitize, saturate, wrap_unit};
use okpick_transfer::srgb;
use std::f32::consts::{PI, TAU};

/// Saturation of the lower triangle edge mapped to `s = 1` at the toe.
const S0: f32 = 0.5;

/// Chroma below which a color is treated as a neutral gray.
const ACHROMATIC_CHROMA: f32 = 1e-5;

/// Largest saturation or value [`okhsv_to_color`] accepts.
pub const SV_LIMIT: f32 = 1.1;

/// A color in OkHSV.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Okhsv {
    /// Hue as a fraction of a full turn, [0, 1)
    pub h: f32,
    /// Saturation, nominally [0, 1]
    pub s: f32,
    /// Value, nominally [0, 1]
    pub v: f32,
}

impl Okhsv {
    /// Creates a new OkHSV value. No normalization is applied.
    #[inline]
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

/// Lightness multiplier that puts the brightest channel of `(l, a_ c, b_ c)` at 1.
fn scale_l(l: f32, c: f32, a_: f32, b_: f32) -> f32 {
    let rgb = oklab_to_linear_rgb_unclamped(Oklab::new(l, a_ * c, b_ * c));
    let scale = (1.0 / rgb.max_element().max(0.0)).cbrt();
    if scale.is_finite() { scale } else { 1.0 }
}

/// Finite and non-negative, otherwise 0.
fn non_negative(x: f32) -> f32 {
    if x.is_finite() { x.max(0.0) } else { 0.0 }
}

/// Converts a display color to OkHSV.
///
/// Grays (zero chroma) come back with `h = 0`, `s = 0` and `v` equal to the
/// toe-mapped lightness. Saturation and value are not clamped to 1, so
/// [`okhsv_to_color`] reproduces colors on the gamut faces.
pub fn color_to_okhsv(color: Color) -> Okhsv {
    let lab = color_to_oklab(color);
    let c = lab.chroma();
    let l = lab.l;

    if !(c > ACHROMATIC_CHROMA) {
        return Okhsv::new(0.0, 0.0, non_negative(toe(l)));
    }

    let a_ = lab.a / c;
    let b_ = lab.b / c;
    let h = wrap_unit(0.5 + 0.5 * (-lab.b).atan2(-lab.a) / PI);

    let cusp = find_cusp(a_, b_);
    let st_max = to_st(cusp);
    let k = 1.0 - S0 / st_max.s;

    // project onto the v = 1 edge of the triangle
    let t = st_max.t / (c + l * st_max.t);
    let l_v = t * l;
    let c_v = t * c;
    if !(l_v > 0.0) {
        return Okhsv::new(h, 0.0, 0.0);
    }

    let l_vt = toe_inv(l_v);
    let c_vt = c_v * l_vt / l_v;

    let l = toe(l / scale_l(l_vt, c_vt, a_, b_));

    let v = l / l_v;
    let s = (S0 + st_max.t) * c_v / (st_max.t * S0 + st_max.t * k * c_v);

    Okhsv {
        h,
        s: non_negative(s),
        v: non_negative(v),
    }
}

/// Converts OkHSV to an opaque sRGB display color.
///
/// Hue wraps into [0, 1). NaN or negative saturation and value become 0,
/// and both are capped at [`SV_LIMIT`].
///
/// # Example
///
/// ```rust
/// use okpick_color::okhsv::{Okhsv, okhsv_to_color};
/// use okpick_core::Color;
///
/// assert_eq!(okhsv_to_color(Okhsv::new(0.3, 1.0, 0.0)), Color::BLACK);
/// ```
pub fn okhsv_to_color(hsv: Okhsv) -> Color {
    let h = wrap_unit(hsv.h);
    let s = sanitize(hsv.s, 0.0, SV_LIMIT);
    let v = sanitize(hsv.v, 0.0, SV_LIMIT);

    if v == 0.0 {
        return Color::BLACK;
    }

    let (b_, a_) = (TAU * h).sin_cos();

    let cusp = find_cusp(a_, b_);
    let st_max = to_st(cusp);
    let k = 1.0 - S0 / st_max.s;

    let denom = S0 + st_max.t - st_max.t * k * s;
    let l_v = 1.0 - s * S0 / denom;
    let c_v = s * st_max.t * S0 / denom;
    if !(l_v > 0.0) {
        return Color::BLACK;
    }

    let mut l = v * l_v;
    let mut c = v * c_v;

    let l_vt = toe_inv(l_v);
    let c_vt = c_v * l_vt / l_v;

    let l_new = toe_inv(l);
    c *= l_new / l;
    l = l_new;

    let scale = scale_l(l_vt, c_vt, a_, b_);
    l *= scale;
    c *= scale;

    let linear = oklab_to_linear_rgb(Oklab::new(l, c * a_, c * b_));
    let [r, g, b] = srgb::oetf_rgb(linear.to_array());
    Color::rgb(saturate(r), saturate(g), saturate(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_black_and_white() {
        let black = color_to_okhsv(Color::BLACK);
        assert_eq!(black.s, 0.0);
        assert_eq!(black.v, 0.0);

        let white = color_to_okhsv(Color::WHITE);
        assert_eq!(white.s, 0.0);
        assert_abs_diff_eq!(white.v, 1.0, epsilon = 1e-4);

        let c = okhsv_to_color(Okhsv::new(0.7, 0.0, 1.0));
        assert_abs_diff_eq!(c.r, 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(c.g, 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(c.b, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_grays_are_achromatic() {
        for i in 1..10 {
            let k = i as f32 / 10.0;
            let hsv = color_to_okhsv(Color::rgb(k, k, k));
            assert_eq!(hsv.h, 0.0);
            assert_eq!(hsv.s, 0.0);
            assert!(hsv.v > 0.0 && hsv.v < 1.0);

            let back = okhsv_to_color(hsv);
            assert_abs_diff_eq!(back.r, k, epsilon = 1e-4);
            assert_abs_diff_eq!(back.b, k, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_red_hue() {
        let hsv = color_to_okhsv(Color::RED);
        assert_abs_diff_eq!(hsv.h, 29.23 / 360.0, epsilon = 1e-3);
        assert_abs_diff_eq!(hsv.s, 1.0, epsilon = 1e-2);
        assert_abs_diff_eq!(hsv.v, 1.0, epsilon = 1e-2);
    }

    #[test]
    fn test_roundtrip() {
        let colors = [
            Color::rgb(0.2, 0.5, 0.7),
            Color::rgb(0.9, 0.4, 0.1),
            Color::rgb(0.3, 0.3, 0.35),
            Color::rgb(0.6, 0.8, 0.2),
            Color::rgb(0.05, 0.02, 0.1),
            Color::rgb(0.75, 0.25, 0.6),
        ];
        for c in colors {
            let back = okhsv_to_color(color_to_okhsv(c));
            assert_abs_diff_eq!(back.r, c.r, epsilon = 2e-3);
            assert_abs_diff_eq!(back.g, c.g, epsilon = 2e-3);
            assert_abs_diff_eq!(back.b, c.b, epsilon = 2e-3);
        }
    }

    #[test]
    fn test_value_is_monotonic_in_lightness() {
        for h in [0.0, 0.15, 0.4, 0.72, 0.9] {
            for s in [0.0, 0.5, 1.0] {
                let mut prev = -1.0;
                for i in 0..=20 {
                    let v = i as f32 / 20.0;
                    let l = color_to_oklab(okhsv_to_color(Okhsv::new(h, s, v))).l;
                    assert!(l >= prev - 1e-4, "h={} s={} v={} l={} prev={}", h, s, v, l, prev);
                    prev = l;
                }
            }
        }
    }

    #[test]
    fn test_gamut_faces_roundtrip() {
        // pure blue sits on a cusp branch seam, the others on a gamut face
        let colors = [
            Color::rgb(0.0, 0.0, 0.9375),
            Color::rgb(0.0, 0.0, 1.0),
            Color::rgb(0.5, 0.0, 1.0),
            Color::rgb(1.0, 0.5, 0.0),
            Color::rgb(0.0, 1.0, 0.5),
            Color::rgb(1.0, 1.0, 0.25),
        ];
        for c in colors {
            let back = okhsv_to_color(color_to_okhsv(c));
            assert_abs_diff_eq!(back.r, c.r, epsilon = 1e-3);
            assert_abs_diff_eq!(back.g, c.g, epsilon = 1e-3);
            assert_abs_diff_eq!(back.b, c.b, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_saturation_above_one_is_kept() {
        let hsv = color_to_okhsv(Color::rgb(0.5, 0.0, 1.0));
        assert!(hsv.s > 1.0, "s={}", hsv.s);
        assert!(hsv.s < SV_LIMIT);
    }

    #[test]
    fn test_out_of_range_input() {
        assert_eq!(okhsv_to_color(Okhsv::new(f32::NAN, 0.5, f32::NAN)), Color::BLACK);
        assert_eq!(okhsv_to_color(Okhsv::new(0.3, 0.5, -2.0)), Color::BLACK);
        assert_eq!(
            okhsv_to_color(Okhsv::new(0.3, 5.0, 5.0)),
            okhsv_to_color(Okhsv::new(0.3, SV_LIMIT, SV_LIMIT))
        );
        let wrapped = okhsv_to_color(Okhsv::new(1.25, 0.8, 0.9));
        let plain = okhsv_to_color(Okhsv::new(0.25, 0.8, 0.9));
        assert_abs_diff_eq!(wrapped.r, plain.r, epsilon = 1e-5);
        assert_abs_diff_eq!(wrapped.g, plain.g, epsilon = 1e-5);
        assert_abs_diff_eq!(wrapped.b, plain.b, epsilon = 1e-5);
    }
}
