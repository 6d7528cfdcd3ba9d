//! UI-facing color values with slider-friendly ranges.
//!
//! Each wrapper is what a picker binds its controls to. Hue is always in
//! degrees, [0, 360). Magnitude axes are percentages:
//!
//! | Type | Axes |
//! |------|------|
//! | [`HsvColor`] | h deg, s [0, 100], v [0, 100] |
//! | [`OkHsvColor`] | h deg, s [0, 110], v [0, 110] (100 = the gamut triangle) |
//! | [`OkLchColor`] | l [0, 100], c [0, 100] (100 = 0.4), h deg |
//! | [`OkLabColor`] | l [0, 100], a/b [-100, 100] (100 = 0.4) |
//!
//! # Example
//!
//! ```rust
//! use okpick_color::normalized::HsvColor;
//! use okpick_core::Color;
//!
//! assert_eq!(HsvColor::new(0.0, 100.0, 100.0).to_color(), Color::RED);
//! ```

use crate::hsv::{Hsv, color_to_hsv, hsv_to_color};
use crate::okhsv::{Okhsv, SV_LIMIT, color_to_okhsv, okhsv_to_color};
use crate::oklab::{AB_MAX, Oklab, color_to_oklab, oklab_to_color};
use crate::oklch::{CHROMA_MAX, Oklch, color_to_oklch, oklch_to_color};
use okpick_core::Color;
use okpick_math::{sanitize, saturate, wrap_degrees};

const PERCENT: f32 = 100.0;

/// HSV with percentage saturation and value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HsvColor {
    /// Hue in degrees, [0, 360)
    pub h: f32,
    /// Saturation, [0, 100]
    pub s: f32,
    /// Value, [0, 100]
    pub v: f32,
}

impl HsvColor {
    /// Creates a new value as given.
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Wraps hue and clamps s, v to [0, 100]. NaN becomes 0.
    pub fn normalized(self) -> Self {
        Self {
            h: wrap_degrees(self.h),
            s: sanitize(self.s, 0.0, PERCENT),
            v: sanitize(self.v, 0.0, PERCENT),
        }
    }

    /// Reads a display color.
    pub fn from_color(color: Color) -> Self {
        color_to_hsv(color).into()
    }

    /// Produces a display color.
    pub fn to_color(self) -> Color {
        hsv_to_color(self.into())
    }

    /// Produces a display color with the given alpha, clamped to [0, 1].
    pub fn to_color_with_alpha(self, alpha: f32) -> Color {
        self.to_color().with_alpha(saturate(alpha))
    }
}

impl From<Hsv> for HsvColor {
    fn from(hsv: Hsv) -> Self {
        Self::new(hsv.h, hsv.s * PERCENT, hsv.v * PERCENT)
    }
}

impl From<HsvColor> for Hsv {
    fn from(c: HsvColor) -> Self {
        let c = c.normalized();
        Hsv::new(c.h, c.s / PERCENT, c.v / PERCENT)
    }
}

/// OkHSV with the hue in degrees and percentage saturation and value.
///
/// Colors on the sRGB gamut faces can read a little above 100.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OkHsvColor {
    /// Hue in degrees, [0, 360)
    pub h: f32,
    /// Saturation, nominally [0, 100]
    pub s: f32,
    /// Value, nominally [0, 100]
    pub v: f32,
}

impl OkHsvColor {
    /// Creates a new value as given.
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Wraps hue and clamps s, v to [0, 110]. NaN becomes 0.
    pub fn normalized(self) -> Self {
        let max = SV_LIMIT * PERCENT;
        Self {
            h: wrap_degrees(self.h),
            s: sanitize(self.s, 0.0, max),
            v: sanitize(self.v, 0.0, max),
        }
    }

    /// Reads a display color.
    pub fn from_color(color: Color) -> Self {
        color_to_okhsv(color).into()
    }

    /// Produces a display color.
    pub fn to_color(self) -> Color {
        okhsv_to_color(self.into())
    }

    /// Produces a display color with the given alpha, clamped to [0, 1].
    pub fn to_color_with_alpha(self, alpha: f32) -> Color {
        self.to_color().with_alpha(saturate(alpha))
    }
}

impl From<Okhsv> for OkHsvColor {
    fn from(hsv: Okhsv) -> Self {
        Self::new(wrap_degrees(hsv.h * 360.0), hsv.s * PERCENT, hsv.v * PERCENT)
    }
}

impl From<OkHsvColor> for Okhsv {
    fn from(c: OkHsvColor) -> Self {
        let c = c.normalized();
        Okhsv::new(c.h / 360.0, c.s / PERCENT, c.v / PERCENT)
    }
}

/// OkLCH with percentage lightness and chroma.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OkLchColor {
    /// Lightness, [0, 100]
    pub l: f32,
    /// Chroma, [0, 100] where 100 is OkLCH chroma 0.4
    pub c: f32,
    /// Hue in degrees, [0, 360)
    pub h: f32,
}

impl OkLchColor {
    /// Creates a new value as given.
    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }

    /// Clamps l, c to [0, 100] and wraps hue. NaN becomes 0.
    pub fn normalized(self) -> Self {
        Self {
            l: sanitize(self.l, 0.0, PERCENT),
            c: sanitize(self.c, 0.0, PERCENT),
            h: wrap_degrees(self.h),
        }
    }

    /// Reads a display color.
    pub fn from_color(color: Color) -> Self {
        color_to_oklch(color).into()
    }

    /// Produces a display color.
    ///
    /// ```rust
    /// use okpick_color::normalized::OkLchColor;
    ///
    /// let white = OkLchColor::new(100.0, 0.0, 250.0).to_color();
    /// assert_eq!(white.to_argb(), 0xFFFFFFFF);
    /// ```
    pub fn to_color(self) -> Color {
        oklch_to_color(self.into())
    }

    /// Produces a display color with the given alpha, clamped to [0, 1].
    pub fn to_color_with_alpha(self, alpha: f32) -> Color {
        self.to_color().with_alpha(saturate(alpha))
    }
}

impl From<Oklch> for OkLchColor {
    fn from(lch: Oklch) -> Self {
        Self::new(lch.l * PERCENT, lch.c / CHROMA_MAX * PERCENT, lch.h)
    }
}

impl From<OkLchColor> for Oklch {
    fn from(c: OkLchColor) -> Self {
        let c = c.normalized();
        Oklch::new(c.l / PERCENT, c.c / PERCENT * CHROMA_MAX, c.h)
    }
}

/// OkLab with percentage lightness and a/b scaled to [-100, 100].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OkLabColor {
    /// Lightness, [0, 100]
    pub l: f32,
    /// Green-red axis, [-100, 100] where 100 is 0.4
    pub a: f32,
    /// Blue-yellow axis, [-100, 100] where 100 is 0.4
    pub b: f32,
}

impl OkLabColor {
    /// Creates a new value as given.
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Clamps l to [0, 100] and a, b to [-100, 100]. NaN becomes the lower bound.
    pub fn normalized(self) -> Self {
        Self {
            l: sanitize(self.l, 0.0, PERCENT),
            a: sanitize(self.a, -PERCENT, PERCENT),
            b: sanitize(self.b, -PERCENT, PERCENT),
        }
    }

    /// Reads a display color.
    pub fn from_color(color: Color) -> Self {
        color_to_oklab(color).into()
    }

    /// Produces a display color.
    pub fn to_color(self) -> Color {
        oklab_to_color(self.into())
    }

    /// Produces a display color with the given alpha, clamped to [0, 1].
    pub fn to_color_with_alpha(self, alpha: f32) -> Color {
        self.to_color().with_alpha(saturate(alpha))
    }
}

impl From<Oklab> for OkLabColor {
    fn from(lab: Oklab) -> Self {
        Self::new(
            lab.l * PERCENT,
            lab.a / AB_MAX * PERCENT,
            lab.b / AB_MAX * PERCENT,
        )
    }
}

impl From<OkLabColor> for Oklab {
    fn from(c: OkLabColor) -> Self {
        let c = c.normalized();
        Oklab::new(
            c.l / PERCENT,
            c.a / PERCENT * AB_MAX,
            c.b / PERCENT * AB_MAX,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(HsvColor::new(0.0, 100.0, 100.0).to_color(), Color::RED);
        assert_eq!(HsvColor::new(120.0, 100.0, 100.0).to_color(), Color::GREEN);
        assert_eq!(HsvColor::new(240.0, 100.0, 100.0).to_color(), Color::BLUE);
    }

    #[test]
    fn test_hsv_from_color() {
        let hsv = HsvColor::from_color(Color::rgb(1.0, 0.5, 0.0));
        assert_abs_diff_eq!(hsv.h, 30.0, epsilon = 0.5);
        assert_eq!(hsv.s, 100.0);
        assert_eq!(hsv.v, 100.0);
    }

    #[test]
    fn test_oklch_white_ignores_hue() {
        for h in [0.0, 45.0, 180.0, 359.0, -90.0, 720.0] {
            let c = OkLchColor::new(100.0, 0.0, h).to_color();
            assert_eq!(c.to_argb(), 0xFFFFFFFF, "h={}", h);
        }
    }

    #[test]
    fn test_normalized_bounds() {
        let n = OkLchColor::new(150.0, -3.0, -90.0).normalized();
        assert_eq!(n, OkLchColor::new(100.0, 0.0, 270.0));

        let n = OkLabColor::new(f32::NAN, 250.0, -250.0).normalized();
        assert_eq!(n, OkLabColor::new(0.0, 100.0, -100.0));

        let n = OkHsvColor::new(400.0, f32::NAN, 101.0).normalized();
        assert_abs_diff_eq!(n.h, 40.0, epsilon = 1e-4);
        assert_eq!((n.s, n.v), (0.0, 101.0));

        let n = OkHsvColor::new(0.0, 250.0, -5.0).normalized();
        assert_abs_diff_eq!(n.s, 110.0, epsilon = 1e-4);
        assert_eq!(n.v, 0.0);
    }

    #[test]
    fn test_to_color_with_alpha() {
        let c = HsvColor::new(240.0, 100.0, 100.0).to_color_with_alpha(0.25);
        assert_eq!(c, Color::BLUE.with_alpha(0.25));

        let src = Color::new(0.3, 0.6, 0.2, 0.4);
        let back = OkLchColor::from_color(src).to_color_with_alpha(src.alpha);
        assert_abs_diff_eq!(back.g, src.g, epsilon = 1e-4);
        assert_eq!(back.alpha, 0.4);

        assert_eq!(OkLabColor::new(50.0, 0.0, 0.0).to_color_with_alpha(3.0).alpha, 1.0);
        assert_eq!(OkHsvColor::new(0.0, 0.0, 50.0).to_color_with_alpha(f32::NAN).alpha, 0.0);
    }

    #[test]
    fn test_scaling_roundtrip() {
        let lch = Oklch::new(0.63, 0.21, 47.5);
        let back: Oklch = OkLchColor::from(lch).into();
        assert_abs_diff_eq!(back.l, lch.l, epsilon = 1e-6);
        assert_abs_diff_eq!(back.c, lch.c, epsilon = 1e-6);
        assert_abs_diff_eq!(back.h, lch.h, epsilon = 1e-6);

        let lab = Oklab::new(0.4, -0.12, 0.3);
        let back: Oklab = OkLabColor::from(lab).into();
        assert_abs_diff_eq!(back.a, lab.a, epsilon = 1e-6);
        assert_abs_diff_eq!(back.b, lab.b, epsilon = 1e-6);

        let okhsv = Okhsv::new(0.4, 0.6, 0.8);
        let back: Okhsv = OkHsvColor::from(okhsv).into();
        assert_abs_diff_eq!(back.h, okhsv.h, epsilon = 1e-6);
        assert_abs_diff_eq!(back.s, okhsv.s, epsilon = 1e-6);
        assert_abs_diff_eq!(back.v, okhsv.v, epsilon = 1e-6);
    }

    #[test]
    fn test_color_roundtrip() {
        let c = Color::rgb(0.25, 0.6, 0.45);

        let back = OkLabColor::from_color(c).to_color();
        assert_abs_diff_eq!(back.g, c.g, epsilon = 1e-4);

        let back = OkLchColor::from_color(c).to_color();
        assert_abs_diff_eq!(back.r, c.r, epsilon = 1e-4);

        let back = OkHsvColor::from_color(c).to_color();
        assert_abs_diff_eq!(back.b, c.b, epsilon = 2e-3);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde_roundtrip() {
        let c = OkLchColor::new(62.5, 40.0, 210.0);
        let json = serde_json::to_string(&c).unwrap();
        let back: OkLchColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
