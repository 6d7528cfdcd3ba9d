//! Classic HSV over gamma-encoded sRGB.
//!
//! The forward direction works on 8-bit quantized channels so that a color
//! read back from a swatch produces the same HSV triple the picker showed
//! when the swatch was created.

use crate::convert::to_srgb;
use okpick_core::Color;
use okpick_math::{saturate, wrap_degrees};

/// A color in HSV.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    /// Hue in degrees, [0, 360)
    pub h: f32,
    /// Saturation, [0, 1]
    pub s: f32,
    /// Value, [0, 1]
    pub v: f32,
}

impl Hsv {
    /// Creates a new HSV value. No normalization is applied.
    #[inline]
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

/// Converts a display color to HSV via 8-bit channels.
///
/// # Example
///
/// ```rust
/// use okpick_color::color_to_hsv;
/// use okpick_core::Color;
///
/// let hsv = color_to_hsv(Color::rgb(0.0, 0.0, 1.0));
/// assert_eq!((hsv.h, hsv.s, hsv.v), (240.0, 1.0, 1.0));
/// ```
pub fn color_to_hsv(color: Color) -> Hsv {
    let [r, g, b, _] = to_srgb(color).to_rgba8();
    let (r, g, b) = (r as i32, g as i32, b as i32);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = (max - min) as f32;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) as f32 / delta)
    } else if max == g {
        60.0 * ((b - r) as f32 / delta + 2.0)
    } else {
        60.0 * ((r - g) as f32 / delta + 4.0)
    };

    let s = if max == 0 { 0.0 } else { delta / max as f32 };

    Hsv {
        h: wrap_degrees(h),
        s,
        v: max as f32 / 255.0,
    }
}

/// Converts HSV to an opaque sRGB display color.
///
/// Hue wraps; saturation and value are clamped to [0, 1].
///
/// # Example
///
/// ```rust
/// use okpick_color::{Hsv, hsv_to_color};
/// use okpick_core::Color;
///
/// assert_eq!(hsv_to_color(Hsv::new(120.0, 1.0, 1.0)), Color::GREEN);
/// ```
pub fn hsv_to_color(hsv: Hsv) -> Color {
    let h = wrap_degrees(hsv.h);
    let s = saturate(hsv.s);
    let v = saturate(hsv.v);

    let c = v * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Color::rgb(r + m, g + m, b + m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_primaries() {
        assert_eq!(hsv_to_color(Hsv::new(0.0, 1.0, 1.0)), Color::RED);
        assert_eq!(hsv_to_color(Hsv::new(120.0, 1.0, 1.0)), Color::GREEN);
        assert_eq!(hsv_to_color(Hsv::new(240.0, 1.0, 1.0)), Color::BLUE);
        assert_eq!(hsv_to_color(Hsv::new(360.0, 1.0, 1.0)), Color::RED);
    }

    #[test]
    fn test_secondaries() {
        let yellow = color_to_hsv(Color::rgb(1.0, 1.0, 0.0));
        assert_eq!(yellow.h, 60.0);
        let magenta = color_to_hsv(Color::rgb(1.0, 0.0, 1.0));
        assert_eq!(magenta.h, 300.0);
    }

    #[test]
    fn test_gray_has_no_saturation() {
        for i in 0..=10 {
            let k = i as f32 / 10.0;
            let hsv = color_to_hsv(Color::rgb(k, k, k));
            assert_eq!(hsv.s, 0.0);
            assert_eq!(hsv.h, 0.0);
            assert_abs_diff_eq!(hsv.v, k, epsilon = 1.0 / 255.0);
        }
    }

    #[test]
    fn test_roundtrip_through_8bit() {
        for argb in [0xFF336699u32, 0xFFFF8000, 0xFF10E0A0, 0xFF7F007F] {
            let color = Color::from_argb(argb);
            let back = hsv_to_color(color_to_hsv(color));
            assert_eq!(back.to_argb(), argb);
        }
    }

    #[test]
    fn test_out_of_range_input() {
        let c = hsv_to_color(Hsv::new(-120.0, 2.0, f32::NAN));
        assert_eq!(c, Color::BLACK);
        let c = hsv_to_color(Hsv::new(-120.0, 2.0, 1.0));
        assert_eq!(c, Color::BLUE);
    }
}
