//! Saturation/value planes for the main picker square.
//!
//! A plane is a row-major `Vec<Color>` of `width * height` samples at one
//! hue. Saturation grows left to right; value falls top to bottom, so the
//! top-right corner is the fully saturated color and the bottom row is black.
//!
//! When the `parallel` feature is enabled, rows are filled with rayon.

use okpick_core::Color;
use tracing::trace;

use crate::hsv::{Hsv, hsv_to_color};
use crate::okhsv::{Okhsv, okhsv_to_color};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Normalize pixel coordinate to [0, 1] range.
#[inline]
fn normalize(coord: usize, size: usize) -> f32 {
    if size <= 1 { 0.5 } else { coord as f32 / (size - 1) as f32 }
}

/// Fills a plane from a `(s, v) -> Color` function.
#[cfg(feature = "parallel")]
fn fill_plane<F>(width: usize, height: usize, color_fn: F) -> Vec<Color>
where
    F: Fn(f32, f32) -> Color + Sync,
{
    let mut dst = vec![Color::BLACK; width * height];

    dst.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        let v = 1.0 - normalize(y, height);
        for (x, px) in row.iter_mut().enumerate() {
            *px = color_fn(normalize(x, width), v);
        }
    });

    dst
}

/// Fills a plane from a `(s, v) -> Color` function (single-threaded fallback).
#[cfg(not(feature = "parallel"))]
fn fill_plane<F>(width: usize, height: usize, color_fn: F) -> Vec<Color>
where
    F: Fn(f32, f32) -> Color,
{
    let mut dst = vec![Color::BLACK; width * height];

    for (y, row) in dst.chunks_mut(width).enumerate() {
        let v = 1.0 - normalize(y, height);
        for (x, px) in row.iter_mut().enumerate() {
            *px = color_fn(normalize(x, width), v);
        }
    }

    dst
}

/// OkHSV plane at `hue` degrees.
///
/// # Example
///
/// ```rust
/// use okpick_color::plane::okhsv_plane;
/// use okpick_core::Color;
///
/// let plane = okhsv_plane(30.0, 16, 8);
/// assert_eq!(plane.len(), 16 * 8);
/// assert_eq!(plane[7 * 16], Color::BLACK);
/// ```
pub fn okhsv_plane(hue: f32, width: usize, height: usize) -> Vec<Color> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    trace!(width, height, hue, "okhsv_plane");
    let h = hue / 360.0;
    fill_plane(width, height, |s, v| okhsv_to_color(Okhsv::new(h, s, v)))
}

/// HSV plane at `hue` degrees.
pub fn hsv_plane(hue: f32, width: usize, height: usize) -> Vec<Color> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    trace!(width, height, hue, "hsv_plane");
    fill_plane(width, height, |s, v| hsv_to_color(Hsv::new(hue, s, v)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::okhsv::color_to_okhsv;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(0, 1), 0.5);
        assert_eq!(normalize(0, 5), 0.0);
        assert_eq!(normalize(4, 5), 1.0);
    }

    #[test]
    fn test_empty() {
        assert!(okhsv_plane(0.0, 0, 10).is_empty());
        assert!(hsv_plane(0.0, 10, 0).is_empty());
    }

    #[test]
    fn test_hsv_corners() {
        let (w, h) = (9, 5);
        let plane = hsv_plane(0.0, w, h);
        assert_eq!(plane.len(), w * h);
        assert_eq!(plane[0], Color::WHITE);
        assert_eq!(plane[w - 1], Color::RED);
        for x in 0..w {
            assert_eq!(plane[(h - 1) * w + x], Color::BLACK);
        }
    }

    #[test]
    fn test_okhsv_matches_pointwise() {
        let (w, h) = (7, 6);
        let plane = okhsv_plane(200.0, w, h);
        for y in 0..h {
            for x in 0..w {
                let expected = okhsv_to_color(Okhsv::new(
                    200.0 / 360.0,
                    normalize(x, w),
                    1.0 - normalize(y, h),
                ));
                assert_eq!(plane[y * w + x], expected);
            }
        }
    }

    #[test]
    fn test_okhsv_top_right_is_saturated() {
        let plane = okhsv_plane(140.0, 8, 8);
        let hsv = color_to_okhsv(plane[7]);
        assert_abs_diff_eq!(hsv.s, 1.0, epsilon = 2e-2);
        assert_abs_diff_eq!(hsv.v, 1.0, epsilon = 2e-2);
    }
}
