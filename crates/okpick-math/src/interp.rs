//! Scalar helpers for color math.
//!
//! - Linear interpolation ([`lerp`])
//! - Clamping that also absorbs NaN ([`clamp`], [`saturate`], [`sanitize`])
//! - Hue normalization ([`wrap_degrees`], [`wrap_unit`], [`hue_distance`])
//!
//! # Usage
//!
//! ```rust
//! use okpick_math::{hue_distance, wrap_degrees};
//!
//! assert_eq!(wrap_degrees(-90.0), 270.0);
//! assert!((hue_distance(359.0, 1.0) - 2.0).abs() < 1e-4);
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Example
///
/// ```rust
/// use okpick_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamps a value to the range [min, max].
///
/// NaN maps to `min`, since `f32::max` discards a NaN operand.
///
/// # Example
///
/// ```rust
/// use okpick_math::clamp;
///
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// assert_eq!(clamp(f32::NAN, 0.0, 1.0), 0.0);
/// ```
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Clamps a value to [0, 1].
#[inline]
pub fn saturate(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Brings an externally supplied value into [min, max].
///
/// NaN maps to `min`; infinities clamp to the nearer bound.
#[inline]
pub fn sanitize(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() { min } else { value.clamp(min, max) }
}

/// Reduces an angle in degrees to [0, 360).
///
/// Non-finite input maps to 0.
///
/// # Example
///
/// ```rust
/// use okpick_math::wrap_degrees;
///
/// assert_eq!(wrap_degrees(360.0), 0.0);
/// assert_eq!(wrap_degrees(725.0), 5.0);
/// assert_eq!(wrap_degrees(f32::NAN), 0.0);
/// ```
#[inline]
pub fn wrap_degrees(degrees: f32) -> f32 {
    wrap(degrees, 360.0)
}

/// Reduces a turn fraction to [0, 1).
///
/// Non-finite input maps to 0.
#[inline]
pub fn wrap_unit(turns: f32) -> f32 {
    wrap(turns, 1.0)
}

/// Shortest angular distance between two hues, in degrees.
///
/// The result is in [0, 180].
#[inline]
pub fn hue_distance(a: f32, b: f32) -> f32 {
    let d = wrap_degrees(a - b);
    d.min(360.0 - d)
}

#[inline]
fn wrap(value: f32, period: f32) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }
    let w = value.rem_euclid(period);
    // rem_euclid of a tiny negative can round up to the period itself
    if w >= period { 0.0 } else { w }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
    }

    #[test]
    fn test_saturate() {
        assert_eq!(saturate(-0.5), 0.0);
        assert_eq!(saturate(0.5), 0.5);
        assert_eq!(saturate(1.5), 1.0);
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize(f32::NAN, 0.0, 0.4), 0.0);
        assert_eq!(sanitize(f32::INFINITY, 0.0, 0.4), 0.4);
        assert_eq!(sanitize(f32::NEG_INFINITY, -0.4, 0.4), -0.4);
        assert_eq!(sanitize(0.25, 0.0, 0.4), 0.25);
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(-1.0), 359.0);
        assert_eq!(wrap_degrees(-720.0), 0.0);
        assert_eq!(wrap_degrees(f32::INFINITY), 0.0);
        let tiny = wrap_degrees(-1e-8);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_wrap_unit() {
        assert_eq!(wrap_unit(1.25), 0.25);
        assert_eq!(wrap_unit(-0.25), 0.75);
        assert!(wrap_unit(-1e-9) < 1.0);
    }

    #[test]
    fn test_hue_distance() {
        assert!((hue_distance(1.0, 359.0) - 2.0).abs() < 1e-4);
        assert_eq!(hue_distance(90.0, 270.0), 180.0);
        assert_eq!(hue_distance(45.0, 45.0), 0.0);
    }
}
