//! Encoding-level conversions shared by every color space module.
//!
//! # Contents
//!
//! - [`RgbConvert`] - Chainable transfer/matrix/clamp steps on `[f32; 3]`
//! - [`to_srgb`], [`to_linear`] - Honour a [`Color`]'s [`ColorSpace`] tag
//! - [`relative_luminance`], [`contrast_ratio`], [`is_light`] - Pick a
//!   legible overlay (hex label, checkmark) for a swatch
//!
//! # Example
//!
//! ```rust
//! use okpick_color::convert::RgbConvert;
//! use okpick_color::transfer::srgb;
//!
//! let linear = [0.5_f32, 0.3, 0.2].linearize(srgb::eotf);
//! let back = linear.encode(srgb::oetf);
//! assert!((back[0] - 0.5).abs() < 1e-5);
//! ```

use okpick_core::{Color, ColorSpace};
use okpick_math::{Mat3, Vec3, saturate};
use okpick_transfer::srgb;

/// Rec.709 luma weights applied to linear sRGB.
pub const REC709_LUMA: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// RGB triplet operations, chainable.
///
/// # Example
///
/// ```rust
/// use okpick_color::RgbConvert;
/// use okpick_color::transfer::srgb;
/// use okpick_math::Mat3;
///
/// let out = [0.5_f32, 0.3, 0.2]
///     .linearize(srgb::eotf)
///     .transform(&Mat3::IDENTITY)
///     .encode(srgb::oetf)
///     .clamp_01();
/// assert!(out.iter().all(|c| (0.0..=1.0).contains(c)));
/// ```
pub trait RgbConvert: Sized {
    /// Applies a decoding transfer function (EOTF) per channel.
    fn linearize(self, f: fn(f32) -> f32) -> Self;

    /// Applies an encoding transfer function (OETF) per channel.
    fn encode(self, f: fn(f32) -> f32) -> Self;

    /// Applies a 3x3 matrix transformation.
    fn transform(self, matrix: &Mat3) -> Self;

    /// Clamps each channel to a range. NaN maps to `min`.
    fn clamp(self, min: f32, max: f32) -> Self;

    /// Clamps each channel to [0, 1].
    fn clamp_01(self) -> Self {
        self.clamp(0.0, 1.0)
    }
}

impl RgbConvert for [f32; 3] {
    fn linearize(self, f: fn(f32) -> f32) -> Self {
        [f(self[0]), f(self[1]), f(self[2])]
    }

    fn encode(self, f: fn(f32) -> f32) -> Self {
        [f(self[0]), f(self[1]), f(self[2])]
    }

    fn transform(self, matrix: &Mat3) -> Self {
        matrix.transform(Vec3::from_array(self)).to_array()
    }

    fn clamp(self, min: f32, max: f32) -> Self {
        [
            okpick_math::clamp(self[0], min, max),
            okpick_math::clamp(self[1], min, max),
            okpick_math::clamp(self[2], min, max),
        ]
    }
}

/// Returns the color re-encoded as gamma sRGB, channels clamped to [0, 1].
///
/// Alpha is clamped too. NaN channels become 0.
pub fn to_srgb(color: Color) -> Color {
    let rgb = color.to_array().clamp_01();
    let rgb = match color.space {
        ColorSpace::Srgb => rgb,
        ColorSpace::LinearSrgb => rgb.encode(srgb::oetf),
    };
    Color::new(rgb[0], rgb[1], rgb[2], saturate(color.alpha))
}

/// Returns the color with linear-light channels, clamped to [0, 1].
pub fn to_linear(color: Color) -> Color {
    let rgb = color.to_array().clamp_01();
    let rgb = match color.space {
        ColorSpace::Srgb => rgb.linearize(srgb::eotf),
        ColorSpace::LinearSrgb => rgb,
    };
    Color::linear(rgb[0], rgb[1], rgb[2]).with_alpha(saturate(color.alpha))
}

/// WCAG 2.1 relative luminance in [0, 1].
pub fn relative_luminance(color: Color) -> f32 {
    let linear = to_linear(color);
    Vec3::from(linear).dot(Vec3::from_array(REC709_LUMA))
}

/// WCAG 2.1 contrast ratio in [1, 21], independent of argument order.
pub fn contrast_ratio(a: Color, b: Color) -> f32 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// True when black text reads better on `color` than white text.
pub fn is_light(color: Color) -> bool {
    contrast_ratio(color, Color::BLACK) >= contrast_ratio(color, Color::WHITE)
}
