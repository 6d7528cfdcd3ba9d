//! OkLab: linear sRGB <-> perceptual Lab.
//!
//! The forward transform is two matrix stages around a cube root:
//!
//! ```text
//! linear RGB --M1--> LMS --cbrt--> LMS' --M2--> (L, a, b)
//! ```
//!
//! and the inverse runs the same stages backwards, ending with a hard clip
//! of linear RGB to [0, 1]. The coefficients are the fitted values published
//! with OkLab and are reproduced to full precision; they are not derivable
//! and must not be rounded.
//!
//! # Ranges
//!
//! | Component | Range |
//! |-----------|-------|
//! | L | [0, 1] |
//! | a, b | roughly [-0.4, 0.4] |
//!
//! # Reference
//!
//! Björn Ottosson, "A perceptual color space for image processing" (2020).

#![allow(clippy::excessive_precision)]

use crate::convert::{RgbConvert, to_linear};
use okpick_core::Color;
use okpick_math::{Mat3, Vec3, sanitize};
use okpick_transfer::srgb;

/// Linear sRGB to cone response (LMS).
pub const LINEAR_TO_LMS: Mat3 = Mat3::from_rows([
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
]);

/// Cube-rooted LMS to (L, a, b).
pub const LMS_TO_OKLAB: Mat3 = Mat3::from_rows([
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
]);

/// (L, a, b) back to cube-rooted LMS.
pub const OKLAB_TO_LMS: Mat3 = Mat3::from_rows([
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
]);

/// LMS back to linear sRGB.
pub const LMS_TO_LINEAR: Mat3 = Mat3::from_rows([
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
]);

/// Bound on |a| and |b| at the public-facing layer.
pub const AB_MAX: f32 = 0.4;

/// A color in OkLab.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklab {
    /// Perceptual lightness
    pub l: f32,
    /// Green (-) to red (+) axis
    pub a: f32,
    /// Blue (-) to yellow (+) axis
    pub b: f32,
}

impl Oklab {
    /// Creates a new OkLab value.
    #[inline]
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Distance from the neutral axis.
    #[inline]
    pub fn chroma(&self) -> f32 {
        self.a.hypot(self.b)
    }

    /// Returns `[L, a, b]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.l, self.a, self.b]
    }
}

impl From<Vec3> for Oklab {
    #[inline]
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Oklab> for Vec3 {
    #[inline]
    fn from(lab: Oklab) -> Self {
        Vec3::new(lab.l, lab.a, lab.b)
    }
}

/// Converts linear sRGB to OkLab. No clamping.
///
/// # Example
///
/// ```rust
/// use okpick_color::oklab::linear_rgb_to_oklab;
/// use okpick_math::Vec3;
///
/// let white = linear_rgb_to_oklab(Vec3::ONE);
/// assert!((white.l - 1.0).abs() < 1e-5);
/// assert!(white.a.abs() < 1e-5 && white.b.abs() < 1e-5);
/// ```
#[inline]
pub fn linear_rgb_to_oklab(rgb: Vec3) -> Oklab {
    let lms = LINEAR_TO_LMS * rgb;
    (LMS_TO_OKLAB * lms.cbrt()).into()
}

/// Converts OkLab to linear sRGB without clipping.
///
/// Out-of-gamut input yields channels outside [0, 1]; gamut geometry relies
/// on seeing those values.
#[inline]
pub fn oklab_to_linear_rgb_unclamped(lab: Oklab) -> Vec3 {
    let lms_ = OKLAB_TO_LMS * Vec3::from(lab);
    LMS_TO_LINEAR * lms_.cube()
}

/// Converts OkLab to linear sRGB, hard-clipping to [0, 1].
#[inline]
pub fn oklab_to_linear_rgb(lab: Oklab) -> Vec3 {
    oklab_to_linear_rgb_unclamped(lab).clamp01()
}

/// Clamps L to [0, 1] and a, b to [-0.4, 0.4]. NaN components become the lower bound.
pub fn normalize_oklab(lab: Oklab) -> Oklab {
    Oklab {
        l: sanitize(lab.l, 0.0, 1.0),
        a: sanitize(lab.a, -AB_MAX, AB_MAX),
        b: sanitize(lab.b, -AB_MAX, AB_MAX),
    }
}

/// Converts a display color to OkLab.
///
/// The color's space tag is honoured and its channels clamped first; alpha is ignored.
///
/// # Example
///
/// ```rust
/// use okpick_color::color_to_oklab;
/// use okpick_core::Color;
///
/// let lab = color_to_oklab(Color::WHITE);
/// assert!((lab.l - 1.0).abs() < 1e-5);
/// ```
pub fn color_to_oklab(color: Color) -> Oklab {
    let linear = to_linear(color);
    linear_rgb_to_oklab(Vec3::from(linear))
}

/// Converts OkLab to an opaque sRGB display color.
///
/// Input is normalized with [`normalize_oklab`]; out-of-gamut results are hard-clipped.
pub fn oklab_to_color(lab: Oklab) -> Color {
    let linear = oklab_to_linear_rgb(normalize_oklab(lab));
    let [r, g, b] = linear.to_array().encode(srgb::oetf).clamp_01();
    Color::rgb(r, g, b)
}
