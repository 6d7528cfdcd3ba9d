//! Color triplets.
//!
//! [`Vec3`] carries RGB, LMS and Lab values between the matrix stages of
//! OkLab. It holds only what those stages need: the cube and cube root of
//! the LMS nonlinearity, a dot product, clipping and channel extremes.
//!
//! # Usage
//!
//! ```rust
//! use okpick_math::Vec3;
//!
//! let lms = Vec3::new(0.008, 0.027, 0.125);
//! let lms_ = lms.cbrt();
//! assert!((lms_.x - 0.2).abs() < 1e-6);
//! assert!((lms_.cube().z - 0.125).abs() < 1e-6);
//! ```

use crate::interp::saturate;
use okpick_core::Color;

/// An RGB, LMS or Lab triplet.
///
/// For RGB: x=R, y=G, z=B. For Lab: x=L, y=a, z=b.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// R, L (LMS) or Lab lightness
    pub x: f32,
    /// G, M (LMS) or Lab a
    pub y: f32,
    /// B, S (LMS) or Lab b
    pub z: f32,
}

impl Vec3 {
    /// White in linear RGB, (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new triplet.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// From `[x, y, z]`.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// To `[x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Weighted sum, e.g. luma from linear RGB.
    #[inline]
    pub fn dot(self, weights: Self) -> f32 {
        self.x * weights.x + self.y * weights.y + self.z * weights.z
    }

    /// Clips each channel to [0, 1]. NaN becomes 0.
    #[inline]
    pub fn clamp01(self) -> Self {
        Self::new(saturate(self.x), saturate(self.y), saturate(self.z))
    }

    /// Real cube root per channel (LMS to LMS').
    #[inline]
    pub fn cbrt(self) -> Self {
        Self::new(self.x.cbrt(), self.y.cbrt(), self.z.cbrt())
    }

    /// Cube per channel (LMS' to LMS).
    #[inline]
    pub fn cube(self) -> Self {
        Self::new(self.x.powi(3), self.y.powi(3), self.z.powi(3))
    }

    /// Smallest channel. The one that clips first at the gamut floor.
    #[inline]
    pub fn min_element(self) -> f32 {
        self.x.min(self.y).min(self.z)
    }

    /// Largest channel. The one that clips first at the gamut ceiling.
    #[inline]
    pub fn max_element(self) -> f32 {
        self.x.max(self.y).max(self.z)
    }
}

impl From<Color> for Vec3 {
    /// Takes the channels as stored, ignoring alpha and the space tag.
    #[inline]
    fn from(c: Color) -> Self {
        Self::new(c.r, c.g, c.b)
    }
}
