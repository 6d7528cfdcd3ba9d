//! Row-major 3x3 matrices for the linear stages of OkLab.
//!
//! Matrices act on column vectors, so each output channel is one row
//! dotted with the input:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | row0 . v |
//! | m10 m11 m12 | * | y | = | row1 . v |
//! | m20 m21 m22 |   | z |   | row2 . v |
//! ```
//!
//! [`Mat3::from_rows`] is `const`, so published coefficient tables can
//! live in `const` items written digit for digit.

use crate::Vec3;
use std::ops::Mul;

/// A 3x3 color matrix.
///
/// # Example
///
/// ```rust
/// use okpick_math::{Mat3, Vec3};
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(Mat3::IDENTITY * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    /// Rows, top to bottom
    pub m: [[f32; 3]; 3],
}

impl Mat3 {
    /// Leaves every triplet unchanged.
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    /// Builds a matrix from its rows.
    #[inline]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Row `i` as a triplet. Panics if `i > 2`.
    #[inline]
    pub const fn row(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.m[i])
    }

    /// Applies the matrix to a column vector. Same as `self * v`.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        self.transform(v)
    }
}
