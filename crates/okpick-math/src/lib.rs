//! # okpick-math
//!
//! Math primitives for perceptual color conversion:
//!
//! - [`Mat3`] - 3x3 matrices for the linear stages of OkLab
//! - [`Vec3`] - 3D vectors for RGB, LMS and Lab triplets
//! - Scalar helpers: [`lerp`], [`clamp`], [`sanitize`], [`wrap_degrees`],
//!   [`wrap_unit`], [`hue_distance`]
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use okpick_math::{Mat3, Vec3};
//!
//! let lms_from_rgb = Mat3::from_rows([
//!     [0.4122214708, 0.5363325363, 0.0514459929],
//!     [0.2119034982, 0.6806995451, 0.1073969566],
//!     [0.0883024619, 0.2817188376, 0.6299787005],
//! ]);
//!
//! let lms = lms_from_rgb * Vec3::ONE;
//! assert!((lms.x - 1.0).abs() < 1e-6);
//! ```
//!
//! # Dependencies
//!
//! - [`okpick-core`] - Core types
//!
//! # Used By
//!
//! - `okpick-color` - OkLab matrices, gamut geometry, hue normalization

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;
mod mat3;
mod vec3;

pub use interp::*;
pub use mat3::*;
pub use vec3::*;
