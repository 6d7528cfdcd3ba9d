//! # okpick-core
//!
//! Core color value type shared by every okpick crate.
//!
//! This crate provides the foundational types used throughout the workspace:
//!
//! - [`Color`] - Plain RGBA value (four floats) tagged with a [`ColorSpace`]
//! - [`ColorSpace`] - Encoding tag: gamma-encoded sRGB or linear-light sRGB
//! - [`Error`], [`Result`] - Failures of text input (hex parsing)
//!
//! ## Design Philosophy
//!
//! The color value is deliberately dumb: it carries numbers and a tag, and
//! nothing else. All conversions into perceptual spaces live as free functions
//! in `okpick-color`, so any UI toolkit can map its own color type onto
//! [`Color`] without pulling the engine into its object model.
//!
//! ```
//! use okpick_core::{Color, ColorSpace};
//!
//! let orange: Color = "#FF8000".parse().unwrap();
//! assert_eq!(orange.space, ColorSpace::Srgb);
//! assert_eq!(orange.to_hex(), "#FF8000");
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! okpick-core (this crate)
//!    ^
//!    |
//!    +-- okpick-math (vectors, matrices, scalar helpers)
//!    +-- okpick-transfer (sRGB transfer function)
//!    +-- okpick-color (all color space conversions)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Derive `Serialize`/`Deserialize` for [`Color`] and [`ColorSpace`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;

pub use color::{Color, ColorSpace};
pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// ```
/// use okpick_core::prelude::*;
///
/// let c = Color::rgb(1.0, 0.0, 0.0);
/// assert_eq!(c, Color::RED);
/// ```
pub mod prelude {
    pub use crate::color::{Color, ColorSpace};
    pub use crate::error::{Error, Result};
}
