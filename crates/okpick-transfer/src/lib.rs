//! # okpick-transfer
//!
//! Transfer functions between encoded and linear-light values.
//!
//! Perceptual spaces (OkLab and everything built on it) are defined over
//! linear light, while hosts hand over gamma-encoded sRGB. This crate holds
//! the piecewise sRGB curve that bridges the two.
//!
//! # Terminology
//!
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//!
//! # Usage
//!
//! ```rust
//! use okpick_transfer::srgb;
//!
//! let linear = srgb::eotf(0.5);
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-5);
//! ```
//!
//! # Used By
//!
//! - `okpick-color` - every conversion that starts or ends at a display color

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;
