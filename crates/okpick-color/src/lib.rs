//! # okpick-color
//!
//! Color space conversions for perceptual color pickers.
//!
//! Every function here is total: out-of-range and NaN inputs are clamped or
//! wrapped before any matrix math, so a picker never renders garbage from a
//! slightly-off slider value.
//!
//! - **OkLab / OkLCH** - Perceptually uniform Lab and its polar form
//! - **OkHSV** - HSV-shaped controls built on the sRGB gamut cusp in OkLab
//! - **HSV** - Classic HSV over gamma-encoded sRGB (8-bit rounded)
//! - **Gamut geometry** - Cusp search, max saturation, toe curve
//! - **Hue ramps** - Gradient strips, with a memoizing cache for OkLCH
//! - **Planes** - Saturation/value squares, row-parallel with rayon
//!
//! # Architecture
//!
//! ```text
//!                 okpick-color
//!                      |
//!        +-------------+-------------+
//!        |             |             |
//!  okpick-transfer okpick-math       |
//!                      |             |
//!                      +------ okpick-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use okpick_color::{color_to_oklch, oklch_to_color, Oklch};
//! use okpick_color::normalized::OkHsvColor;
//! use okpick_core::Color;
//!
//! // edit chroma in OkLCH, keep lightness and hue
//! let mut lch = color_to_oklch(Color::rgb(0.8, 0.3, 0.2));
//! lch.c *= 0.5;
//! let muted = oklch_to_color(lch);
//! assert!(muted.r < 0.8);
//!
//! // slider-facing OkHSV
//! let ui = OkHsvColor::from_color(Color::RED);
//! assert!(ui.s > 95.0);
//! ```
//!
//! # Color Spaces
//!
//! | Space | Components | Ranges |
//! |-------|------------|--------|
//! | sRGB | r, g, b | [0, 1], gamma-encoded |
//! | Linear sRGB | r, g, b | [0, 1], linear light |
//! | OkLab | L, a, b | L [0, 1], a/b about [-0.4, 0.4] |
//! | OkLCH | L, C, h | L [0, 1], C [0, 0.4], h degrees |
//! | HSV | h, s, v | h degrees, s/v [0, 1] |
//! | OkHSV | h, s, v | h turn fraction, s/v [0, 1] |
//!
//! # Dependencies
//!
//! - [`okpick-core`] - `Color`, `ColorSpace`
//! - [`okpick-math`] - `Vec3`, `Mat3`, hue wrapping
//! - [`okpick-transfer`] - sRGB transfer function
//! - `tracing` - Cache and plane events
//! - `rayon` (optional) - Parallel planes
//!
//! # Feature Flags
//!
//! - `parallel` (default) - Fill planes with rayon
//! - `serde` - Derive `Serialize`/`Deserialize` on all value types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cache;
pub mod convert;
pub mod gamut;
pub mod hsv;
pub mod normalized;
pub mod okhsv;
pub mod oklab;
pub mod oklch;
pub mod plane;
pub mod ramp;

pub use cache::{CacheStats, HueRampCache, HueRampKey};
pub use convert::{RgbConvert, contrast_ratio, is_light, relative_luminance, to_linear, to_srgb};
pub use hsv::{Hsv, color_to_hsv, hsv_to_color};
pub use normalized::{HsvColor, OkHsvColor, OkLabColor, OkLchColor};
pub use okhsv::{Okhsv, color_to_okhsv, okhsv_to_color};
pub use oklab::{Oklab, color_to_oklab, normalize_oklab, oklab_to_color};
pub use oklch::{Oklch, color_to_oklch, normalize_oklch, oklch_to_color};
pub use ramp::{HUE_SAMPLES, generate_hsv_hue_colors, generate_okhsv_hue_colors, generate_oklch_hue_colors};

// Re-export sub-crates for convenience
pub use okpick_math as math;
pub use okpick_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        HsvColor, HueRampCache, OkHsvColor, OkLabColor, OkLchColor, Okhsv, Oklab, Oklch, Hsv,
        RgbConvert,
    };
    pub use crate::{
        color_to_hsv, color_to_okhsv, color_to_oklab, color_to_oklch, hsv_to_color,
        okhsv_to_color, oklab_to_color, oklch_to_color,
    };
    pub use okpick_core::{Color, ColorSpace};
}
