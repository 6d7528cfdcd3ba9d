//! Hue ramps for picker gradients.
//!
//! Every generator sweeps the full hue circle. Sample `i` of `n` sits at
//! `i * 360 / (n - 1)` degrees, so the first and last samples share a hue and
//! a gradient drawn through them closes on itself.
//!
//! The HSV and OkHSV ramps are cheap. The OkLCH ramp runs a cusp search per
//! sample; see [`crate::cache::HueRampCache`] for the memoized form.

use crate::gamut::max_chroma;
use crate::hsv::{Hsv, hsv_to_color};
use crate::okhsv::{Okhsv, okhsv_to_color};
use crate::oklch::{Oklch, oklch_to_color};
use okpick_core::Color;
use okpick_math::{sanitize, saturate};

/// Default number of samples in a hue ramp.
pub const HUE_SAMPLES: usize = 36;

/// Hue in degrees of sample `i` out of `n`.
#[inline]
fn sample_hue(i: usize, n: usize) -> f32 {
    if n <= 1 {
        0.0
    } else {
        i as f32 * 360.0 / (n - 1) as f32
    }
}

/// Fully saturated, full value HSV colors across the hue circle.
///
/// # Example
///
/// ```rust
/// use okpick_color::ramp::{HUE_SAMPLES, generate_hsv_hue_colors};
/// use okpick_core::Color;
///
/// let ramp = generate_hsv_hue_colors(HUE_SAMPLES);
/// assert_eq!(ramp.len(), 36);
/// assert_eq!(ramp[0], Color::RED);
/// ```
pub fn generate_hsv_hue_colors(samples: usize) -> Vec<Color> {
    (0..samples)
        .map(|i| hsv_to_color(Hsv::new(sample_hue(i, samples), 1.0, 1.0)))
        .collect()
}

/// Fully saturated, full value OkHSV colors across the hue circle.
pub fn generate_okhsv_hue_colors(samples: usize) -> Vec<Color> {
    (0..samples)
        .map(|i| okhsv_to_color(Okhsv::new(sample_hue(i, samples) / 360.0, 1.0, 1.0)))
        .collect()
}

/// OkLCH colors at lightness `l` across the hue circle.
///
/// Chroma at each hue is `chroma_proportion` of the largest chroma that still
/// fits in sRGB at that hue and lightness, so every sample is displayable and
/// the ramp keeps a constant relative colorfulness.
pub fn generate_oklch_hue_colors(l: f32, chroma_proportion: f32, steps: usize) -> Vec<Color> {
    let l = saturate(l);
    let proportion = sanitize(chroma_proportion, 0.0, 1.0);

    (0..steps)
        .map(|i| {
            let h = sample_hue(i, steps);
            let (b_, a_) = h.to_radians().sin_cos();
            let c = proportion * max_chroma(l, a_, b_);
            oklch_to_color(Oklch::new(l, c, h))
        })
        .collect()
}
