//! The [`Color`] value and its encoding tag.
//!
//! A [`Color`] is what a UI host hands to the engine and what the engine hands
//! back: four `f32` channels plus a [`ColorSpace`] saying how the RGB channels
//! are encoded.
//!
//! # Channel Ranges
//!
//! | Channel | Range | Notes |
//! |---------|-------|-------|
//! | `r`, `g`, `b` | [0, 1] | Interpretation depends on `space` |
//! | `alpha` | [0, 1] | Straight (non-premultiplied) |
//!
//! Values outside the ranges are representable on purpose: a host may produce
//! them, and the conversion layer clamps before doing any math. Use
//! [`Color::sanitized`] to apply the same policy explicitly.
//!
//! # Codecs
//!
//! - 8-bit: [`Color::from_rgba8`], [`Color::to_rgba8`]
//! - Packed ARGB: [`Color::from_argb`], [`Color::to_argb`]
//! - Hex text: [`Color::from_hex`], [`Color::to_hex`], plus `FromStr`/`Display`

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Encoding of the RGB channels of a [`Color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorSpace {
    /// Gamma-encoded, display-referred sRGB (IEC 61966-2-1).
    #[default]
    Srgb,
    /// sRGB primaries with linear-light channels (no transfer function).
    LinearSrgb,
}

impl ColorSpace {
    /// Returns true if channels are linear light.
    #[inline]
    pub const fn is_linear(self) -> bool {
        matches!(self, Self::LinearSrgb)
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Srgb => "sRGB",
            Self::LinearSrgb => "Linear sRGB",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An RGBA color tagged with its channel encoding.
///
/// # Example
///
/// ```rust
/// use okpick_core::{Color, ColorSpace};
///
/// let c = Color::new(0.2, 0.4, 0.6, 1.0);
/// assert_eq!(c.space, ColorSpace::Srgb);
/// assert_eq!(c.to_rgba8(), [51, 102, 153, 255]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Straight alpha
    pub alpha: f32,
    /// Encoding of `r`, `g`, `b`
    pub space: ColorSpace,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque sRGB red.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Opaque sRGB green.
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    /// Opaque sRGB blue.
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates an sRGB color with alpha.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, alpha: f32) -> Self {
        Self { r, g, b, alpha, space: ColorSpace::Srgb }
    }

    /// Creates an opaque sRGB color.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Creates an opaque color with linear-light channels.
    #[inline]
    pub const fn linear(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, alpha: 1.0, space: ColorSpace::LinearSrgb }
    }

    /// Creates an sRGB color from 8-bit channels.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Creates an sRGB color from a packed `0xAARRGGBB` value.
    ///
    /// ```rust
    /// use okpick_core::Color;
    ///
    /// assert_eq!(Color::from_argb(0xFFFF0000), Color::RED);
    /// ```
    pub fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_rgba8(r, g, b, a)
    }

    /// Returns the RGB channels as an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Returns a copy with RGB channels replaced, keeping alpha and space.
    #[inline]
    pub const fn with_rgb(self, rgb: [f32; 3]) -> Self {
        Self { r: rgb[0], g: rgb[1], b: rgb[2], ..self }
    }

    /// Returns a copy with a different alpha.
    #[inline]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Returns true if every channel is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.alpha.is_finite()
    }

    /// Replaces NaN channels with 0 and clamps everything to [0, 1].
    ///
    /// ```rust
    /// use okpick_core::Color;
    ///
    /// let c = Color::new(f32::NAN, 1.5, -0.25, 2.0).sanitized();
    /// assert_eq!(c, Color::new(0.0, 1.0, 0.0, 1.0));
    /// ```
    pub fn sanitized(self) -> Self {
        Self {
            r: unit(self.r),
            g: unit(self.g),
            b: unit(self.b),
            alpha: unit(self.alpha),
            space: self.space,
        }
    }

    /// Quantizes to 8-bit channels, rounding to nearest.
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.alpha),
        ]
    }

    /// Packs into `0xAARRGGBB`.
    pub fn to_argb(self) -> u32 {
        let [r, g, b, a] = self.to_rgba8();
        u32::from_be_bytes([a, r, g, b])
    }

    /// Parses `RGB`, `RRGGBB` or `AARRGGBB` hex, with an optional leading `#`.
    ///
    /// The result is always tagged [`ColorSpace::Srgb`].
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidHexDigit`] if any character is not a hex digit
    /// - [`Error::InvalidHexLength`] if the digit count is not 3, 6 or 8
    ///
    /// # Example
    ///
    /// ```rust
    /// use okpick_core::Color;
    ///
    /// assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
    /// assert_eq!(Color::from_hex("80FF0000").unwrap().to_rgba8(), [255, 0, 0, 128]);
    /// ```
    pub fn from_hex(input: &str) -> Result<Self> {
        let digits = input.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHexDigit { input: input.to_string() });
        }

        let nibble = |i: usize| -> u8 {
            // validated above, every byte is an ASCII hex digit
            let c = digits.as_bytes()[i];
            match c {
                b'0'..=b'9' => c - b'0',
                b'a'..=b'f' => c - b'a' + 10,
                _ => c - b'A' + 10,
            }
        };
        let byte = |i: usize| (nibble(i) << 4) | nibble(i + 1);

        match digits.len() {
            3 => {
                let (r, g, b) = (nibble(0), nibble(1), nibble(2));
                Ok(Self::from_rgba8(r * 17, g * 17, b * 17, 255))
            }
            6 => Ok(Self::from_rgba8(byte(0), byte(2), byte(4), 255)),
            8 => Ok(Self::from_rgba8(byte(2), byte(4), byte(6), byte(0))),
            len => Err(Error::InvalidHexLength { len }),
        }
    }

    /// Formats as `#RRGGBB` when opaque, `#AARRGGBB` otherwise.
    ///
    /// Channels are quantized as-is; the space tag is not consulted.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{a:02X}{r:02X}{g:02X}{b:02X}")
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

#[inline]
fn unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[inline]
fn quantize(v: f32) -> u8 {
    (unit(v) * 255.0).round() as u8
}
