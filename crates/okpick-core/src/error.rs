//! Error types for okpick-core operations.
//!
//! Numeric color conversions in this workspace are total: out-of-range input
//! is clamped, never rejected. The only fallible surface is parsing text that
//! a user typed into a picker, which is what [`Error`] describes.
//!
//! # Usage
//!
//! ```rust
//! use okpick_core::{Color, Error};
//!
//! let err = Color::from_hex("#12345").unwrap_err();
//! assert!(matches!(err, Error::InvalidHexLength { len: 5 }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding textual color input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Hex string has a digit count other than 3, 6 or 8.
    ///
    /// `len` counts digits after an optional leading `#`.
    #[error("hex color must have 3, 6 or 8 digits, got {len}")]
    InvalidHexLength {
        /// Number of digits found
        len: usize,
    },

    /// Hex string contains a character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit in color '{input}'")]
    InvalidHexDigit {
        /// The offending input, verbatim
        input: String,
    },
}
