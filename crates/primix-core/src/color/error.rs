//! Error type for hex color parsing

use std::num::ParseIntError;

use thiserror::Error;

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 digits after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,

    /// A character outside `0-9a-fA-F` was found
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),

    #[error("invalid hex value: {0}")]
    InvalidHex(#[from] ParseIntError),
}
