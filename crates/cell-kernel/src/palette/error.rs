//! Palette and hex color errors

use std::fmt;

/// Why a hex color string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseColorError {
    /// Wrong number of digits after the optional `#`
    InvalidLength(usize),
    /// A character other than `0-9`, `a-f`, `A-F`
    InvalidDigit {
        /// Character offset after the optional `#`
        position: usize,
        /// The offending character
        found: char,
    },
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength(len) => {
                write!(f, "expected 3, 6 or 8 hex digits, found {}", len)
            }
            ParseColorError::InvalidDigit { position, found } => {
                write!(f, "{:?} at position {} is not a hex digit", found, position)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Error type for palette validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No colors provided in palette
    EmptyPalette,
    /// Invalid hex color string
    ParseColor {
        /// Position of the offending entry
        index: usize,
        /// What was wrong with it
        source: ParseColorError,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "palette cannot be empty")
            }
            PaletteError::ParseColor { index, source } => {
                write!(f, "invalid color at index {}: {}", index, source)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor { source, .. } => Some(source),
            _ => None,
        }
    }
}
