//! Error type for checked block construction

use std::fmt;

/// Error returned when building a [`PixelBlock`](super::PixelBlock) from
/// caller data of the wrong size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    /// Input does not hold exactly one block
    WrongLength {
        /// Number of elements expected
        expected: usize,
        /// Number of elements provided
        actual: usize,
    },
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockError::WrongLength { expected, actual } => {
                write!(
                    f,
                    "block length mismatch: expected {} elements, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for BlockError {}
