//! Palette types and utilities
//!
//! This module provides the validated [`Palette`] used for color
//! quantization, the standard terminal palettes, and the error types for
//! parsing and validation.

mod error;
mod palette;
mod terminal;

pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
