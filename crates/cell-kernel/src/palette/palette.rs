//! Validated color palette with nearest-color lookup.

use std::str::FromStr;

use super::error::PaletteError;
use super::terminal;
use crate::color::Color;
use crate::kernel::{CellKernel, Scalar};

/// An ordered, non-empty set of colors to quantize onto.
///
/// Order matters: nearest-color search resolves ties to the lowest index, so
/// callers put preferred colors (e.g. the standard terminal colors) first.
///
/// # Example
///
/// ```
/// use cell_kernel::{Color, Palette};
///
/// let palette = Palette::new(&[Color::rgb(0, 0, 0), Color::rgb(255, 255, 255)]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.nearest(Color::rgb(200, 200, 200)), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette from colors, in priority order.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: &[Color]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// Create a palette from hex color strings such as `"#FF0000"` or `"#F00"`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] naming the first invalid entry,
    /// or [`PaletteError::EmptyPalette`] if `hex` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use cell_kernel::{Color, Palette};
    ///
    /// let palette = Palette::from_hex(&["#000", "#FFFFFF", "#ff000080"]).unwrap();
    /// assert_eq!(palette.get(2), Color::new(255, 0, 0, 0x80));
    /// ```
    pub fn from_hex<S: AsRef<str>>(hex: &[S]) -> Result<Self, PaletteError> {
        let colors = hex
            .iter()
            .enumerate()
            .map(|(index, s)| {
                Color::from_str(s.as_ref())
                    .map_err(|source| PaletteError::ParseColor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&colors)
    }

    /// xterm's default 16 ANSI colors.
    pub fn ansi16() -> Self {
        Self {
            colors: terminal::ANSI16.to_vec(),
        }
    }

    /// The xterm 256-color palette.
    pub fn xterm256() -> Self {
        Self {
            colors: terminal::xterm256(),
        }
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Note: This always returns `false` since empty palettes are rejected
    /// at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `idx`.
    #[inline]
    pub fn get(&self, idx: usize) -> Color {
        self.colors[idx]
    }

    /// All colors in priority order.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Index of the palette entry nearest to `target` in RGB.
    ///
    /// Alpha is ignored; ties go to the lowest index.
    #[inline]
    pub fn nearest(&self, target: Color) -> usize {
        Scalar.nearest_color(target, &self.colors)
    }
}
