//! Foreground/background color pair of a candidate cell

use super::color::Color;

/// The two colors a text cell can show: the glyph's foreground and the
/// cell's background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorPair {
    /// Color of pixels covered by the glyph
    pub fg: Color,
    /// Color of pixels outside the glyph
    pub bg: Color,
}

impl ColorPair {
    /// Create a pair from foreground and background colors.
    #[inline]
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    /// The color a pixel is rendered with: `fg` when covered, `bg` otherwise.
    #[inline]
    pub const fn select(&self, covered: bool) -> Color {
        if covered {
            self.fg
        } else {
            self.bg
        }
    }

    /// The same pair with foreground and background exchanged.
    ///
    /// Scoring an inverted mask against the swapped pair gives the same
    /// error as the original combination.
    #[inline]
    pub const fn swapped(&self) -> Self {
        Self::new(self.bg, self.fg)
    }
}
