//! Backend-dispatching front end to the cell kernel.

use cell_kernel::{
    mean_color_pair, Backend, CellKernel, Color, ColorAccum, ColorPair, CoverageMask, Palette,
    PixelBlock,
};

use crate::config::KernelConfig;
use crate::error::TermcellError;

/// Runs the cell-matching primitives on a configured backend against a
/// configured palette.
///
/// `CellMatcher` holds no mutable state; share it freely across threads
/// that each work on their own blocks.
#[derive(Debug, Clone)]
pub struct CellMatcher {
    backend: Backend,
    palette: Palette,
}

impl CellMatcher {
    pub fn new(backend: Backend, palette: Palette) -> Self {
        tracing::debug!(
            backend = backend.name(),
            palette = palette.len(),
            "Created cell matcher"
        );
        Self { backend, palette }
    }

    /// Build a matcher from configuration.
    pub fn from_config(config: &KernelConfig) -> Result<Self, TermcellError> {
        let palette = config.build_palette()?;
        Ok(Self::new(config.backend(), palette))
    }

    /// Build a matcher over a palette given as hex strings.
    pub fn with_colors<S: AsRef<str>>(
        backend: Backend,
        colors: &[S],
    ) -> Result<Self, TermcellError> {
        let palette = Palette::from_hex(colors)?;
        Ok(Self::new(backend, palette))
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    fn kernel(&self) -> &'static dyn CellKernel {
        self.backend.kernel()
    }

    /// Squared RGB error of rendering `block` as `pair` under `mask`.
    #[inline]
    pub fn cell_error(&self, block: &PixelBlock, pair: &ColorPair, mask: CoverageMask) -> i32 {
        self.kernel().calc_cell_error(block, pair, mask)
    }

    /// Channel sums `(bg_sum, fg_sum)` of the two sides of `mask`.
    #[inline]
    pub fn color_sums(&self, block: &PixelBlock, mask: CoverageMask) -> (ColorAccum, ColorAccum) {
        self.kernel().extract_cell_mean_colors(block, mask)
    }

    /// Rounded per-channel mean; divisor 0 gives zeros.
    #[inline]
    pub fn div_scalar(&self, accum: ColorAccum, divisor: u16) -> ColorAccum {
        self.kernel().div_scalar(accum, divisor)
    }

    /// Mean foreground and background colors of `block` under `mask`.
    #[inline]
    pub fn mean_colors(&self, block: &PixelBlock, mask: CoverageMask) -> ColorPair {
        mean_color_pair(self.kernel(), block, mask)
    }

    /// Score a candidate glyph against raw RGBA bytes from an image decoder.
    ///
    /// Returns the mean colors under `mask` and the error of rendering the
    /// block with them. `rgba` must hold exactly one 8x8 block.
    pub fn evaluate_rgba(
        &self,
        rgba: &[u8],
        mask: CoverageMask,
    ) -> Result<(ColorPair, i32), TermcellError> {
        let block = PixelBlock::from_rgba_bytes(rgba)?;
        let pair = self.mean_colors(&block, mask);
        Ok((pair, self.cell_error(&block, &pair, mask)))
    }

    /// Coverage implied by `pair`.
    #[inline]
    pub fn coverage(&self, block: &PixelBlock, pair: &ColorPair) -> CoverageMask {
        self.kernel().cell_to_bitmap(block, pair)
    }

    /// Palette index nearest to `color`.
    #[inline]
    pub fn nearest(&self, color: Color) -> usize {
        // Palette construction rejects empty palettes.
        self.kernel().nearest_color(color, self.palette.colors())
    }

    /// Nearest palette index together with its color.
    pub fn quantize(&self, color: Color) -> (usize, Color) {
        let idx = self.nearest(color);
        (idx, self.palette.get(idx))
    }

    /// Snap both colors of a pair onto the palette.
    pub fn quantize_pair(&self, pair: &ColorPair) -> ColorPair {
        ColorPair::new(self.quantize(pair.fg).1, self.quantize(pair.bg).1)
    }
}

impl Default for CellMatcher {
    fn default() -> Self {
        Self::new(Backend::default(), Palette::xterm256())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cell_kernel::{BlockError, PaletteError, ParseColorError};

    #[test]
    fn test_default_matcher() {
        let matcher = CellMatcher::default();
        assert_eq!(matcher.backend(), Backend::Batched);
        assert_eq!(matcher.palette().len(), 256);
    }

    #[test]
    fn test_quantize_returns_palette_color() {
        let matcher = CellMatcher::new(Backend::Scalar, Palette::ansi16());
        let (idx, color) = matcher.quantize(Color::rgb(250, 5, 5));
        assert_eq!(idx, 9);
        assert_eq!(color, Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_quantize_pair() {
        let matcher = CellMatcher::new(Backend::Batched, Palette::ansi16());
        let pair = ColorPair::new(Color::rgb(250, 250, 250), Color::rgb(3, 3, 3));
        assert_eq!(
            matcher.quantize_pair(&pair),
            ColorPair::new(Color::rgb(255, 255, 255), Color::rgb(0, 0, 0))
        );
    }

    #[test]
    fn test_backends_agree_through_matcher() {
        let palette = Palette::xterm256();
        let scalar = CellMatcher::new(Backend::Scalar, palette.clone());
        let batched = CellMatcher::new(Backend::Batched, palette);

        let mut block = PixelBlock::filled(Color::rgb(30, 60, 90));
        for (i, p) in block.pixels_mut().iter_mut().enumerate() {
            if i % 3 == 0 {
                *p = Color::new(200, 180, (i * 4) as u8, i as u8);
            }
        }
        let mask = CoverageMask::from_bits(0x9249_2492_4924_9249);

        let pair = scalar.mean_colors(&block, mask);
        assert_eq!(pair, batched.mean_colors(&block, mask));
        assert_eq!(
            scalar.cell_error(&block, &pair, mask),
            batched.cell_error(&block, &pair, mask)
        );
        assert_eq!(scalar.coverage(&block, &pair), batched.coverage(&block, &pair));
        assert_eq!(scalar.nearest(pair.fg), batched.nearest(pair.fg));
    }

    #[test]
    fn test_with_colors() {
        let matcher = CellMatcher::with_colors(Backend::Scalar, &["#000", "#fff"]).unwrap();
        assert_eq!(matcher.palette().len(), 2);
        assert_eq!(matcher.nearest(Color::rgb(200, 200, 200)), 1);

        let err = CellMatcher::with_colors(Backend::Scalar, &["#000", "#+F+F+F"]).unwrap_err();
        assert!(matches!(
            err,
            TermcellError::Palette(PaletteError::ParseColor {
                index: 1,
                source: ParseColorError::InvalidDigit { found: '+', .. }
            })
        ));

        let empty: [&str; 0] = [];
        assert!(matches!(
            CellMatcher::with_colors(Backend::Batched, &empty),
            Err(TermcellError::Palette(PaletteError::EmptyPalette))
        ));
    }

    #[test]
    fn test_evaluate_rgba() {
        // Top half white, bottom half black, scored as an upper half block.
        let mut rgba = vec![0u8; 256];
        for px in rgba.chunks_exact_mut(4).take(32) {
            px.copy_from_slice(&[255, 255, 255, 255]);
        }
        for px in rgba.chunks_exact_mut(4).skip(32) {
            px[3] = 255;
        }
        let upper = CoverageMask::from_bits(0x0000_0000_FFFF_FFFF);

        for backend in [Backend::Scalar, Backend::Batched] {
            let matcher = CellMatcher::new(backend, Palette::ansi16());
            let (pair, error) = matcher.evaluate_rgba(&rgba, upper).unwrap();
            assert_eq!(
                pair,
                ColorPair::new(Color::rgb(255, 255, 255), Color::rgb(0, 0, 0))
            );
            assert_eq!(error, 0);
        }
    }

    #[test]
    fn test_evaluate_rgba_wrong_length() {
        let matcher = CellMatcher::default();
        let err = matcher.evaluate_rgba(&[0u8; 255], CoverageMask::FULL).unwrap_err();
        assert!(matches!(
            err,
            TermcellError::Block(BlockError::WrongLength {
                expected: 256,
                actual: 255
            })
        ));
        assert_eq!(
            err.to_string(),
            "Block error: block length mismatch: expected 256 elements, got 255"
        );
    }
}
