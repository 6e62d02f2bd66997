//! The five cell-matching primitives.
//!
//! This module defines the [`CellKernel`] trait and its implementations:
//!
//! - [`Scalar`]: straightforward per-pixel loops. This is the reference;
//!   every other implementation must return bit-identical results.
//! - [`Batched`]: processes four pixels (or four palette entries) per step
//!   using packed color words and expanded byte masks, mirroring a 128-bit
//!   SIMD lane layout.
//!
//! All operations are pure. Preconditions (divisor range, non-empty palette)
//! are debug-asserted only; checked wrappers live on [`Palette`](crate::Palette)
//! and [`PixelBlock`](crate::PixelBlock).
//!
//! # Example
//!
//! ```
//! use cell_kernel::{Batched, CellKernel, Color, ColorPair, CoverageMask, PixelBlock, Scalar};
//!
//! let block = PixelBlock::filled(Color::new(10, 10, 10, 255));
//! let pair = ColorPair::new(Color::new(10, 10, 10, 0), Color::new(0, 0, 0, 0));
//!
//! assert_eq!(Scalar.calc_cell_error(&block, &pair, CoverageMask::FULL), 0);
//! assert_eq!(Batched.calc_cell_error(&block, &pair, CoverageMask::EMPTY), 19200);
//! ```

mod batched;
mod scalar;

pub use batched::Batched;
pub use scalar::Scalar;

use crate::block::{CoverageMask, PixelBlock};
use crate::color::{Color, ColorAccum, ColorPair};

/// Kernel implementation selection.
///
/// Both backends produce identical results; they differ only in how the work
/// is grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Backend {
    /// Per-pixel reference loops.
    Scalar,
    /// Four pixels per step with packed words and byte masks.
    #[default]
    Batched,
}

impl Backend {
    /// Short lowercase name, as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Backend::Scalar => Scalar.name(),
            Backend::Batched => Batched.name(),
        }
    }

    /// The kernel implementing this backend.
    pub fn kernel(self) -> &'static dyn CellKernel {
        match self {
            Backend::Scalar => &Scalar,
            Backend::Batched => &Batched,
        }
    }
}

/// Block-level color matching primitives.
///
/// Implementations must agree exactly with [`Scalar`] on every input.
pub trait CellKernel: Send + Sync {
    /// Short lowercase name of the implementation.
    fn name(&self) -> &'static str;

    /// Sum of squared R, G, B differences between each pixel and the color
    /// the cell would render there (`fg` where `mask` is set, `bg`
    /// elsewhere). Alpha never contributes.
    ///
    /// The result is at most `64 * 3 * 255^2 = 12_484_800`.
    fn calc_cell_error(&self, block: &PixelBlock, pair: &ColorPair, mask: CoverageMask) -> i32;

    /// Partition the block by `mask` and sum each side's channels, alpha
    /// included. Returns `(bg_sum, fg_sum)`.
    fn extract_cell_mean_colors(
        &self,
        block: &PixelBlock,
        mask: CoverageMask,
    ) -> (ColorAccum, ColorAccum);

    /// Divide every channel by `divisor` (0..=256), rounding half up.
    /// Divisor 0 gives zeros.
    fn div_scalar(&self, accum: ColorAccum, divisor: u16) -> ColorAccum {
        accum.div_scalar(divisor)
    }

    /// Index of the palette entry with the smallest squared RGB distance to
    /// `target`. Ties go to the lowest index.
    ///
    /// `palette` must not be empty; the result is unspecified if it is.
    fn nearest_color(&self, target: Color, palette: &[Color]) -> usize;

    /// Coverage implied by a color pair: bit `i` is set when pixel `i` is
    /// strictly closer (in RGB) to `fg` than to `bg`. Equidistant pixels
    /// stay background.
    fn cell_to_bitmap(&self, block: &PixelBlock, pair: &ColorPair) -> CoverageMask;
}

/// Average foreground and background colors of `block` under `mask`.
///
/// Combines [`CellKernel::extract_cell_mean_colors`] with
/// [`CellKernel::div_scalar`] using the mask's population counts. A side with
/// no pixels averages to transparent black.
///
/// # Example
///
/// ```
/// use cell_kernel::{mean_color_pair, Color, CoverageMask, PixelBlock, Scalar};
///
/// let mut block = PixelBlock::filled(Color::rgb(0, 0, 0));
/// block.pixels_mut()[0] = Color::rgb(255, 255, 255);
///
/// let pair = mean_color_pair(&Scalar, &block, CoverageMask::from_bits(1));
/// assert_eq!(pair.fg, Color::rgb(255, 255, 255));
/// assert_eq!(pair.bg, Color::rgb(0, 0, 0));
/// ```
pub fn mean_color_pair<K: CellKernel + ?Sized>(
    kernel: &K,
    block: &PixelBlock,
    mask: CoverageMask,
) -> ColorPair {
    let (bg_sum, fg_sum) = kernel.extract_cell_mean_colors(block, mask);
    // Counts are at most 64, well inside the table.
    let fg = kernel.div_scalar(fg_sum, mask.count_covered() as u16);
    let bg = kernel.div_scalar(bg_sum, mask.count_uncovered() as u16);
    ColorPair::new(fg.to_color(), bg.to_color())
}
