#![allow(clippy::needless_range_loop, clippy::module_inception)]

//! cell-kernel: exact color matching primitives for text-mode rendering
//!
//! A text-mode image renderer cuts the source image into 8x8 pixel blocks
//! and, for every block, searches for the glyph and the foreground and
//! background colors that reproduce it best. This crate is the arithmetic at
//! the bottom of that search. It does not know about glyph catalogs,
//! terminals or image files: it scores cells, averages colors and quantizes
//! them, exactly and deterministically.
//!
//! # Quick Start
//!
//! ```
//! use cell_kernel::{mean_color_pair, Batched, CellKernel, Color, CoverageMask, Palette, PixelBlock};
//!
//! // A block that is white on top, black at the bottom
//! let mut block = PixelBlock::filled(Color::rgb(0, 0, 0));
//! for p in &mut block.pixels_mut()[..32] {
//!     *p = Color::rgb(255, 255, 255);
//! }
//!
//! // Candidate glyph: upper half block
//! let glyph = CoverageMask::from_bits(0x0000_0000_FFFF_FFFF);
//!
//! let pair = mean_color_pair(&Batched, &block, glyph);
//! assert_eq!(Batched.calc_cell_error(&block, &pair, glyph), 0);
//! assert_eq!(Batched.cell_to_bitmap(&block, &pair), glyph);
//!
//! // Map the foreground onto a 16-color terminal
//! let palette = Palette::ansi16();
//! assert_eq!(palette.nearest(pair.fg), 15);
//! ```
//!
//! # The Five Primitives
//!
//! | Operation | Produces |
//! |-----------|----------|
//! | [`CellKernel::calc_cell_error`] | squared RGB error of a cell against a block |
//! | [`CellKernel::extract_cell_mean_colors`] | per-side channel sums under a mask |
//! | [`CellKernel::div_scalar`] | rounded fixed-point means |
//! | [`CellKernel::nearest_color`] | palette index of the closest color |
//! | [`CellKernel::cell_to_bitmap`] | coverage implied by a color pair |
//!
//! A search loop typically runs them in this order:
//!
//! ```text
//! block + candidate mask
//!     |
//!     v
//! extract_cell_mean_colors   (bg_sum, fg_sum)
//!     |
//!     v
//! div_scalar                 (bg, fg) means via reciprocal table
//!     |
//!     +---> cell_to_bitmap   refined mask for the chosen colors
//!     |
//!     v
//! calc_cell_error            score, compared across candidate glyphs
//!     |
//!     v
//! nearest_color              fg/bg snapped to the terminal palette
//! ```
//!
//! # Numeric Contract
//!
//! - Only R, G and B enter error and distance math. Alpha is summed by the
//!   extractor and otherwise ignored.
//! - Division rounds half up and divides by zero to zero. The reciprocal
//!   table is generated at build time and is exact for every sum a block can
//!   produce (`0..=16320`) and every divisor in `0..=256`.
//! - Nearest-color ties go to the lowest palette index.
//! - Coverage ties go to the background.
//! - Bit `i` of a [`CoverageMask`] is pixel `i`, row-major.
//!
//! [`Scalar`] and [`Batched`] implement the same contract; choose with
//! [`Backend`].

pub mod block;
pub mod color;
pub mod kernel;
pub mod palette;


pub use block::{
    BlockError, ByteMask, CoverageMask, PixelBlock, BLOCK_HEIGHT, BLOCK_PIXELS, BLOCK_WIDTH,
};
pub use color::{Color, ColorAccum, ColorPair, Pixel};
pub use kernel::{mean_color_pair, Backend, Batched, CellKernel, Scalar};
pub use palette::{Palette, PaletteError, ParseColorError};
