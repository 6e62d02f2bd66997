//! Pixel blocks and coverage masks
//!
//! A block is one 8x8 cell of the source image, flattened row-major. A
//! coverage mask says, per pixel, whether the glyph covers it. The mask has
//! two equivalent forms: the packed 64-bit [`CoverageMask`] (bit `i` is pixel
//! `i`) used by glyph catalogs, and the expanded [`ByteMask`] with one
//! all-ones or all-zeros word per pixel, suited to byte-wise select.

mod error;
mod mask;
mod pixel_block;

pub use error::BlockError;
pub use mask::{ByteMask, CoverageMask};
pub use pixel_block::{PixelBlock, BLOCK_HEIGHT, BLOCK_PIXELS, BLOCK_WIDTH};
