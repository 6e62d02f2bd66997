//! Fixed-size pixel block

use super::error::BlockError;
use crate::color::Pixel;

/// Width of a block in pixels.
pub const BLOCK_WIDTH: usize = 8;
/// Height of a block in pixels.
pub const BLOCK_HEIGHT: usize = 8;
/// Number of pixels in a block.
pub const BLOCK_PIXELS: usize = BLOCK_WIDTH * BLOCK_HEIGHT;

/// One cell's worth of source pixels, row-major.
///
/// The length is part of the type, so kernel operations never have to check
/// it. Use [`PixelBlock::from_slice`] or [`PixelBlock::from_rgba_bytes`] to
/// build one from caller buffers with a checked length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelBlock {
    pixels: [Pixel; BLOCK_PIXELS],
}

impl PixelBlock {
    /// Wrap an array of pixels.
    #[inline]
    pub const fn new(pixels: [Pixel; BLOCK_PIXELS]) -> Self {
        Self { pixels }
    }

    /// A block with every pixel set to `pixel`.
    #[inline]
    pub const fn filled(pixel: Pixel) -> Self {
        Self::new([pixel; BLOCK_PIXELS])
    }

    /// Build a block from a pixel slice.
    ///
    /// # Errors
    ///
    /// Returns [`BlockError::WrongLength`] unless the slice holds exactly
    /// [`BLOCK_PIXELS`] pixels.
    pub fn from_slice(pixels: &[Pixel]) -> Result<Self, BlockError> {
        let pixels: [Pixel; BLOCK_PIXELS] =
            pixels.try_into().map_err(|_| BlockError::WrongLength {
                expected: BLOCK_PIXELS,
                actual: pixels.len(),
            })?;
        Ok(Self::new(pixels))
    }

    /// Build a block from interleaved RGBA bytes, as delivered by an image
    /// decoder.
    ///
    /// # Errors
    ///
    /// Returns [`BlockError::WrongLength`] unless `bytes` holds exactly
    /// `4 * BLOCK_PIXELS` bytes.
    ///
    /// # Example
    /// ```
    /// use cell_kernel::{Color, PixelBlock};
    ///
    /// let bytes = [7u8; 256];
    /// let block = PixelBlock::from_rgba_bytes(&bytes).unwrap();
    /// assert_eq!(block.pixel(63), Color::new(7, 7, 7, 7));
    ///
    /// assert!(PixelBlock::from_rgba_bytes(&bytes[..255]).is_err());
    /// ```
    pub fn from_rgba_bytes(bytes: &[u8]) -> Result<Self, BlockError> {
        if bytes.len() != BLOCK_PIXELS * 4 {
            return Err(BlockError::WrongLength {
                expected: BLOCK_PIXELS * 4,
                actual: bytes.len(),
            });
        }
        let mut pixels = [Pixel::default(); BLOCK_PIXELS];
        for (pixel, rgba) in pixels.iter_mut().zip(bytes.chunks_exact(4)) {
            *pixel = Pixel::new(rgba[0], rgba[1], rgba[2], rgba[3]);
        }
        Ok(Self::new(pixels))
    }

    /// Pixel at row-major index `i`.
    #[inline]
    pub fn pixel(&self, i: usize) -> Pixel {
        self.pixels[i]
    }

    /// Pixel at column `x`, row `y`.
    ///
    /// # Panics (debug only)
    /// Debug-asserts that `x` and `y` are inside the block.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Pixel {
        debug_assert!(
            x < BLOCK_WIDTH && y < BLOCK_HEIGHT,
            "get: ({x}, {y}) out of range for an 8x8 block"
        );
        self.pixels[y * BLOCK_WIDTH + x]
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Pixel; BLOCK_PIXELS] {
        &self.pixels
    }

    /// Mutable access to the pixels.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Pixel; BLOCK_PIXELS] {
        &mut self.pixels
    }
}

impl Default for PixelBlock {
    fn default() -> Self {
        Self::filled(Pixel::default())
    }
}

impl From<[Pixel; BLOCK_PIXELS]> for PixelBlock {
    fn from(pixels: [Pixel; BLOCK_PIXELS]) -> Self {
        Self::new(pixels)
    }
}
