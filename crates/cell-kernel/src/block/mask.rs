//! Coverage masks in packed and expanded form

use super::pixel_block::BLOCK_PIXELS;

/// Per-pixel glyph coverage packed into 64 bits.
///
/// Bit `i` corresponds to pixel `i` of the block (row-major, least
/// significant bit first). A set bit means the pixel is covered by the
/// glyph and rendered with the foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CoverageMask(pub u64);

impl CoverageMask {
    /// No pixel covered.
    pub const EMPTY: Self = Self(0);
    /// Every pixel covered.
    pub const FULL: Self = Self(u64::MAX);

    /// Wrap a packed bitmap.
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// The packed bitmap.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Whether pixel `i` is covered.
    #[inline]
    pub const fn is_set(self, i: usize) -> bool {
        (self.0 >> i) & 1 != 0
    }

    /// Set or clear pixel `i`.
    #[inline]
    pub fn set(&mut self, i: usize, covered: bool) {
        if covered {
            self.0 |= 1 << i;
        } else {
            self.0 &= !(1 << i);
        }
    }

    /// Number of covered (foreground) pixels.
    #[inline]
    pub const fn count_covered(self) -> u32 {
        self.0.count_ones()
    }

    /// Number of uncovered (background) pixels.
    #[inline]
    pub const fn count_uncovered(self) -> u32 {
        self.0.count_zeros()
    }

    /// The complementary mask.
    #[inline]
    pub const fn invert(self) -> Self {
        Self(!self.0)
    }

    /// Expand to one word per pixel: `0xFFFF_FFFF` when covered, `0` otherwise.
    ///
    /// # Example
    /// ```
    /// use cell_kernel::CoverageMask;
    ///
    /// let bytes = CoverageMask::from_bits(0b10).to_byte_mask();
    /// assert_eq!(bytes.words()[0], 0);
    /// assert_eq!(bytes.words()[1], u32::MAX);
    /// assert_eq!(bytes.to_coverage(), CoverageMask::from_bits(0b10));
    /// ```
    pub fn to_byte_mask(self) -> ByteMask {
        let mut words = [0u32; BLOCK_PIXELS];
        for (i, word) in words.iter_mut().enumerate() {
            // 0 - 1 wraps to all ones
            *word = 0u32.wrapping_sub(((self.0 >> i) & 1) as u32);
        }
        ByteMask(words)
    }

    /// One boolean per pixel.
    pub fn to_bools(self) -> [bool; BLOCK_PIXELS] {
        std::array::from_fn(|i| self.is_set(i))
    }
}

impl From<[bool; BLOCK_PIXELS]> for CoverageMask {
    fn from(covered: [bool; BLOCK_PIXELS]) -> Self {
        let bits = covered
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &c)| acc | (u64::from(c) << i));
        Self(bits)
    }
}

impl From<u64> for CoverageMask {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl From<CoverageMask> for u64 {
    fn from(mask: CoverageMask) -> Self {
        mask.0
    }
}

/// Coverage expanded to one 32-bit word per pixel.
///
/// Each word is all ones (every channel byte `0xFF`) for a covered pixel and
/// zero otherwise, so `(fg & m) | (bg & !m)` on packed colors selects the
/// target color of a pixel without branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteMask([u32; BLOCK_PIXELS]);

impl ByteMask {
    /// The per-pixel words.
    #[inline]
    pub fn words(&self) -> &[u32; BLOCK_PIXELS] {
        &self.0
    }

    /// Pack back into a [`CoverageMask`].
    ///
    /// A pixel counts as covered when its word is non-zero.
    pub fn to_coverage(&self) -> CoverageMask {
        let bits = self
            .0
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &w)| acc | (u64::from(w != 0) << i));
        CoverageMask(bits)
    }
}

impl From<CoverageMask> for ByteMask {
    fn from(mask: CoverageMask) -> Self {
        mask.to_byte_mask()
    }
}
