//! Four-lane batched implementation.
//!
//! Pixels are handled in groups of [`LANES`], with colors packed into 32-bit
//! words and coverage expanded to per-pixel byte masks, the same data layout
//! a 128-bit SIMD register would hold. Per-lane partial results are reduced
//! once at the end.

use super::CellKernel;
use crate::block::{CoverageMask, PixelBlock, BLOCK_PIXELS};
use crate::color::{Color, ColorAccum, ColorPair};

/// Pixels (or palette entries) per step.
const LANES: usize = 4;

// Blocks split evenly into lanes; only palettes need a remainder loop.
const _: () = assert!(BLOCK_PIXELS % LANES == 0);

/// Lane-batched kernel.
///
/// Produces exactly the same results as [`Scalar`](super::Scalar); the
/// property tests hold it to that.
#[derive(Debug, Clone, Copy, Default)]
pub struct Batched;

/// Branchless per-byte select: bytes of `fg` where `mask` is set, `bg`
/// elsewhere.
#[inline(always)]
fn bitselect(fg: u32, bg: u32, mask: u32) -> u32 {
    (fg & mask) | (bg & !mask)
}

/// Squared R, G, B differences of two packed colors.
///
/// Uses the absolute difference, which for byte inputs squares to the same
/// value as the signed difference and fits in 16 bits.
#[inline(always)]
fn rgb_error(pixel: u32, target: u32) -> i32 {
    let p = pixel.to_le_bytes();
    let t = target.to_le_bytes();
    let sq = |c: usize| u32::from(u16::from(p[c].abs_diff(t[c])).pow(2));
    // Pairwise: R^2 + G^2, then B^2. The alpha lane is dropped.
    let lo = sq(0) + sq(1);
    let hi = sq(2);
    (lo + hi) as i32
}

#[inline(always)]
fn add_channels(sum: &mut [i32; 4], word: u32) {
    for (s, b) in sum.iter_mut().zip(word.to_le_bytes()) {
        *s += i32::from(b);
    }
}

impl CellKernel for Batched {
    fn name(&self) -> &'static str {
        "batched"
    }

    fn calc_cell_error(&self, block: &PixelBlock, pair: &ColorPair, mask: CoverageMask) -> i32 {
        let fg = pair.fg.to_u32();
        let bg = pair.bg.to_u32();
        let bytes = mask.to_byte_mask();
        let mut accum = [0i32; LANES];

        for (pixels, masks) in block
            .pixels()
            .chunks_exact(LANES)
            .zip(bytes.words().chunks_exact(LANES))
        {
            for lane in 0..LANES {
                let selected = bitselect(fg, bg, masks[lane]);
                accum[lane] += rgb_error(pixels[lane].to_u32(), selected);
            }
        }

        accum.iter().sum()
    }

    fn extract_cell_mean_colors(
        &self,
        block: &PixelBlock,
        mask: CoverageMask,
    ) -> (ColorAccum, ColorAccum) {
        let bytes = mask.to_byte_mask();
        let mut fg = [0i32; 4];
        let mut bg = [0i32; 4];

        for (pixels, masks) in block
            .pixels()
            .chunks_exact(LANES)
            .zip(bytes.words().chunks_exact(LANES))
        {
            for lane in 0..LANES {
                let word = pixels[lane].to_u32();
                add_channels(&mut fg, word & masks[lane]);
                add_channels(&mut bg, word & !masks[lane]);
            }
        }

        (ColorAccum::new(bg), ColorAccum::new(fg))
    }

    fn nearest_color(&self, target: Color, palette: &[Color]) -> usize {
        debug_assert!(!palette.is_empty(), "nearest_color: empty palette");

        let mut min_dist = [i32::MAX; LANES];
        let mut min_idx = [0usize; LANES];

        let mut chunks = palette.chunks_exact(LANES);
        for (step, candidates) in chunks.by_ref().enumerate() {
            let base = step * LANES;
            for lane in 0..LANES {
                let dist = target.distance_squared(candidates[lane]);
                if dist < min_dist[lane] {
                    min_dist[lane] = dist;
                    min_idx[lane] = base + lane;
                }
            }
        }

        // Lanes interleave indices, so an equal distance in a later lane can
        // still belong to a lower index. Reduce on (distance, index).
        let (mut best_dist, mut best_idx) = (min_dist[0], min_idx[0]);
        for lane in 1..LANES {
            if (min_dist[lane], min_idx[lane]) < (best_dist, best_idx) {
                best_dist = min_dist[lane];
                best_idx = min_idx[lane];
            }
        }

        let tail_start = palette.len() - chunks.remainder().len();
        for (offset, &candidate) in chunks.remainder().iter().enumerate() {
            let dist = target.distance_squared(candidate);
            if dist < best_dist {
                best_dist = dist;
                best_idx = tail_start + offset;
            }
        }

        best_idx
    }

    fn cell_to_bitmap(&self, block: &PixelBlock, pair: &ColorPair) -> CoverageMask {
        let fg = pair.fg.to_u32();
        let bg = pair.bg.to_u32();
        let mut bits = 0u64;

        for (step, pixels) in block.pixels().chunks_exact(LANES).enumerate() {
            let mut nibble = 0u64;
            for lane in 0..LANES {
                let word = pixels[lane].to_u32();
                let closer_to_fg = rgb_error(word, fg) < rgb_error(word, bg);
                nibble |= u64::from(closer_to_fg) << lane;
            }
            bits |= nibble << (step * LANES);
        }

        CoverageMask::from_bits(bits)
    }
}
