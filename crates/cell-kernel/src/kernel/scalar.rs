//! Reference scalar implementation.

use super::CellKernel;
use crate::block::{CoverageMask, PixelBlock};
use crate::color::{Color, ColorAccum, ColorPair};

/// Plain per-pixel loops.
///
/// This is the semantic reference for the kernel: one pixel at a time, one
/// channel at a time, widened to `i32` before any arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scalar;

impl CellKernel for Scalar {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn calc_cell_error(&self, block: &PixelBlock, pair: &ColorPair, mask: CoverageMask) -> i32 {
        let mut error = 0i32;
        for (i, pixel) in block.pixels().iter().enumerate() {
            let target = pair.select(mask.is_set(i));
            let pixel = pixel.channels();
            let target = target.channels();
            // R, G, B only
            for c in 0..3 {
                let d = i32::from(pixel[c]) - i32::from(target[c]);
                error += d * d;
            }
        }
        error
    }

    fn extract_cell_mean_colors(
        &self,
        block: &PixelBlock,
        mask: CoverageMask,
    ) -> (ColorAccum, ColorAccum) {
        let mut bg = ColorAccum::default();
        let mut fg = ColorAccum::default();
        for (i, &pixel) in block.pixels().iter().enumerate() {
            if mask.is_set(i) {
                fg.add_color(pixel);
            } else {
                bg.add_color(pixel);
            }
        }
        (bg, fg)
    }

    fn nearest_color(&self, target: Color, palette: &[Color]) -> usize {
        debug_assert!(!palette.is_empty(), "nearest_color: empty palette");

        let mut best_idx = 0;
        let mut best_dist = i32::MAX;

        for (i, &candidate) in palette.iter().enumerate() {
            let dist = target.distance_squared(candidate);
            // Strictly less: the first of several equidistant entries stays.
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        best_idx
    }

    fn cell_to_bitmap(&self, block: &PixelBlock, pair: &ColorPair) -> CoverageMask {
        let mut mask = CoverageMask::EMPTY;
        for (i, &pixel) in block.pixels().iter().enumerate() {
            let bg_dist = pixel.distance_squared(pair.bg);
            let fg_dist = pixel.distance_squared(pair.fg);
            mask.set(i, fg_dist < bg_dist);
        }
        mask
    }
}
