//! Test fixtures: blocks, glyph masks and configuration files.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use termcell::cell_kernel::{Color, CoverageMask, PixelBlock, BLOCK_PIXELS, BLOCK_WIDTH};

/// Glyph coverage masks in catalog bit order (bit i = pixel i, row-major).
pub mod glyphs {
    use super::CoverageMask;

    /// Space: nothing covered
    pub const SPACE: CoverageMask = CoverageMask::EMPTY;

    /// Full block
    pub const FULL: CoverageMask = CoverageMask::FULL;

    /// Upper half block: rows 0..4
    pub const UPPER_HALF: CoverageMask = CoverageMask::from_bits(0x0000_0000_FFFF_FFFF);

    /// Lower half block: rows 4..8
    pub const LOWER_HALF: CoverageMask = CoverageMask::from_bits(0xFFFF_FFFF_0000_0000);

    /// Left half block: columns 0..4
    pub const LEFT_HALF: CoverageMask = CoverageMask::from_bits(0x0F0F_0F0F_0F0F_0F0F);

    /// All candidates, in catalog order
    pub const ALL: [CoverageMask; 5] = [SPACE, FULL, UPPER_HALF, LOWER_HALF, LEFT_HALF];
}

/// A block painted `fg` where `mask` is set and `bg` elsewhere.
pub fn two_color_block(mask: CoverageMask, fg: Color, bg: Color) -> PixelBlock {
    let mut block = PixelBlock::filled(bg);
    for (i, p) in block.pixels_mut().iter_mut().enumerate() {
        if mask.is_set(i) {
            *p = fg;
        }
    }
    block
}

/// A horizontal gradient from black to white with varying alpha.
pub fn gradient_block() -> PixelBlock {
    let mut block = PixelBlock::default();
    for (i, p) in block.pixels_mut().iter_mut().enumerate() {
        let x = (i % BLOCK_WIDTH) as u8;
        *p = Color::new(x * 36, x * 36, x * 36, (i * 4) as u8);
    }
    debug_assert_eq!(block.pixels().len(), BLOCK_PIXELS);
    block
}

/// Write `content` to `termcell.yaml` in a fresh temporary directory.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("termcell.yaml");
    fs::write(&path, content).expect("write config");
    (dir, path)
}
