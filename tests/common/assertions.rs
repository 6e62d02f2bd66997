//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use termcell::cell_kernel::{Backend, CoverageMask, PixelBlock};
use termcell::CellMatcher;

/// Assert a mask equals the expected one, printing both as 8x8 grids.
pub fn assert_mask(actual: CoverageMask, expected: CoverageMask) {
    assert_eq!(
        render_mask(actual),
        render_mask(expected),
        "coverage mismatch ({:#018x} vs {:#018x})",
        actual.bits(),
        expected.bits()
    );
}

/// Render a mask as eight rows of `#` (covered) and `.`.
pub fn render_mask(mask: CoverageMask) -> String {
    mask.to_bools()
        .chunks(8)
        .map(|row| row.iter().map(|&c| if c { '#' } else { '.' }).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pick the candidate with the lowest cell error, scoring each with its own
/// mean colors. Earlier candidates win ties.
pub fn best_candidate(
    matcher: &CellMatcher,
    block: &PixelBlock,
    candidates: &[CoverageMask],
) -> (usize, i32) {
    let mut best = (0, i32::MAX);
    for (i, &mask) in candidates.iter().enumerate() {
        let pair = matcher.mean_colors(block, mask);
        let error = matcher.cell_error(block, &pair, mask);
        if error < best.1 {
            best = (i, error);
        }
    }
    best
}

/// Both backends, for running the same scenario twice.
pub const BACKENDS: [Backend; 2] = [Backend::Scalar, Backend::Batched];
