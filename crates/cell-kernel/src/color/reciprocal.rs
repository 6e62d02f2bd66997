//! Reciprocal table access
//!
//! The table is generated at compile time by build.rs and holds one
//! fixed-point reciprocal per divisor in `0..=256`. Divisor 0 maps to 0 so
//! that averaging an empty pixel group yields black instead of a fault.

include!(concat!(env!("OUT_DIR"), "/reciprocal_table.rs"));

/// Look up the fixed-point reciprocal of `divisor`.
///
/// # Panics (debug only)
/// Debug-asserts that `divisor` is in `0..=256`.
#[inline]
pub fn reciprocal(divisor: u16) -> u32 {
    debug_assert!(
        divisor <= 256,
        "reciprocal: divisor {divisor} out of range 0..=256"
    );
    RECIPROCALS[usize::from(divisor)]
}
