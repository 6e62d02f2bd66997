//! Per-channel color accumulator and fixed-point division

use std::ops::{Add, AddAssign};

use super::color::Color;
use super::reciprocal::{reciprocal, RECIPROCAL_SHIFT};

/// Running per-channel sum of pixel values, in `[R, G, B, A]` order.
///
/// A full block sums to at most `64 * 255 = 16320` per channel, so the
/// 32-bit channels never come close to overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorAccum {
    /// Channel sums `[R, G, B, A]`
    pub ch: [i32; 4],
}

impl ColorAccum {
    /// Create an accumulator from channel sums.
    #[inline]
    pub const fn new(ch: [i32; 4]) -> Self {
        Self { ch }
    }

    /// Add all four channels of `color`, alpha included.
    #[inline]
    pub fn add_color(&mut self, color: Color) {
        for (sum, value) in self.ch.iter_mut().zip(color.channels()) {
            *sum += i32::from(value);
        }
    }

    /// Divide every channel by `divisor`, rounding half up.
    ///
    /// A divisor of 0 yields an all-zero accumulator: averaging a pixel group
    /// with no members is a normal occurrence while searching glyphs.
    ///
    /// The quotient is computed as `(sum * reciprocal + half) >> shift` using
    /// the compile-time reciprocal table. For sums in `0..=16320` this is
    /// exactly `round(sum / divisor)`.
    ///
    /// # Panics (debug only)
    /// Debug-asserts that `divisor` is in `0..=256`.
    ///
    /// # Example
    /// ```
    /// use cell_kernel::ColorAccum;
    ///
    /// let sums = ColorAccum::new([100, 100, 100, 100]);
    /// assert_eq!(sums.div_scalar(4), ColorAccum::new([25, 25, 25, 25]));
    /// assert_eq!(sums.div_scalar(0), ColorAccum::default());
    /// ```
    #[inline]
    pub fn div_scalar(self, divisor: u16) -> Self {
        let recip = i64::from(reciprocal(divisor));
        let half = 1i64 << (RECIPROCAL_SHIFT - 1);
        Self {
            ch: self
                .ch
                .map(|sum| ((i64::from(sum) * recip + half) >> RECIPROCAL_SHIFT) as i32),
        }
    }

    /// Narrow the channels back to a [`Color`], clamping to `0..=255`.
    #[inline]
    pub fn to_color(self) -> Color {
        Color::from_channels(self.ch.map(|v| v.clamp(0, 255) as u8))
    }
}

impl From<Color> for ColorAccum {
    fn from(color: Color) -> Self {
        Self::new(color.channels().map(i32::from))
    }
}

impl Add for ColorAccum {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for ColorAccum {
    fn add_assign(&mut self, rhs: Self) {
        for (sum, value) in self.ch.iter_mut().zip(rhs.ch) {
            *sum += value;
        }
    }
}
