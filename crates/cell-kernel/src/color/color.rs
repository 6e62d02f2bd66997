//! 8-bit RGBA color type
//!
//! Both source pixels and candidate cell colors use the same four-channel
//! byte layout, so a single type serves as [`Color`] and [`Pixel`].

use std::str::FromStr;

use crate::palette::ParseColorError;

/// An 8-bit RGBA color.
///
/// Channel order is R, G, B, A. Alpha is carried through averaging but never
/// participates in distance or error math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (ignored by distance math)
    pub a: u8,
}

/// A source image pixel. Same layout as [`Color`].
pub type Pixel = Color;

impl Color {
    /// Create a color from all four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    ///
    /// # Example
    /// ```
    /// use cell_kernel::Color;
    /// let red = Color::rgb(255, 0, 0);
    /// assert_eq!(red.a, 255);
    /// ```
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from a channel array `[R, G, B, A]`.
    #[inline]
    pub const fn from_channels(ch: [u8; 4]) -> Self {
        Self::new(ch[0], ch[1], ch[2], ch[3])
    }

    /// The channels as `[R, G, B, A]`.
    #[inline]
    pub const fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Pack into a 32-bit word with R in the lowest byte.
    ///
    /// This is the memory order of the struct, so a packed word can be
    /// masked byte-wise exactly like a loaded pixel.
    ///
    /// # Example
    /// ```
    /// use cell_kernel::Color;
    /// assert_eq!(Color::new(0x11, 0x22, 0x33, 0x44).to_u32(), 0x4433_2211);
    /// ```
    #[inline]
    pub const fn to_u32(self) -> u32 {
        u32::from_le_bytes(self.channels())
    }

    /// Unpack a word produced by [`Color::to_u32`].
    #[inline]
    pub const fn from_u32(word: u32) -> Self {
        Self::from_channels(word.to_le_bytes())
    }

    /// Squared Euclidean distance over R, G and B.
    ///
    /// Alpha is excluded so that results do not depend on whatever the
    /// decoder left in the alpha channel. The maximum is `3 * 255^2`.
    ///
    /// # Example
    /// ```
    /// use cell_kernel::Color;
    /// let a = Color::new(10, 10, 10, 0);
    /// let b = Color::new(0, 0, 0, 255);
    /// assert_eq!(a.distance_squared(b), 300);
    /// ```
    #[inline]
    pub fn distance_squared(self, other: Color) -> i32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        dr * dr + dg * dg + db * db
    }
}

impl From<[u8; 4]> for Color {
    fn from(ch: [u8; 4]) -> Self {
        Self::from_channels(ch)
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        color.channels()
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supported formats (hash optional, case-insensitive, whitespace trimmed):
    /// - `#RGB` - shorthand, each digit doubled, opaque
    /// - `#RRGGBB` - opaque
    /// - `#RRGGBBAA` - with explicit alpha
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_kernel::Color;
    ///
    /// let white: Color = "#FFF".parse().unwrap();
    /// assert_eq!(white, Color::rgb(255, 255, 255));
    ///
    /// let clear: Color = "#10203000".parse().unwrap();
    /// assert_eq!(clear, Color::new(0x10, 0x20, 0x30, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        let invalid = s.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit());
        if let Some((position, found)) = invalid {
            return Err(ParseColorError::InvalidDigit { position, found });
        }

        // Every byte is an ASCII hex digit from here on.
        let digits = s.as_bytes();
        let nibble = |i: usize| hex_value(digits[i]);
        let byte = |i: usize| (nibble(i) << 4) | nibble(i + 1);

        match digits.len() {
            // 0xF * 17 == 0xFF
            3 => Ok(Self::rgb(nibble(0) * 17, nibble(1) * 17, nibble(2) * 17)),
            6 => Ok(Self::rgb(byte(0), byte(2), byte(4))),
            8 => Ok(Self::new(byte(0), byte(2), byte(4), byte(6))),
            len => Err(ParseColorError::InvalidLength(len)),
        }
    }
}

#[inline]
fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packing_matches_memory_order() {
        let color = Color::new(1, 2, 3, 4);
        assert_eq!(color.to_u32().to_le_bytes(), [1, 2, 3, 4]);
        assert_eq!(Color::from_u32(color.to_u32()), color);
        assert_eq!(std::mem::size_of::<Color>(), 4);
    }

    #[test]
    fn test_distance_ignores_alpha() {
        let a = Color::new(100, 50, 25, 0);
        let b = Color::new(90, 60, 25, 255);
        assert_eq!(a.distance_squared(b), 200);
        assert_eq!(
            a.distance_squared(b),
            Color::new(100, 50, 25, 77).distance_squared(Color::new(90, 60, 25, 3))
        );
    }

    #[test]
    fn test_distance_extremes() {
        let black = Color::rgb(0, 0, 0);
        let white = Color::rgb(255, 255, 255);
        assert_eq!(black.distance_squared(white), 3 * 255 * 255);
        assert_eq!(white.distance_squared(black), 3 * 255 * 255);
        assert_eq!(white.distance_squared(white), 0);
    }

    #[test]
    fn test_hex_parsing_formats() {
        assert_eq!("#FF0000".parse::<Color>().unwrap(), Color::rgb(255, 0, 0));
        assert_eq!("00ff00".parse::<Color>().unwrap(), Color::rgb(0, 255, 0));
        assert_eq!("#ABC".parse::<Color>().unwrap(), Color::rgb(0xAA, 0xBB, 0xCC));
        assert_eq!(
            "  #01020304 ".parse::<Color>().unwrap(),
            Color::new(1, 2, 3, 4)
        );
    }

    #[test]
    fn test_hex_parsing_errors() {
        assert_eq!(
            "#GGG".parse::<Color>(),
            Err(ParseColorError::InvalidDigit {
                position: 0,
                found: 'G'
            })
        );
        assert_eq!(
            "#FFFF".parse::<Color>(),
            Err(ParseColorError::InvalidLength(4))
        );
        assert_eq!("".parse::<Color>(), Err(ParseColorError::InvalidLength(0)));
        assert_eq!(
            "#ÿÿÿ".parse::<Color>(),
            Err(ParseColorError::InvalidDigit {
                position: 0,
                found: 'ÿ'
            })
        );
    }

    #[test]
    fn test_hex_parsing_rejects_signs() {
        // Signs are not digits, even where an integer parser would take them.
        assert_eq!(
            "#+F+F+F".parse::<Color>(),
            Err(ParseColorError::InvalidDigit {
                position: 0,
                found: '+'
            })
        );
        assert_eq!(
            "+1+2+3+4".parse::<Color>(),
            Err(ParseColorError::InvalidDigit {
                position: 0,
                found: '+'
            })
        );
        assert_eq!(
            "#FF-0000".parse::<Color>(),
            Err(ParseColorError::InvalidDigit {
                position: 2,
                found: '-'
            })
        );
    }
}
