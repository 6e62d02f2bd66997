//! Standard terminal color sets

use crate::color::Color;

/// xterm's default 16 ANSI colors, in SGR index order.
pub(super) const ANSI16: [Color; 16] = [
    Color::rgb(0x00, 0x00, 0x00), // black
    Color::rgb(0xcd, 0x00, 0x00), // red
    Color::rgb(0x00, 0xcd, 0x00), // green
    Color::rgb(0xcd, 0xcd, 0x00), // yellow
    Color::rgb(0x00, 0x00, 0xee), // blue
    Color::rgb(0xcd, 0x00, 0xcd), // magenta
    Color::rgb(0x00, 0xcd, 0xcd), // cyan
    Color::rgb(0xe5, 0xe5, 0xe5), // white
    Color::rgb(0x7f, 0x7f, 0x7f), // bright black
    Color::rgb(0xff, 0x00, 0x00), // bright red
    Color::rgb(0x00, 0xff, 0x00), // bright green
    Color::rgb(0xff, 0xff, 0x00), // bright yellow
    Color::rgb(0x5c, 0x5c, 0xff), // bright blue
    Color::rgb(0xff, 0x00, 0xff), // bright magenta
    Color::rgb(0x00, 0xff, 0xff), // bright cyan
    Color::rgb(0xff, 0xff, 0xff), // bright white
];

/// Channel levels of the 6x6x6 color cube (indices 16..=231).
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// The xterm 256-color palette: the 16 ANSI colors, the 6x6x6 cube, then a
/// 24-step grey ramp from 8 to 238.
///
/// The cube and ramp repeat some ANSI colors (pure black and white among
/// them). Nearest-color search keeps the lower index on ties, so the ANSI
/// entries win.
pub(super) fn xterm256() -> Vec<Color> {
    let mut colors = Vec::with_capacity(256);
    colors.extend_from_slice(&ANSI16);
    for r in CUBE_LEVELS {
        for g in CUBE_LEVELS {
            for b in CUBE_LEVELS {
                colors.push(Color::rgb(r, g, b));
            }
        }
    }
    colors.extend((0..24u8).map(|i| {
        let v = 8 + 10 * i;
        Color::rgb(v, v, v)
    }));
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xterm256_layout() {
        let colors = xterm256();
        assert_eq!(colors.len(), 256);
        assert_eq!(colors[16], Color::rgb(0, 0, 0));
        assert_eq!(colors[16 + 36 * 5 + 6 * 2 + 1], Color::rgb(255, 135, 95));
        assert_eq!(colors[231], Color::rgb(255, 255, 255));
        assert_eq!(colors[232], Color::rgb(8, 8, 8));
        assert_eq!(colors[255], Color::rgb(238, 238, 238));
    }
}
