//! Static palette data.

use crate::sgr::codes;
use crate::termco::{ansi, Color16, Color256, ColorRgb, TerminalColor};

/// The 16 extended ANSI colors with xterm's default values.
pub const XTERM_16: [Color16; 16] = [
    ansi(0x000000, codes::BLACK, "black"),
    ansi(0x800000, codes::RED, "red"),
    ansi(0x008000, codes::GREEN, "green"),
    ansi(0x808000, codes::YELLOW, "yellow"),
    ansi(0x000080, codes::BLUE, "blue"),
    ansi(0x800080, codes::MAGENTA, "magenta"),
    ansi(0x008080, codes::CYAN, "cyan"),
    ansi(0xc0c0c0, codes::WHITE, "white"),
    ansi(0x808080, codes::GRAY, "bright_black"),
    ansi(0xff0000, codes::HI_RED, "bright_red"),
    ansi(0x00ff00, codes::HI_GREEN, "bright_green"),
    ansi(0xffff00, codes::HI_YELLOW, "bright_yellow"),
    ansi(0x0000ff, codes::HI_BLUE, "bright_blue"),
    ansi(0xff00ff, codes::HI_MAGENTA, "bright_magenta"),
    ansi(0x00ffff, codes::HI_CYAN, "bright_cyan"),
    ansi(0xffffff, codes::HI_WHITE, "bright_white"),
];

// The levels of the 6x6x6 RGB cube
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Generate the 256 indexed colors with xterm's default values.
///
/// Indexes 0–15 are the extended ANSI colors, 16–231 the RGB cube, and
/// 232–255 the gray gradient.
pub fn xterm_256() -> Vec<Color256> {
    let mut colors = Vec::with_capacity(256);

    for (index, color16) in (0..).zip(XTERM_16) {
        colors.push(Color256::with_color16(color16.hex_value(), index, color16));
    }

    let mut index = 16;
    for r in CUBE_LEVELS {
        for g in CUBE_LEVELS {
            for b in CUBE_LEVELS {
                colors.push(Color256::new(u32::from_be_bytes([0, r, g, b]), index));
                index += 1;
            }
        }
    }

    for step in 0..24 {
        let level = 8 + 10 * step;
        colors.push(Color256::new(
            u32::from_be_bytes([0, level, level, level]),
            232 + step,
        ));
    }

    colors
}

/// Named 24-bit colors, using CSS names.
pub const NAMED_RGB: [ColorRgb; 30] = [
    ColorRgb::named(0xf0f8ff, "aliceblue"),
    ColorRgb::named(0xfaebd7, "antiquewhite"),
    ColorRgb::named(0x7fffd4, "aquamarine"),
    ColorRgb::named(0xf5f5dc, "beige"),
    ColorRgb::named(0x8a2be2, "blueviolet"),
    ColorRgb::named(0xa52a2a, "brown"),
    ColorRgb::named(0xd2691e, "chocolate"),
    ColorRgb::named(0xff7f50, "coral"),
    ColorRgb::named(0x6495ed, "cornflowerblue"),
    ColorRgb::named(0xdc143c, "crimson"),
    ColorRgb::named(0xff8c00, "darkorange"),
    ColorRgb::named(0x228b22, "forestgreen"),
    ColorRgb::named(0xffd700, "gold"),
    ColorRgb::named(0xdaa520, "goldenrod"),
    ColorRgb::named(0xff69b4, "hotpink"),
    ColorRgb::named(0x4b0082, "indigo"),
    ColorRgb::named(0xf0e68c, "khaki"),
    ColorRgb::named(0xe6e6fa, "lavender"),
    ColorRgb::named(0x32cd32, "limegreen"),
    ColorRgb::named(0x191970, "midnightblue"),
    ColorRgb::named(0x808000, "olive"),
    ColorRgb::named(0xffa500, "orange"),
    ColorRgb::named(0xda70d6, "orchid"),
    ColorRgb::named(0xcd853f, "peru"),
    ColorRgb::named(0xfa8072, "salmon"),
    ColorRgb::named(0x2e8b57, "seagreen"),
    ColorRgb::named(0x87ceeb, "skyblue"),
    ColorRgb::named(0x708090, "slategray"),
    ColorRgb::named(0xd2b48c, "tan"),
    ColorRgb::named(0x40e0d0, "turquoise"),
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_xterm_256() {
        let colors = xterm_256();
        assert_eq!(colors.len(), 256);
        for (index, color) in colors.iter().enumerate() {
            assert_eq!(color.index() as usize, index);
            assert_eq!(color.color16().is_some(), index < 16);
        }

        assert_eq!(colors[16].hex_value(), 0x000000);
        assert_eq!(colors[141].hex_value(), 0xaf87ff);
        assert_eq!(colors[196].hex_value(), 0xff0000);
        assert_eq!(colors[231].hex_value(), 0xffffff);
        assert_eq!(colors[232].hex_value(), 0x080808);
        assert_eq!(colors[255].hex_value(), 0xeeeeee);
    }
}
