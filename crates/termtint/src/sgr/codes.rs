//! SGR parameter values and their mnemonics.

pub const RESET: u8 = 0;
pub const BOLD: u8 = 1;
pub const DIM: u8 = 2;
pub const ITALIC: u8 = 3;
pub const UNDERLINED: u8 = 4;
pub const BLINK_SLOW: u8 = 5;
pub const BLINK_FAST: u8 = 6;
pub const INVERSED: u8 = 7;
pub const HIDDEN: u8 = 8;
pub const CROSSLINED: u8 = 9;
pub const DOUBLE_UNDERLINED: u8 = 21;
pub const BOLD_DIM_OFF: u8 = 22;
pub const ITALIC_OFF: u8 = 23;
pub const UNDERLINED_OFF: u8 = 24;
pub const BLINK_OFF: u8 = 25;
pub const INVERSED_OFF: u8 = 27;
pub const HIDDEN_OFF: u8 = 28;
pub const CROSSLINED_OFF: u8 = 29;

pub const BLACK: u8 = 30;
pub const RED: u8 = 31;
pub const GREEN: u8 = 32;
pub const YELLOW: u8 = 33;
pub const BLUE: u8 = 34;
pub const MAGENTA: u8 = 35;
pub const CYAN: u8 = 36;
pub const WHITE: u8 = 37;
pub const COLOR_EXTENDED: u8 = 38;
pub const COLOR_OFF: u8 = 39;

pub const BG_BLACK: u8 = 40;
pub const BG_RED: u8 = 41;
pub const BG_GREEN: u8 = 42;
pub const BG_YELLOW: u8 = 43;
pub const BG_BLUE: u8 = 44;
pub const BG_MAGENTA: u8 = 45;
pub const BG_CYAN: u8 = 46;
pub const BG_WHITE: u8 = 47;
pub const BG_COLOR_EXTENDED: u8 = 48;
pub const BG_COLOR_OFF: u8 = 49;

pub const OVERLINED: u8 = 53;
pub const OVERLINED_OFF: u8 = 55;

pub const GRAY: u8 = 90;
pub const HI_RED: u8 = 91;
pub const HI_GREEN: u8 = 92;
pub const HI_YELLOW: u8 = 93;
pub const HI_BLUE: u8 = 94;
pub const HI_MAGENTA: u8 = 95;
pub const HI_CYAN: u8 = 96;
pub const HI_WHITE: u8 = 97;

pub const BG_GRAY: u8 = 100;
pub const BG_HI_RED: u8 = 101;
pub const BG_HI_GREEN: u8 = 102;
pub const BG_HI_YELLOW: u8 = 103;
pub const BG_HI_BLUE: u8 = 104;
pub const BG_HI_MAGENTA: u8 = 105;
pub const BG_HI_CYAN: u8 = 106;
pub const BG_HI_WHITE: u8 = 107;

/// The second parameter of extended colors selecting a 256-color index.
pub const EXTENDED_MODE_256: u8 = 5;
/// The second parameter of extended colors selecting 24-bit RGB.
pub const EXTENDED_MODE_RGB: u8 = 2;

/// The distance between a foreground color parameter and its background
/// counterpart.
pub const BG_OFFSET: u8 = 10;

/// The foreground colors 30–37 and 90–97.
pub const FOREGROUND_COLORS: [u8; 16] = [
    BLACK, RED, GREEN, YELLOW, BLUE, MAGENTA, CYAN, WHITE, GRAY, HI_RED, HI_GREEN, HI_YELLOW,
    HI_BLUE, HI_MAGENTA, HI_CYAN, HI_WHITE,
];

/// The background colors 40–47 and 100–107.
pub const BACKGROUND_COLORS: [u8; 16] = [
    BG_BLACK,
    BG_RED,
    BG_GREEN,
    BG_YELLOW,
    BG_BLUE,
    BG_MAGENTA,
    BG_CYAN,
    BG_WHITE,
    BG_GRAY,
    BG_HI_RED,
    BG_HI_GREEN,
    BG_HI_YELLOW,
    BG_HI_BLUE,
    BG_HI_MAGENTA,
    BG_HI_CYAN,
    BG_HI_WHITE,
];

#[rustfmt::skip]
const MNEMONICS: &[(&str, u8)] = &[
    ("reset", RESET),
    ("bold", BOLD),
    ("dim", DIM),
    ("italic", ITALIC),
    ("underlined", UNDERLINED),
    ("blink_slow", BLINK_SLOW),
    ("blink_fast", BLINK_FAST),
    ("inversed", INVERSED),
    ("hidden", HIDDEN),
    ("crosslined", CROSSLINED),
    ("double_underlined", DOUBLE_UNDERLINED),
    ("bold_dim_off", BOLD_DIM_OFF),
    ("italic_off", ITALIC_OFF),
    ("underlined_off", UNDERLINED_OFF),
    ("blink_off", BLINK_OFF),
    ("inversed_off", INVERSED_OFF),
    ("hidden_off", HIDDEN_OFF),
    ("crosslined_off", CROSSLINED_OFF),
    ("black", BLACK),
    ("red", RED),
    ("green", GREEN),
    ("yellow", YELLOW),
    ("blue", BLUE),
    ("magenta", MAGENTA),
    ("cyan", CYAN),
    ("white", WHITE),
    ("color_extended", COLOR_EXTENDED),
    ("color_off", COLOR_OFF),
    ("bg_black", BG_BLACK),
    ("bg_red", BG_RED),
    ("bg_green", BG_GREEN),
    ("bg_yellow", BG_YELLOW),
    ("bg_blue", BG_BLUE),
    ("bg_magenta", BG_MAGENTA),
    ("bg_cyan", BG_CYAN),
    ("bg_white", BG_WHITE),
    ("bg_color_extended", BG_COLOR_EXTENDED),
    ("bg_color_off", BG_COLOR_OFF),
    ("overlined", OVERLINED),
    ("overlined_off", OVERLINED_OFF),
    ("gray", GRAY),
    ("hi_red", HI_RED),
    ("hi_green", HI_GREEN),
    ("hi_yellow", HI_YELLOW),
    ("hi_blue", HI_BLUE),
    ("hi_magenta", HI_MAGENTA),
    ("hi_cyan", HI_CYAN),
    ("hi_white", HI_WHITE),
    ("bg_gray", BG_GRAY),
    ("bg_hi_red", BG_HI_RED),
    ("bg_hi_green", BG_HI_GREEN),
    ("bg_hi_yellow", BG_HI_YELLOW),
    ("bg_hi_blue", BG_HI_BLUE),
    ("bg_hi_magenta", BG_HI_MAGENTA),
    ("bg_hi_cyan", BG_HI_CYAN),
    ("bg_hi_white", BG_HI_WHITE),
];

/// Look up the SGR parameter with the given mnemonic, ignoring case.
pub fn lookup(mnemonic: &str) -> Option<u8> {
    MNEMONICS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(mnemonic))
        .map(|&(_, code)| code)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("bold"), Some(BOLD));
        assert_eq!(lookup("BOLD"), Some(BOLD));
        assert_eq!(lookup("Bg_Hi_White"), Some(BG_HI_WHITE));
        assert_eq!(lookup("bolder"), None);
        assert_eq!(lookup(""), None);

        for (fg, bg) in FOREGROUND_COLORS.iter().zip(BACKGROUND_COLORS.iter()) {
            assert_eq!(fg + BG_OFFSET, *bg);
        }
    }
}
