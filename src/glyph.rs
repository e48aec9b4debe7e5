//! Seven-segment glyph table.
//!
//! ```text
//!    A
//!  F   B
//!    G
//!  E   C
//!    D   .
//! ```

/// 8-bit mask of lit segments, bit 0 = A ... bit 6 = G, bit 7 = decimal point.
pub type SegmentMask = u8;

pub const SEG_A: SegmentMask = 1 << 0;
pub const SEG_B: SegmentMask = 1 << 1;
pub const SEG_C: SegmentMask = 1 << 2;
pub const SEG_D: SegmentMask = 1 << 3;
pub const SEG_E: SegmentMask = 1 << 4;
pub const SEG_F: SegmentMask = 1 << 5;
pub const SEG_G: SegmentMask = 1 << 6;
pub const SEG_DOT: SegmentMask = 1 << 7;
pub const SEG_ALL: SegmentMask = 0xFF;

/// Shown for any symbol the table does not know.
pub const FALLBACK: SegmentMask = SEG_A | SEG_B | SEG_E | SEG_G | SEG_DOT;

/// Letters with a dedicated glyph.
pub const ALPHABET: &str = "AaBbCcDdEeFfGgOoRrSsTtUu";

const HEX_DIGITS: [SegmentMask; 16] = [
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,         // 0
    SEG_B | SEG_C,                                         // 1
    SEG_A | SEG_B | SEG_D | SEG_E | SEG_G,                 // 2
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_G,                 // 3
    SEG_B | SEG_C | SEG_F | SEG_G,                         // 4
    SEG_A | SEG_C | SEG_D | SEG_F | SEG_G,                 // 5
    SEG_A | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,         // 6
    SEG_A | SEG_B | SEG_C,                                 // 7
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G, // 8
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,         // 9
    SEG_A | SEG_B | SEG_C | SEG_E | SEG_F | SEG_G,         // A
    SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,                 // b
    SEG_A | SEG_D | SEG_E | SEG_F,                         // C
    SEG_B | SEG_C | SEG_D | SEG_E | SEG_G,                 // d
    SEG_A | SEG_D | SEG_E | SEG_F | SEG_G,                 // E
    SEG_A | SEG_E | SEG_F | SEG_G,                         // F
];

/// Glyph for a digit value.
///
/// Values 10-15 render as hex letters, anything larger as [`FALLBACK`].
pub const fn digit_mask(value: u32) -> SegmentMask {
    if value < 16 {
        HEX_DIGITS[value as usize]
    } else {
        FALLBACK
    }
}

/// Glyph for a character. Total: unknown characters map to [`FALLBACK`].
pub const fn char_mask(symbol: char) -> SegmentMask {
    match symbol {
        '0'..='9' => digit_mask(symbol as u32 - '0' as u32),
        'O' | 'o' => digit_mask(0),
        'S' | 's' => digit_mask(5),
        'T' | 't' => digit_mask(7),
        'G' | 'g' => digit_mask(9),
        'A' | 'a' => digit_mask(10),
        'B' | 'b' => digit_mask(11),
        'C' | 'c' => digit_mask(12),
        'D' | 'd' => digit_mask(13),
        'E' | 'e' => digit_mask(14),
        'F' | 'f' => digit_mask(15),
        'R' | 'r' => SEG_E | SEG_G,
        'u' => SEG_C | SEG_D | SEG_E,
        'U' => SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,
        '^' => SEG_A,
        ' ' => 0,
        '.' => SEG_DOT,
        _ => FALLBACK,
    }
}

/// Two-digit glyphs for a number, e.g. minutes remaining. Only the last two
/// decimal digits are shown.
pub const fn two_digits(value: u32) -> [SegmentMask; 2] {
    [digit_mask((value % 100) / 10), digit_mask(value % 10)]
}
