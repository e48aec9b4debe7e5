use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Build a color from a packed `0xRRGGBB` value
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

#[allow(clippy::unreadable_literal)]
pub const ORANGE: Rgb = rgb_from_u32(0xFFA500);
#[allow(clippy::unreadable_literal)]
pub const RED: Rgb = rgb_from_u32(0xFF0000);
#[allow(clippy::unreadable_literal)]
pub const GREEN: Rgb = rgb_from_u32(0x00FF00);
#[allow(clippy::unreadable_literal)]
pub const WHITE: Rgb = rgb_from_u32(0xFFFFFF);
#[allow(clippy::unreadable_literal)]
pub const YELLOW: Rgb = rgb_from_u32(0xFFFF00);
#[allow(clippy::unreadable_literal)]
pub const PURPLE: Rgb = rgb_from_u32(0xFF00FF);

/// Color of unlit segments.
pub const BLACK: Rgb = rgb_from_u32(0);
