//! 4-column glyph bitmaps
//!
//! One byte per column, bit 0 at the bottom row of the glyph cell.

/// Columns per glyph
pub const GLYPH_WIDTH: u8 = 4;

/// Glyphs in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    /// Decimal digit 0-9 (larger values wrap)
    Digit(u8),
    /// All columns off
    Blank,
    /// Seconds separator
    Colon,
    /// Degrees Celsius unit
    Celsius,
    /// Percent unit
    Percent,
}

const FONT: [[u8; GLYPH_WIDTH as usize]; 14] = [
    [0x3E, 0x41, 0x41, 0x3E], // 0
    [0x00, 0x20, 0x7F, 0x00], // 1
    [0x27, 0x49, 0x49, 0x31], // 2
    [0x41, 0x49, 0x49, 0x36], // 3
    [0x78, 0x08, 0x08, 0x7F], // 4
    [0x79, 0x49, 0x49, 0x46], // 5
    [0x3E, 0x49, 0x49, 0x26], // 6
    [0x40, 0x40, 0x40, 0x7F], // 7
    [0x36, 0x49, 0x49, 0x36], // 8
    [0x31, 0x49, 0x49, 0x3E], // 9
    [0x00, 0x00, 0x00, 0x00], // blank
    [0x00, 0x36, 0x36, 0x00], // :
    [0x20, 0x0E, 0x11, 0x11], // c
    [0x09, 0x02, 0x04, 0x09], // %
];

impl Glyph {
    /// Column bytes of this glyph
    pub const fn columns(self) -> [u8; GLYPH_WIDTH as usize] {
        let index = match self {
            Glyph::Digit(d) => (d % 10) as usize,
            Glyph::Blank => 10,
            Glyph::Colon => 11,
            Glyph::Celsius => 12,
            Glyph::Percent => 13,
        };
        FONT[index]
    }
}
