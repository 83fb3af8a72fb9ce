//! Binary-coded decimal helpers
//!
//! Each nibble of a byte holds one decimal digit, so 0x59 reads as "59".

/// Add one to a packed BCD byte with decimal adjust
///
/// 0x09 becomes 0x10, 0x59 becomes 0x60 and 0x99 wraps to 0x00.
pub const fn bcd_increment(value: u8) -> u8 {
    if value & 0x0F < 0x09 {
        value + 1
    } else if value & 0xF0 < 0x90 {
        (value & 0xF0) + 0x10
    } else {
        0x00
    }
}

/// Increment a BCD field and wrap it to zero at `bound`
///
/// Returns `true` when the field wrapped, i.e. when the next field up
/// should carry.
pub fn increment_wrapping(value: &mut u8, bound: u8) -> bool {
    *value = bcd_increment(*value);
    if *value >= bound {
        *value = 0;
        return true;
    }
    false
}

/// Split a BCD byte into its (tens, ones) digits
pub const fn digits(value: u8) -> (u8, u8) {
    (value >> 4, value & 0x0F)
}

/// Check that both nibbles are decimal digits
pub const fn is_valid(value: u8) -> bool {
    value & 0x0F <= 9 && value >> 4 <= 9
}
