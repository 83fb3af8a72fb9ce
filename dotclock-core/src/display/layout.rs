//! Panel geometry
//!
//! The panel is 24 columns wide. Rows are addressed in nibbles: the
//! controller packs four LED rows into each memory nibble, so a column has
//! four nibble rows (`y` 0-3, 0 at the top). Each 8-column block of the
//! panel occupies 32 consecutive addresses, with columns running right to
//! left inside the block.

/// Columns on the panel
pub const PANEL_WIDTH: u8 = 24;

/// Nibble rows per column
pub const PANEL_ROWS: u8 = 4;

/// Display-memory addresses covered by the panel
pub const ADDRESS_SPACE: u8 = PANEL_WIDTH * PANEL_ROWS;

/// Controller memory address of nibble row `y` in column `x`
///
/// Defined for `x < PANEL_WIDTH` and `y < PANEL_ROWS`; this is the wiring
/// of the board and must not change.
pub const fn pixel_address(x: u8, y: u8) -> u8 {
    ((7 - (x % 8)) << 2) + (3 - y) + ((x / 8) << 5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_corners() {
        assert_eq!(pixel_address(0, 0), 31);
        assert_eq!(pixel_address(7, 3), 0);
        assert_eq!(pixel_address(8, 0), 63);
        assert_eq!(pixel_address(23, 3), 64);
    }

    #[test]
    fn test_covers_address_space_once() {
        let mut seen = [false; ADDRESS_SPACE as usize];
        for x in 0..PANEL_WIDTH {
            for y in 0..PANEL_ROWS {
                let address = pixel_address(x, y) as usize;
                assert!(!seen[address], "({x}, {y}) collides");
                seen[address] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
