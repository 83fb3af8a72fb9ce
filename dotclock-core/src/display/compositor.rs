//! Frame compositor
//!
//! Draws the whole panel from a [`Frame`] snapshot:
//!
//! ```text
//!  x:  2    7    12   14   19
//!     [d] [d]  .   [d]  [unit]     row 0  reading, e.g. 25.3c
//!  x:  1    6   10    14   19
//!     [h] [h]  [:]  [m]  [m]       row 2  time
//! ```
//!
//! Every glyph is rewritten on each refresh; the caller decides when a
//! refresh is needed.

use crate::clock::{bcd, ClockTime};
use crate::sensor::Reading;
use crate::traits::{DisplayError, MatrixDisplay, MeasurementKind};

use super::blink::{BlinkMask, Field};
use super::font::{Glyph, GLYPH_WIDTH};
use super::layout::{pixel_address, PANEL_ROWS, PANEL_WIDTH};

const TIME_ROW: u8 = 2;
const READING_ROW: u8 = 0;

const HOUR_X: u8 = 1;
const SEPARATOR_X: u8 = 10;
const MINUTE_X: u8 = 14;
/// Gap between the two digits of a field
const DIGIT_PITCH: u8 = 5;

const READING_X: [u8; 3] = [2, 7, 14];
const DECIMAL_POINT: (u8, u8) = (12, 1);
const UNIT_X: u8 = 19;

/// Everything one refresh shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Time of day
    pub time: ClockTime,
    /// Sensor value and its kind
    pub reading: Reading,
    /// Fields currently blanked
    pub blink: BlinkMask,
}

/// Draw `glyph` with its top-left corner at column `x`, nibble row `y`
///
/// A glyph spans two nibble rows and `GLYPH_WIDTH` columns, so `y` must be
/// below `PANEL_ROWS - 1` and the glyph must end inside the panel.
pub(crate) fn draw_glyph<D: MatrixDisplay>(
    display: &mut D,
    x: u8,
    y: u8,
    glyph: Glyph,
) -> Result<(), DisplayError> {
    debug_assert!(y <= PANEL_ROWS - 2, "glyph row outside panel");
    debug_assert!(x <= PANEL_WIDTH - GLYPH_WIDTH, "glyph column outside panel");
    for (i, column) in (0u8..).zip(glyph.columns()) {
        display.write_byte(pixel_address(x + i, y + 1), column)?;
    }
    Ok(())
}

fn draw_field<D: MatrixDisplay>(
    display: &mut D,
    x: u8,
    value: u8,
    blanked: bool,
) -> Result<(), DisplayError> {
    let (tens, ones) = if blanked {
        (Glyph::Blank, Glyph::Blank)
    } else {
        let (tens, ones) = bcd::digits(value);
        (Glyph::Digit(tens), Glyph::Digit(ones))
    };
    draw_glyph(display, x, TIME_ROW, tens)?;
    draw_glyph(display, x + DIGIT_PITCH, TIME_ROW, ones)
}

/// Draw a complete frame
///
/// Stops at the first display error; the next refresh redraws everything.
pub fn render<D: MatrixDisplay>(display: &mut D, frame: &Frame) -> Result<(), DisplayError> {
    draw_field(
        display,
        HOUR_X,
        frame.time.hour,
        frame.blink.is_blanked(Field::Hour),
    )?;
    draw_field(
        display,
        MINUTE_X,
        frame.time.minute,
        frame.blink.is_blanked(Field::Minute),
    )?;

    let separator = if frame.time.is_odd_second() {
        Glyph::Colon
    } else {
        Glyph::Blank
    };
    draw_glyph(display, SEPARATOR_X, TIME_ROW, separator)?;

    let value = frame.reading.value;
    let digits = [(value / 1000) % 10, (value / 100) % 10, (value / 10) % 10];
    for (x, digit) in READING_X.into_iter().zip(digits) {
        draw_glyph(display, x, READING_ROW, Glyph::Digit(digit as u8))?;
    }
    display.write_byte(pixel_address(DECIMAL_POINT.0, DECIMAL_POINT.1), 0x01)?;

    let unit = match frame.reading.kind {
        MeasurementKind::Humidity => Glyph::Percent,
        MeasurementKind::Temperature => Glyph::Celsius,
    };
    draw_glyph(display, UNIT_X, READING_ROW, unit)
}
