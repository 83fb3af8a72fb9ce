//! Matrix display trait

/// Errors that can occur while talking to the display controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// The serial link never reported ready
    Timeout,
}

/// Trait for a dot-matrix LED controller
///
/// The panel memory is byte-addressed; see
/// [`crate::display::layout::pixel_address`] for the wiring of coordinates
/// to addresses.
pub trait MatrixDisplay {
    /// Write one column byte at a display-memory address
    fn write_byte(&mut self, address: u8, data: u8) -> Result<(), DisplayError>;

    /// Set the PWM brightness level (0-15)
    fn set_brightness(&mut self, level: u8) -> Result<(), DisplayError>;

    /// Enable or disable the controller's whole-panel blink
    fn set_panel_blink(&mut self, enabled: bool) -> Result<(), DisplayError>;
}

impl<T: MatrixDisplay + ?Sized> MatrixDisplay for &mut T {
    fn write_byte(&mut self, address: u8, data: u8) -> Result<(), DisplayError> {
        (**self).write_byte(address, data)
    }

    fn set_brightness(&mut self, level: u8) -> Result<(), DisplayError> {
        (**self).set_brightness(level)
    }

    fn set_panel_blink(&mut self, enabled: bool) -> Result<(), DisplayError> {
        (**self).set_panel_blink(enabled)
    }
}
