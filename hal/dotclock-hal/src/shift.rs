//! Serial shift-register abstraction
//!
//! Models a clocked serial output unit that shifts a configurable number of
//! bits out MSB first and raises a flag once the transfer has completed.
//! Hardware shifters run asynchronously, so callers poll [`SerialShifter::is_ready`]
//! before loading the next word.

/// Clocked serial shift-out unit
pub trait SerialShifter {
    /// Start shifting the `bits` most significant bits of `word`, MSB first
    ///
    /// `bits` is at most 16. The transfer may still be in progress when this
    /// returns.
    fn shift_out(&mut self, word: u16, bits: u8);

    /// Check whether the last transfer has completed
    fn is_ready(&self) -> bool;
}
