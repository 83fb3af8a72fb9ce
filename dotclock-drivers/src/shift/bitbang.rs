//! GPIO bit-banged serial shifter
//!
//! Drives a write clock and a data line directly. The clock idles high and
//! the receiver latches data on the rising edge, as the HT1632 write clock
//! expects. Shifting is synchronous, so the shifter is ready as soon as
//! [`SerialShifter::shift_out`] returns.

use dotclock_hal::{Level, OutputPin, SerialShifter};
use embedded_hal::delay::DelayNs;

/// Serial shifter over two output pins
pub struct BitBangShifter<CLK, DATA, D> {
    clock: CLK,
    data: DATA,
    delay: D,
    half_period_ns: u32,
}

impl<CLK: OutputPin, DATA: OutputPin, D: DelayNs> BitBangShifter<CLK, DATA, D> {
    /// Create a shifter with the clock idling high
    pub fn new(mut clock: CLK, data: DATA, delay: D, half_period_ns: u32) -> Self {
        clock.set_high();
        Self {
            clock,
            data,
            delay,
            half_period_ns,
        }
    }
}

impl<CLK: OutputPin, DATA: OutputPin, D: DelayNs> SerialShifter for BitBangShifter<CLK, DATA, D> {
    fn shift_out(&mut self, word: u16, bits: u8) {
        for i in 0..bits.min(16) {
            self.clock.set_low();
            self.data.set_level(Level::from(word & (0x8000 >> i) != 0));
            self.delay.delay_ns(self.half_period_ns);
            self.clock.set_high();
            self.delay.delay_ns(self.half_period_ns);
        }
    }

    fn is_ready(&self) -> bool {
        true
    }
}
