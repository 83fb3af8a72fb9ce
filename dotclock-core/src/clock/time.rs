//! Wall-clock time held as BCD fields

use super::bcd::increment_wrapping;

/// Exclusive upper bound of the seconds field (BCD 60)
pub const SECOND_BOUND: u8 = 0x60;

/// Exclusive upper bound of the minutes field (BCD 60)
pub const MINUTE_BOUND: u8 = 0x60;

/// Exclusive upper bound of the hours field (BCD 24)
pub const HOUR_BOUND: u8 = 0x24;

/// Time of day, 24-hour, each field packed BCD
///
/// Invariant: `second` and `minute` lie in 0x00..=0x59, `hour` in
/// 0x00..=0x23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    /// Hours, BCD 0x00-0x23
    pub hour: u8,
    /// Minutes, BCD 0x00-0x59
    pub minute: u8,
    /// Seconds, BCD 0x00-0x59
    pub second: u8,
}

impl ClockTime {
    /// Midnight
    pub const MIDNIGHT: Self = Self::new(0x00, 0x00, 0x00);

    /// Create a time from BCD fields
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Advance by one second, carrying into minutes and hours
    pub fn tick_second(&mut self) {
        if increment_wrapping(&mut self.second, SECOND_BOUND)
            && increment_wrapping(&mut self.minute, MINUTE_BOUND)
        {
            increment_wrapping(&mut self.hour, HOUR_BOUND);
        }
    }

    /// Step the hour field while setting the clock (no carry)
    pub fn increment_hour(&mut self) {
        increment_wrapping(&mut self.hour, HOUR_BOUND);
    }

    /// Step the minute field while setting the clock (no carry into hours)
    pub fn increment_minute(&mut self) {
        increment_wrapping(&mut self.minute, MINUTE_BOUND);
    }

    /// Check the BCD range invariant on all fields
    pub fn is_valid(&self) -> bool {
        super::bcd::is_valid(self.hour)
            && super::bcd::is_valid(self.minute)
            && super::bcd::is_valid(self.second)
            && self.hour < HOUR_BOUND
            && self.minute < MINUTE_BOUND
            && self.second < SECOND_BOUND
    }

    /// Odd seconds light the separator
    pub fn is_odd_second(&self) -> bool {
        self.second & 0x01 != 0
    }
}
