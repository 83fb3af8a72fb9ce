//! GPIO pin abstractions
//!
//! Provides traits for the digital signals used by the clock: push-pull
//! outputs, plain inputs and open-drain data lines.

/// Logic level of a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level == Level::High
    }
}

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip. The pin is expected to be configured as an output
/// when handed to a driver.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific level
    fn set_level(&mut self, level: Level) {
        match level {
            Level::High => self.set_high(),
            Level::Low => self.set_low(),
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }

    /// Read the current level
    fn read_level(&self) -> Level {
        Level::from(self.is_high())
    }
}

/// Open-drain data line
///
/// The line is pulled high externally. "Releasing" configures the pin as an
/// input so the pull-up (or the peer device) sets the level; "driving low"
/// configures it as an output with a latched low level. The line is never
/// actively driven high.
pub trait OpenDrainPin: InputPin {
    /// Stop driving the line (configure as input)
    fn release(&mut self);

    /// Pull the line low (configure as output, latched low)
    fn drive_low(&mut self);

    /// Release for `High`, drive for `Low`
    fn set_level(&mut self, level: Level) {
        match level {
            Level::High => self.release(),
            Level::Low => self.drive_low(),
        }
    }
}
