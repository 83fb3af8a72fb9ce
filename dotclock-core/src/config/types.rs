//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest PWM brightness level
pub const MAX_BRIGHTNESS: u8 = 15;

/// Tick engine and blink timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct TickConfig {
    /// Timer interrupts per second
    pub sub_ticks_per_second: u8,
    /// Bit of the sub-tick counter that drives field blinking
    /// (bit 4 toggles every 16 sub-ticks)
    pub blink_phase_bit: u8,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            sub_ticks_per_second: 128,
            blink_phase_bit: 4,
        }
    }
}

/// Debounce and hold-repeat tuning, in sub-ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ButtonConfig {
    /// Identical samples required after a change before it is committed
    pub debounce_samples: u8,
    /// Hold counter value loaded on every committed edge
    pub hold_max: u8,
    /// Set button held with its counter below this enters set mode
    pub long_press_threshold: u8,
    /// Adjust button held with its counter below this auto-repeats
    pub repeat_threshold: u8,
    /// Counter value loaded after each auto-repeat step
    pub repeat_reload: u8,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            debounce_samples: 4,
            hold_max: 255,
            long_press_threshold: 255 - 192,
            repeat_threshold: 255 - 128,
            repeat_reload: 255 - (128 - 64),
        }
    }
}

/// Display controller settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DisplayConfig {
    /// PWM brightness at power-up (0-15)
    pub brightness: u8,
    /// Ready-flag polls before a transfer is reported as timed out
    pub ready_spin_limit: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            brightness: 7,
            ready_spin_limit: 10_000,
        }
    }
}

/// Humidity/temperature sensor settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SensorConfig {
    /// Elapsed seconds between issuing a measurement and reading it
    pub settle_seconds: u8,
    /// Delay per clock phase of the two-wire link, in nanoseconds
    pub half_period_ns: u32,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            settle_seconds: 1,
            half_period_ns: 1_000,
        }
    }
}

/// Complete clock configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ClockConfig {
    /// Tick timing
    pub tick: TickConfig,
    /// Button handling
    pub buttons: ButtonConfig,
    /// Display controller
    pub display: DisplayConfig,
    /// Sensor link
    pub sensor: SensorConfig,
}

/// Configuration values that cannot work together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `tick.sub_ticks_per_second` is zero
    ZeroTickRate,
    /// `tick.blink_phase_bit` is not a bit of a byte
    BlinkBitOutOfRange,
    /// `buttons.debounce_samples` is zero
    ZeroDebounce,
    /// A threshold is not below `buttons.hold_max`
    ThresholdAboveHoldMax,
    /// `buttons.repeat_reload` is not above `buttons.repeat_threshold`
    RepeatReloadTooLow,
    /// `display.brightness` is above 15
    BrightnessOutOfRange,
    /// `display.ready_spin_limit` is zero
    ZeroSpinLimit,
    /// `sensor.settle_seconds` is zero
    ZeroSettle,
}

impl ClockConfig {
    /// Check that the values are usable together
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick.sub_ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.tick.blink_phase_bit > 7 {
            return Err(ConfigError::BlinkBitOutOfRange);
        }

        let b = &self.buttons;
        if b.debounce_samples == 0 {
            return Err(ConfigError::ZeroDebounce);
        }
        if b.long_press_threshold >= b.hold_max || b.repeat_threshold >= b.hold_max {
            return Err(ConfigError::ThresholdAboveHoldMax);
        }
        // The reload must sit above the threshold or every pass would repeat
        if b.repeat_reload <= b.repeat_threshold {
            return Err(ConfigError::RepeatReloadTooLow);
        }

        if self.display.brightness > MAX_BRIGHTNESS {
            return Err(ConfigError::BrightnessOutOfRange);
        }
        if self.display.ready_spin_limit == 0 {
            return Err(ConfigError::ZeroSpinLimit);
        }
        if self.sensor.settle_seconds == 0 {
            return Err(ConfigError::ZeroSettle);
        }

        Ok(())
    }
}
