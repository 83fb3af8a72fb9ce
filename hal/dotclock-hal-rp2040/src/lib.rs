//! RP2040-specific HAL for the clock firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `dotclock-hal` signal traits on top of `embassy-rp` GPIO:
//!
//! - [`gpio::RpOutput`] - push-pull output (display clock, data, chip select,
//!   sensor clock)
//! - [`gpio::RpInput`] - input with configurable pull (buttons)
//! - [`gpio::RpOpenDrain`] - released-high / driven-low line (sensor data)

#![no_std]

pub mod gpio;

// Re-export shared traits from dotclock-hal for convenience
pub use dotclock_hal::{InputPin, Level, OpenDrainPin, OutputPin};
pub use gpio::{RpInput, RpOpenDrain, RpOutput};
