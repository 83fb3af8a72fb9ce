//! Dotclock Hardware Abstraction Layer
//!
//! This crate defines the signal-level traits the protocol drivers are
//! written against. Chip-specific HALs implement them per logical signal
//! (display clock/data/chip-select, sensor clock/data, button inputs), and
//! host tests implement them with simulated pins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  dotclock-drivers (HT1632, SHT11, ...)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dotclock-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ dotclock-hal- │       │  simulated    │
//! │    rp2040     │       │  test pins    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`gpio::OpenDrainPin`] - Released-high / driven-low data lines
//! - [`shift::SerialShifter`] - Clocked serial shift-out with a ready flag

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod shift;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, Level, OpenDrainPin, OutputPin};
pub use shift::SerialShifter;
