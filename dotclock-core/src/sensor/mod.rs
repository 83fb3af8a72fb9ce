//! Humidity/temperature measurement
//!
//! [`SensorCycle`] alternates measurement kinds across elapsed seconds and
//! [`conversion`] turns raw words into fixed-point readings.

pub mod conversion;
pub mod cycle;

pub use conversion::{humidity_centi, temperature_centi};
pub use cycle::{CycleStep, Reading, SensorCycle};
