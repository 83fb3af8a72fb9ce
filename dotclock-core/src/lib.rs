//! Board-agnostic core logic for the matrix clock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Peripheral traits (matrix display, humidity/temperature sensor, buttons)
//! - BCD clock fields and the interrupt-fed tick engine
//! - Button debouncing and hold-repeat counters
//! - UI state machine for setting the time
//! - Sensor measurement cycle and fixed-point conversions
//! - Glyph table, panel addressing and the render compositor
//! - Configuration types and the `clock.toml` parser
//! - The [`controller::Controller`] context that runs one main-loop pass

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod controller;
pub mod display;
pub mod input;
pub mod sensor;
pub mod state;
pub mod traits;

pub use controller::Controller;
