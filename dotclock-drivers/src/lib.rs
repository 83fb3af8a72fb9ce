//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in dotclock-core, written against the signal traits of dotclock-hal:
//!
//! - HT1632 dot-matrix LED controller ([`display::Ht1632`])
//! - Bit-banged serial shifter for the controller link ([`shift::BitBangShifter`])
//! - SHT1x humidity/temperature sensor ([`sensor::Sht11`])
//! - Two-button front panel ([`input::ButtonPins`])

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod input;
pub mod sensor;
pub mod shift;
