//! Front-panel inputs

pub mod buttons;

pub use buttons::ButtonPins;
