//! Button input trait

use crate::input::ButtonMask;

/// Source of raw (undebounced) button samples
pub trait ButtonInput {
    /// Sample both buttons; a set bit means pressed
    fn sample(&mut self) -> ButtonMask;
}
