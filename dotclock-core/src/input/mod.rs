//! Button handling
//!
//! Raw samples are debounced into a committed state with one-pass edge
//! flags and per-button hold counters for long-press and auto-repeat.

pub mod buttons;
pub mod debounce;

pub use buttons::{Button, ButtonMask};
pub use debounce::Debouncer;
