//! UI state machine
//!
//! The clock is either showing the time or having one of its fields set.
//! Transitions are explicit, finite and deterministic; side effects
//! (incrementing fields, brightness, panel commands) belong to the
//! [`crate::Controller`].

pub mod events;
pub mod machine;

pub use events::UiEvent;
pub use machine::UiMode;
