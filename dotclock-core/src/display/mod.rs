//! Panel content
//!
//! The glyph table, the wiring of panel coordinates to controller memory,
//! field blink flags and the compositor that draws a whole frame.

pub mod blink;
pub mod compositor;
pub mod font;
pub mod layout;

pub use blink::{BlinkMask, Field};
pub use compositor::{render, Frame};
pub use font::Glyph;
pub use layout::{pixel_address, PANEL_ROWS, PANEL_WIDTH};
