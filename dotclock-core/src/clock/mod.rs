//! Timekeeping
//!
//! BCD clock fields and the tick engine that turns the periodic timer
//! interrupt into whole-second events.

pub mod bcd;
pub mod tick;
pub mod time;

pub use bcd::{bcd_increment, increment_wrapping};
pub use tick::{sub_tick_deadline, TickEngine};
pub use time::{ClockTime, HOUR_BOUND, MINUTE_BOUND, SECOND_BOUND};
