//! Embassy async tasks
//!
//! The tick task plays the timer interrupt; the clock task is the main
//! loop. They share only the tick counters and a wake signal.

pub mod clock;
pub mod tick;

pub use clock::clock_task;
pub use tick::tick_task;
