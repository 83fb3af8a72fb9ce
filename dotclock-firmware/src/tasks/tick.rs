//! Sub-second tick source
//!
//! Counts one sub-tick per period and wakes the clock task. The counters
//! carry whole seconds, so a late clock pass never loses time.
//!
//! Every deadline is measured from the task's start instant. 128 Hz does
//! not divide the 1 MHz time driver, so a fixed rounded period would drift.

use defmt::*;
use dotclock_core::clock::sub_tick_deadline;
use embassy_time::{Duration, Instant, Timer, TICK_HZ};

use crate::channels::{TICKS, WAKE};

/// Tick task - advances the tick engine at `rate` Hz
#[embassy_executor::task]
pub async fn tick_task(rate: u8) {
    info!("Tick task started at {} Hz", rate);

    let start = Instant::now();
    let mut index: u64 = 0;

    loop {
        index += 1;
        let offset = sub_tick_deadline(index, rate, TICK_HZ);
        Timer::at(start + Duration::from_ticks(offset)).await;

        TICKS.on_tick();
        WAKE.signal(());
    }
}
