//! State shared between tasks

use dotclock_core::clock::tick::DEFAULT_SUB_TICKS_PER_SECOND;
use dotclock_core::clock::TickEngine;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Tick counters, written by the tick task and drained by the clock task
pub static TICKS: TickEngine = TickEngine::new(DEFAULT_SUB_TICKS_PER_SECOND);

/// Raised after every tick so the clock task runs one pass
pub static WAKE: Signal<CriticalSectionRawMutex, ()> = Signal::new();
