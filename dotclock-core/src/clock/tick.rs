//! Interrupt-driven tick engine
//!
//! The timer interrupt calls [`TickEngine::on_tick`] at a fixed sub-second
//! rate. Every `sub_ticks_per_second` calls one second becomes pending. The
//! main loop drains pending seconds one at a time with
//! [`TickEngine::take_second`], so a slow pass never coalesces seconds.
//!
//! The engine is the only state shared between interrupt and main loop. All
//! fields are single-byte atomics; on cores without atomic read-modify-write
//! (Cortex-M0+) `portable-atomic` falls back to a critical section.

use portable_atomic::{AtomicU8, Ordering};

/// Default sub-tick rate (32768 Hz crystal / 8 / 32)
pub const DEFAULT_SUB_TICKS_PER_SECOND: u8 = 128;

/// Shared counters between the tick interrupt and the main loop
pub struct TickEngine {
    /// Sub-ticks remaining in the current second (free-running phase)
    sub_ticks: AtomicU8,
    /// Whole seconds elapsed but not yet processed by the main loop
    pending_seconds: AtomicU8,
    /// Sub-ticks per second
    reload: AtomicU8,
}

impl TickEngine {
    /// Create an engine for the given sub-tick rate
    ///
    /// `const` so the engine can live in a `static`.
    pub const fn new(sub_ticks_per_second: u8) -> Self {
        Self {
            sub_ticks: AtomicU8::new(sub_ticks_per_second),
            pending_seconds: AtomicU8::new(0),
            reload: AtomicU8::new(sub_ticks_per_second),
        }
    }

    /// Change the sub-tick rate and restart the current second
    ///
    /// Intended for start-up, before the tick source is running.
    pub fn configure(&self, sub_ticks_per_second: u8) {
        let rate = sub_ticks_per_second.max(1);
        self.reload.store(rate, Ordering::Relaxed);
        self.sub_ticks.store(rate, Ordering::Relaxed);
        self.pending_seconds.store(0, Ordering::Release);
    }

    /// Interrupt body: count one sub-tick
    ///
    /// Counter arithmetic only. The caller is responsible for waking the
    /// main loop afterwards.
    pub fn on_tick(&self) {
        let remaining = self.sub_ticks.load(Ordering::Relaxed).wrapping_sub(1);
        if remaining == 0 {
            self.sub_ticks
                .store(self.reload.load(Ordering::Relaxed), Ordering::Relaxed);
            self.pending_seconds.fetch_add(1, Ordering::Release);
        } else {
            self.sub_ticks.store(remaining, Ordering::Relaxed);
        }
    }

    /// Take one pending second, if any
    pub fn take_second(&self) -> bool {
        self.pending_seconds
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |pending| {
                pending.checked_sub(1)
            })
            .is_ok()
    }

    /// Seconds waiting to be processed
    pub fn pending_seconds(&self) -> u8 {
        self.pending_seconds.load(Ordering::Acquire)
    }

    /// Current sub-tick counter, used as the blink and sampling phase
    pub fn phase(&self) -> u8 {
        self.sub_ticks.load(Ordering::Relaxed)
    }

    /// Sub-ticks per second
    pub fn rate(&self) -> u8 {
        self.reload.load(Ordering::Relaxed)
    }
}

/// Timer-tick offset of sub-tick `index` from the start of counting
///
/// Deadlines are computed from the start instead of adding a rounded period
/// each time, so a rate that does not divide `timer_hz` never drifts:
/// sub-tick `k * sub_ticks_per_second` lands exactly on `k` seconds.
pub const fn sub_tick_deadline(index: u64, sub_ticks_per_second: u8, timer_hz: u64) -> u64 {
    let rate = if sub_ticks_per_second == 0 {
        1
    } else {
        sub_ticks_per_second as u128
    };
    (index as u128 * timer_hz as u128 / rate) as u64
}

impl Default for TickEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SUB_TICKS_PER_SECOND)
    }
}
