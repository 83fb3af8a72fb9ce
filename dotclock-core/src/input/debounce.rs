//! Sample-count debouncer with hold counters
//!
//! Sampled once per sub-tick. A raw sample that differs from the previous
//! raw sample restarts the stability count; once the count has run out on
//! identical samples the sample is committed and the edge mask becomes
//! `old XOR new`. While no debounce is in progress every pressed button's
//! hold counter counts down towards zero, which the UI reads as "held long
//! enough".

use super::buttons::{Button, ButtonMask};
use crate::config::ButtonConfig;

/// Debounced state of both buttons
#[derive(Debug, Clone)]
pub struct Debouncer {
    config: ButtonConfig,
    /// Stable samples still required before committing
    debounce: u8,
    /// Last raw sample, the stability baseline
    previous_raw: ButtonMask,
    /// Committed (debounced) levels
    state: ButtonMask,
    /// Buttons whose committed level changed this pass
    edges: ButtonMask,
    /// Hold counters, indexed by [`Button::index`]
    hold: [u8; 2],
}

impl Debouncer {
    /// Create a debouncer with both buttons released
    pub fn new(config: ButtonConfig) -> Self {
        Self {
            hold: [config.hold_max; 2],
            config,
            debounce: 0,
            previous_raw: ButtonMask::NONE,
            state: ButtonMask::NONE,
            edges: ButtonMask::NONE,
        }
    }

    /// Feed one raw sample
    pub fn sample(&mut self, raw: ButtonMask) {
        if raw != self.previous_raw {
            self.debounce = self.config.debounce_samples;
            self.previous_raw = raw;
            return;
        }

        if self.debounce > 0 {
            self.debounce -= 1;
            if self.debounce == 0 {
                self.commit(raw);
            }
            return;
        }

        for button in Button::ALL {
            let hold = &mut self.hold[button.index()];
            if self.state.contains(button) && *hold > 0 {
                *hold -= 1;
            }
        }
    }

    fn commit(&mut self, raw: ButtonMask) {
        self.edges = self.state.changed(raw);
        self.state = raw;

        for button in Button::ALL {
            if self.edges.contains(button) {
                self.hold[button.index()] = self.config.hold_max;
            }
        }
    }

    /// Forget this pass's edges (called at the start of every pass)
    pub fn clear_edges(&mut self) {
        self.edges = ButtonMask::NONE;
    }

    /// Committed levels
    pub fn state(&self) -> ButtonMask {
        self.state
    }

    /// Edges committed since the last [`Debouncer::clear_edges`]
    pub fn edges(&self) -> ButtonMask {
        self.edges
    }

    /// Debounced pressed state of `button`
    pub fn is_pressed(&self, button: Button) -> bool {
        self.state.contains(button)
    }

    /// Whether `button` changed level this pass
    pub fn changed(&self, button: Button) -> bool {
        self.edges.contains(button)
    }

    /// Committed press of `button` this pass
    pub fn just_pressed(&self, button: Button) -> bool {
        self.changed(button) && self.is_pressed(button)
    }

    /// Committed release of `button` this pass
    pub fn just_released(&self, button: Button) -> bool {
        self.changed(button) && !self.is_pressed(button)
    }

    /// Current hold counter of `button`
    pub fn hold(&self, button: Button) -> u8 {
        self.hold[button.index()]
    }

    /// Reload the hold counter, e.g. to schedule the next auto-repeat
    pub fn reload_hold(&mut self, button: Button, value: u8) {
        self.hold[button.index()] = value;
    }
}
