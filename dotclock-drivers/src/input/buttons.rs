//! Push buttons on two input pins

use dotclock_core::input::ButtonMask;
use dotclock_core::traits::ButtonInput;
use dotclock_hal::{InputPin, Level};

/// Set and adjust buttons
///
/// `active` is the level a pressed button reads: `High` with pull-down
/// resistors, `Low` with pull-ups.
pub struct ButtonPins<SET, ADJ> {
    set: SET,
    adjust: ADJ,
    active: Level,
}

impl<SET: InputPin, ADJ: InputPin> ButtonPins<SET, ADJ> {
    /// Create a sampler for buttons that read `active` when pressed
    pub fn new(set: SET, adjust: ADJ, active: Level) -> Self {
        Self {
            set,
            adjust,
            active,
        }
    }
}

impl<SET: InputPin, ADJ: InputPin> ButtonInput for ButtonPins<SET, ADJ> {
    fn sample(&mut self) -> ButtonMask {
        ButtonMask::from_levels(
            self.set.read_level() == self.active,
            self.adjust.read_level() == self.active,
        )
    }
}
