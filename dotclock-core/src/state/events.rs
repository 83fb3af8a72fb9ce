//! Events that drive the UI state machine

/// Button gestures, derived from the debounced buttons once per pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiEvent {
    /// Set button held past the long-press threshold
    LongPressSet,
    /// Committed release edge of the set button
    SetReleased,
    /// Committed press edge of the adjust button
    AdjustPressed,
    /// Adjust button held past the repeat threshold
    AdjustRepeat,
}

impl UiEvent {
    /// Whether this event steps a value rather than the mode
    pub fn is_adjust(&self) -> bool {
        matches!(self, UiEvent::AdjustPressed | UiEvent::AdjustRepeat)
    }
}
