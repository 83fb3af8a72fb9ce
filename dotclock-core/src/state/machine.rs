//! UI mode definition

use super::events::UiEvent;
use crate::display::Field;

/// UI modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiMode {
    /// Showing time and sensor reading; adjust changes brightness
    #[default]
    Normal,
    /// Hour field selected and blinking
    SetHour,
    /// Minute field selected and blinking
    SetMinute,
}

impl UiMode {
    /// Field being edited in this mode
    pub fn field(&self) -> Option<Field> {
        match self {
            UiMode::Normal => None,
            UiMode::SetHour => Some(Field::Hour),
            UiMode::SetMinute => Some(Field::Minute),
        }
    }

    /// Check if the time is being set
    pub fn is_setting(&self) -> bool {
        self.field().is_some()
    }

    /// Process an event and return the next mode
    pub fn transition(self, event: UiEvent) -> Self {
        use UiEvent::*;
        use UiMode::*;

        match (self, event) {
            (Normal, LongPressSet) => SetHour,
            (SetHour, SetReleased) => SetMinute,
            (SetMinute, SetReleased) => Normal,

            // Adjust events change values, never the mode
            _ => self,
        }
    }
}
