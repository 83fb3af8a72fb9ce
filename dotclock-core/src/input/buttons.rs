//! Button identities and bit masks

/// The two front-panel buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Mode button: long press enters set mode, release steps through fields
    Set,
    /// Value button: increments the selected field or the brightness
    Adjust,
}

impl Button {
    /// Both buttons, in hold-counter order
    pub const ALL: [Button; 2] = [Button::Set, Button::Adjust];

    /// Bit of this button in a [`ButtonMask`]
    pub const fn bit(self) -> u8 {
        match self {
            Button::Set => 0x01,
            Button::Adjust => 0x02,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Button::Set => 0,
            Button::Adjust => 1,
        }
    }
}

/// Set of buttons, one bit per [`Button`]
///
/// Used both for levels (bit set = pressed) and for edges (bit set =
/// changed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonMask(u8);

impl ButtonMask {
    /// No buttons
    pub const NONE: Self = Self(0);

    /// Build a mask from the pressed state of each button
    pub const fn from_levels(set: bool, adjust: bool) -> Self {
        let mut bits = 0;
        if set {
            bits |= Button::Set.bit();
        }
        if adjust {
            bits |= Button::Adjust.bit();
        }
        Self(bits)
    }

    /// Mask with a single button
    pub const fn only(button: Button) -> Self {
        Self(button.bit())
    }

    /// Check whether `button` is in the mask
    pub const fn contains(self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    /// Buttons that differ between two masks
    pub const fn changed(self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }

    /// True when no button is in the mask
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Raw bits
    pub const fn bits(self) -> u8 {
        self.0
    }
}
