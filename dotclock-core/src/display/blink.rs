//! Field blink flags

/// A clock field that can blink while it is being set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    /// Hour digits
    Hour,
    /// Minute digits
    Minute,
}

impl Field {
    const fn bit(self) -> u8 {
        match self {
            Field::Hour => 0x01,
            Field::Minute => 0x02,
        }
    }
}

/// Set of fields currently blanked by blinking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkMask(u8);

impl BlinkMask {
    /// Nothing blanked
    pub const NONE: Self = Self(0);

    /// Whether `field` is blanked
    pub const fn is_blanked(self, field: Field) -> bool {
        self.0 & field.bit() != 0
    }

    /// Clear the flag of `field`
    pub fn clear(&mut self, field: Field) {
        self.0 &= !field.bit();
    }

    /// Recompute the flag of `field` from the tick phase
    ///
    /// The flag follows bit `phase_bit` of `phase`, so with bit 4 it toggles
    /// every 16 sub-ticks. Returns `true` if the flag changed.
    pub fn update(&mut self, field: Field, phase: u8, phase_bit: u8) -> bool {
        let old = *self;
        if (phase >> phase_bit) & 0x01 != 0 {
            self.0 |= field.bit();
        } else {
            self.0 &= !field.bit();
        }
        old != *self
    }
}
