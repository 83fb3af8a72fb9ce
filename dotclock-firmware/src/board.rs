//! Concrete peripheral types for the RP2040 board

use dotclock_drivers::display::Ht1632;
use dotclock_drivers::input::ButtonPins;
use dotclock_drivers::sensor::Sht11;
use dotclock_drivers::shift::BitBangShifter;
use dotclock_hal_rp2040::{RpInput, RpOpenDrain, RpOutput};
use embassy_time::Delay;

/// Display write strobe half period in nanoseconds
pub const DISPLAY_HALF_PERIOD_NS: u32 = 500;

pub type DisplayShifter = BitBangShifter<RpOutput<'static>, RpOutput<'static>, Delay>;
pub type Display = Ht1632<DisplayShifter, RpOutput<'static>>;
pub type Sensor = Sht11<RpOpenDrain<'static>, RpOutput<'static>, Delay>;
pub type Buttons = ButtonPins<RpInput<'static>, RpInput<'static>>;

/// Everything the main loop drives
pub struct Board {
    pub display: Display,
    pub sensor: Sensor,
    pub buttons: Buttons,
}
