//! GPIO wrappers
//!
//! Thin newtypes over `embassy-rp` pin drivers so they can implement the
//! `dotclock-hal` traits.

use dotclock_hal::{InputPin, Level, OpenDrainPin, OutputPin};
use embassy_rp::gpio::{self, Flex, Input, Output, Pin, Pull};
use embassy_rp::Peri;

fn to_rp(level: Level) -> gpio::Level {
    match level {
        Level::Low => gpio::Level::Low,
        Level::High => gpio::Level::High,
    }
}

/// Push-pull output
pub struct RpOutput<'d>(Output<'d>);

impl<'d> RpOutput<'d> {
    /// Configure `pin` as an output at `initial` level
    pub fn new(pin: Peri<'d, impl Pin>, initial: Level) -> Self {
        Self(Output::new(pin, to_rp(initial)))
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Input with optional pull resistor
pub struct RpInput<'d>(Input<'d>);

impl<'d> RpInput<'d> {
    /// Configure `pin` as an input with `pull`
    pub fn new(pin: Peri<'d, impl Pin>, pull: Pull) -> Self {
        Self(Input::new(pin, pull))
    }
}

impl InputPin for RpInput<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// Open-drain line emulated by switching direction
///
/// The output latch is held low; releasing turns the pin into an input so
/// the pull-up raises the line, driving turns the output buffer on.
pub struct RpOpenDrain<'d>(Flex<'d>);

impl<'d> RpOpenDrain<'d> {
    /// Configure `pin` released, with the internal pull-up if `pull_up`
    ///
    /// Boards with an external pull-up pass `false`.
    pub fn new(pin: Peri<'d, impl Pin>, pull_up: bool) -> Self {
        let mut flex = Flex::new(pin);
        flex.set_pull(if pull_up { Pull::Up } else { Pull::None });
        flex.set_low();
        flex.set_as_input();
        Self(flex)
    }
}

impl InputPin for RpOpenDrain<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

impl OpenDrainPin for RpOpenDrain<'_> {
    fn release(&mut self) {
        self.0.set_as_input();
    }

    fn drive_low(&mut self) {
        self.0.set_as_output();
    }
}
