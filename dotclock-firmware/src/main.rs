//! Dotclock - LED Dot-Matrix Desk Clock Firmware
//!
//! Main firmware binary for RP2040-based clock boards. A fixed-rate tick
//! task stands in for the crystal timer interrupt; the clock task runs the
//! main loop, woken after every tick.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::Pull;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use dotclock_core::Controller;
use dotclock_drivers::display::Ht1632;
use dotclock_drivers::input::ButtonPins;
use dotclock_drivers::sensor::Sht11;
use dotclock_drivers::shift::BitBangShifter;
use dotclock_hal_rp2040::{Level, RpInput, RpOpenDrain, RpOutput};

use crate::board::{Board, DISPLAY_HALF_PERIOD_NS};
use crate::channels::TICKS;
use crate::config::load_config;

/// Embedded configuration (compiled into firmware)
/// Edit clock.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../clock.toml");

mod board;
mod channels;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Dotclock firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config(EMBEDDED_CONFIG);
    let rate = config.tick.sub_ticks_per_second;
    TICKS.configure(rate);

    // Display: HT1632 write strobe, data and chip select
    let shifter = BitBangShifter::new(
        RpOutput::new(p.PIN_2, Level::High),
        RpOutput::new(p.PIN_3, Level::Low),
        Delay,
        DISPLAY_HALF_PERIOD_NS,
    );
    let chip_select = RpOutput::new(p.PIN_4, Level::High);
    let mut display = Ht1632::new(shifter, chip_select, &config.display);

    if let Err(e) = display.init(config.display.brightness) {
        warn!("Display init failed: {:?}", e);
    }
    if let Err(e) = display.clear() {
        warn!("Display clear failed: {:?}", e);
    }
    info!("Display initialized");

    // Sensor: two-wire clock and open-drain data with internal pull-up
    let mut sensor = Sht11::new(
        RpOpenDrain::new(p.PIN_7, true),
        RpOutput::new(p.PIN_6, Level::Low),
        Delay,
        &config.sensor,
    );
    sensor.connection_reset();
    info!("Sensor link reset");

    // Buttons pull the line high when pressed
    let buttons = ButtonPins::new(
        RpInput::new(p.PIN_10, Pull::Down),
        RpInput::new(p.PIN_11, Pull::Down),
        Level::High,
    );

    let board = Board {
        display,
        sensor,
        buttons,
    };
    let controller = Controller::new(config);

    info!("Spawning tasks...");

    spawner.spawn(tasks::tick_task(rate)).unwrap();
    spawner.spawn(tasks::clock_task(controller, board)).unwrap();

    info!("All tasks spawned, firmware running");
}
