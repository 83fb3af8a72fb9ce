//! Clock task - the main loop
//!
//! Sleeps until the tick task signals, then runs one controller pass and
//! logs what happened.

use defmt::*;
use dotclock_core::controller::Event;
use dotclock_core::Controller;

use crate::board::Board;
use crate::channels::{TICKS, WAKE};

#[embassy_executor::task]
pub async fn clock_task(mut controller: Controller, mut board: Board) {
    info!("Clock task started");

    loop {
        WAKE.wait().await;

        let events = controller.poll(
            &TICKS,
            &mut board.buttons,
            &mut board.sensor,
            &mut board.display,
        );

        for event in events {
            log_event(event);
        }
    }
}

fn log_event(event: Event) {
    match event {
        Event::ModeChanged { from, to } => info!("Mode {:?} -> {:?}", from, to),
        Event::TimeSet(time) => info!("Time set to {:?}", time),
        Event::BrightnessChanged(level) => info!("Brightness {}", level),
        Event::Reading(reading) => debug!("Reading {:?}", reading),
        Event::SensorFault(e) => warn!("Sensor fault: {:?}", e),
        Event::DisplayFault(e) => warn!("Display fault: {:?}", e),
    }
}
