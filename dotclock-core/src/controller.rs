//! Main-loop context
//!
//! [`Controller`] owns all state the main loop mutates: clock fields,
//! buttons, UI mode, blink flags, the sensor cycle and the refresh flag.
//! Peripherals are passed in on every [`Controller::poll`], so the same
//! controller runs against real drivers on the board and against fakes in
//! tests.
//!
//! One poll is one main-loop pass:
//! 1. Forget the previous pass's button edges
//! 2. Drain pending seconds: advance the time and step the sensor cycle
//! 3. Sample the buttons if the tick phase moved
//! 4. Run the UI state machine
//! 5. Redraw the panel if anything visible changed

use heapless::Vec;

use crate::clock::{ClockTime, TickEngine};
use crate::config::{ClockConfig, MAX_BRIGHTNESS};
use crate::display::{render, BlinkMask, Field, Frame};
use crate::input::{Button, Debouncer};
use crate::sensor::{CycleStep, Reading, SensorCycle};
use crate::state::{UiEvent, UiMode};
use crate::traits::{ButtonInput, DisplayError, MatrixDisplay, SensorError, SensorPort};

/// Maximum events reported by one pass
pub const MAX_EVENTS: usize = 8;

/// Events reported by one pass
pub type Events = Vec<Event, MAX_EVENTS>;

/// Something worth reporting that happened during a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// UI mode changed
    ModeChanged {
        /// Previous mode
        from: UiMode,
        /// New mode
        to: UiMode,
    },
    /// The time was committed by leaving set mode
    TimeSet(ClockTime),
    /// Panel brightness changed
    BrightnessChanged(u8),
    /// A fresh sensor value is shown
    Reading(Reading),
    /// The sensor misbehaved; the cycle carries on
    SensorFault(SensorError),
    /// A display transfer failed
    DisplayFault(DisplayError),
}

/// Flags that decide what the end of a pass does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayFlags {
    /// Something visible changed since the last redraw
    pub need_refresh: bool,
}

/// Main-loop state
pub struct Controller {
    config: ClockConfig,
    time: ClockTime,
    buttons: Debouncer,
    mode: UiMode,
    blink: BlinkMask,
    sensor: SensorCycle,
    flags: DisplayFlags,
    brightness: u8,
    /// Tick phase at the last button sample
    last_phase: u8,
}

impl Controller {
    /// Create a controller at midnight, in normal mode
    ///
    /// The first pass redraws the panel.
    pub fn new(config: ClockConfig) -> Self {
        Self {
            time: ClockTime::MIDNIGHT,
            buttons: Debouncer::new(config.buttons),
            mode: UiMode::Normal,
            blink: BlinkMask::NONE,
            sensor: SensorCycle::new(config.sensor),
            flags: DisplayFlags { need_refresh: true },
            brightness: config.display.brightness.min(MAX_BRIGHTNESS),
            last_phase: 0,
            config,
        }
    }

    /// Run one main-loop pass
    pub fn poll<B, S, D>(
        &mut self,
        ticks: &TickEngine,
        buttons: &mut B,
        sensor: &mut S,
        display: &mut D,
    ) -> Events
    where
        B: ButtonInput,
        S: SensorPort,
        D: MatrixDisplay,
    {
        let mut events = Events::new();

        self.buttons.clear_edges();
        self.drain_seconds(ticks, sensor, &mut events);
        self.sample_buttons(ticks, buttons);
        self.update_ui(display, &mut events);
        if self.flags.need_refresh {
            self.refresh(display, &mut events);
        }

        events
    }

    /// Process every pending second, one at a time
    pub fn drain_seconds<S: SensorPort>(
        &mut self,
        ticks: &TickEngine,
        sensor: &mut S,
        events: &mut Events,
    ) {
        while ticks.take_second() {
            self.time.tick_second();

            match self.sensor.step(sensor) {
                CycleStep::Started(_) | CycleStep::Settling => {}
                CycleStep::StartUnacknowledged(_) => {
                    push(events, Event::SensorFault(SensorError::NoAcknowledge))
                }
                CycleStep::Completed(reading) => push(events, Event::Reading(reading)),
                CycleStep::ReadFailed(e) => push(events, Event::SensorFault(e)),
            }

            self.flags.need_refresh = true;
        }
    }

    /// Feed the debouncer at most once per sub-tick
    pub fn sample_buttons<B: ButtonInput>(&mut self, ticks: &TickEngine, buttons: &mut B) {
        let phase = ticks.phase();
        if phase != self.last_phase {
            self.last_phase = phase;
            self.buttons.sample(buttons.sample());
        }
    }

    /// Turn this pass's button state into a gesture for the current mode
    fn ui_event(&self) -> Option<UiEvent> {
        let b = &self.buttons;
        let thresholds = &self.config.buttons;

        if self.mode.is_setting() {
            if b.changed(Button::Set) {
                b.just_released(Button::Set).then_some(UiEvent::SetReleased)
            } else if b.changed(Button::Adjust) {
                b.just_pressed(Button::Adjust).then_some(UiEvent::AdjustPressed)
            } else if b.is_pressed(Button::Adjust)
                && b.hold(Button::Adjust) < thresholds.repeat_threshold
            {
                Some(UiEvent::AdjustRepeat)
            } else {
                None
            }
        } else if b.changed(Button::Adjust) {
            b.just_pressed(Button::Adjust).then_some(UiEvent::AdjustPressed)
        } else if b.is_pressed(Button::Set) && b.hold(Button::Set) < thresholds.long_press_threshold
        {
            Some(UiEvent::LongPressSet)
        } else {
            None
        }
    }

    /// Run the UI state machine and its side effects
    pub fn update_ui<D: MatrixDisplay>(&mut self, display: &mut D, events: &mut Events) {
        let from = self.mode;

        match (from, self.ui_event()) {
            (UiMode::Normal, Some(UiEvent::AdjustPressed)) => {
                self.brightness = if self.brightness >= MAX_BRIGHTNESS {
                    0
                } else {
                    self.brightness + 1
                };
                if let Err(e) = display.set_brightness(self.brightness) {
                    push(events, Event::DisplayFault(e));
                }
                push(events, Event::BrightnessChanged(self.brightness));
            }
            (UiMode::Normal, Some(event @ UiEvent::LongPressSet)) => {
                self.mode = from.transition(event);
                if let Err(e) = display.set_panel_blink(false) {
                    push(events, Event::DisplayFault(e));
                }
                push(events, Event::ModeChanged { from, to: self.mode });
            }
            (_, Some(event @ UiEvent::SetReleased)) => {
                self.mode = from.transition(event);
                if let Some(field) = from.field() {
                    self.blink.clear(field);
                }
                self.flags.need_refresh = true;
                push(events, Event::ModeChanged { from, to: self.mode });
                if self.mode == UiMode::Normal {
                    push(events, Event::TimeSet(self.time));
                }
            }
            (_, Some(event)) if event.is_adjust() => {
                match from.field() {
                    Some(Field::Hour) => self.time.increment_hour(),
                    Some(Field::Minute) => self.time.increment_minute(),
                    None => return,
                }
                if event == UiEvent::AdjustRepeat {
                    self.buttons
                        .reload_hold(Button::Adjust, self.config.buttons.repeat_reload);
                }
                self.flags.need_refresh = true;
            }
            _ => {}
        }

        if self.mode == from {
            if let Some(field) = from.field() {
                let phase_bit = self.config.tick.blink_phase_bit;
                if self.blink.update(field, self.last_phase, phase_bit) {
                    self.flags.need_refresh = true;
                }
            }
        }
    }

    /// Redraw the whole panel and clear the refresh flag
    pub fn refresh<D: MatrixDisplay>(&mut self, display: &mut D, events: &mut Events) {
        if let Err(e) = render(display, &self.frame()) {
            push(events, Event::DisplayFault(e));
        }
        self.flags.need_refresh = false;
    }

    /// Snapshot of what the panel shows
    pub fn frame(&self) -> Frame {
        Frame {
            time: self.time,
            reading: self.sensor.reading(),
            blink: self.blink,
        }
    }

    /// Current time of day
    pub fn time(&self) -> ClockTime {
        self.time
    }

    /// Replace the time of day and schedule a redraw
    pub fn set_time(&mut self, time: ClockTime) {
        self.time = time;
        self.flags.need_refresh = true;
    }

    /// Current UI mode
    pub fn mode(&self) -> UiMode {
        self.mode
    }

    /// Current brightness level (0-15)
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Fields currently blanked
    pub fn blink(&self) -> BlinkMask {
        self.blink
    }

    /// Sensor value currently shown
    pub fn reading(&self) -> Reading {
        self.sensor.reading()
    }

    /// Refresh flags
    pub fn flags(&self) -> DisplayFlags {
        self.flags
    }

    /// Debounced buttons
    pub fn buttons(&self) -> &Debouncer {
        &self.buttons
    }

    /// Active configuration
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }
}

/// Record an event; a full pass drops the rest
fn push(events: &mut Events, event: Event) {
    let _ = events.push(event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ButtonMask;
    use crate::traits::MeasurementKind;

    struct NoSensor;

    impl SensorPort for NoSensor {
        fn start_measurement(&mut self, _kind: MeasurementKind) -> Result<(), SensorError> {
            Ok(())
        }

        fn read_raw(&mut self) -> Result<u16, SensorError> {
            Ok(6460)
        }
    }

    #[derive(Default)]
    struct CountingDisplay {
        writes: usize,
        brightness: Option<u8>,
        panel_blink: Option<bool>,
        broken: bool,
    }

    impl MatrixDisplay for CountingDisplay {
        fn write_byte(&mut self, _address: u8, _data: u8) -> Result<(), DisplayError> {
            if self.broken {
                return Err(DisplayError::Timeout);
            }
            self.writes += 1;
            Ok(())
        }

        fn set_brightness(&mut self, level: u8) -> Result<(), DisplayError> {
            self.brightness = Some(level);
            Ok(())
        }

        fn set_panel_blink(&mut self, enabled: bool) -> Result<(), DisplayError> {
            self.panel_blink = Some(enabled);
            Ok(())
        }
    }

    struct Held(ButtonMask);

    impl ButtonInput for Held {
        fn sample(&mut self) -> ButtonMask {
            self.0
        }
    }

    #[test]
    fn test_first_pass_draws() {
        let mut ctl = Controller::new(ClockConfig::default());
        let ticks = TickEngine::default();
        let mut display = CountingDisplay::default();
        ctl.poll(&ticks, &mut Held(ButtonMask::NONE), &mut NoSensor, &mut display);
        assert_eq!(display.writes, 37);
        assert!(!ctl.flags().need_refresh);

        ctl.poll(&ticks, &mut Held(ButtonMask::NONE), &mut NoSensor, &mut display);
        assert_eq!(display.writes, 37);
    }

    #[test]
    fn test_each_second_counts() {
        let mut ctl = Controller::new(ClockConfig::default());
        let ticks = TickEngine::new(2);
        for _ in 0..6 {
            ticks.on_tick();
        }
        let mut display = CountingDisplay::default();
        let events = ctl.poll(&ticks, &mut Held(ButtonMask::NONE), &mut NoSensor, &mut display);
        assert_eq!(ctl.time(), ClockTime::new(0x00, 0x00, 0x03));
        // humidity command, humidity read, temperature command
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_display_fault_is_reported() {
        let mut ctl = Controller::new(ClockConfig::default());
        let ticks = TickEngine::default();
        let mut display = CountingDisplay {
            broken: true,
            ..CountingDisplay::default()
        };
        let events = ctl.poll(&ticks, &mut Held(ButtonMask::NONE), &mut NoSensor, &mut display);
        assert_eq!(events.as_slice(), &[Event::DisplayFault(DisplayError::Timeout)]);
        assert!(!ctl.flags().need_refresh);
    }

    #[test]
    fn test_buttons_sampled_once_per_phase() {
        let mut ctl = Controller::new(ClockConfig::default());
        let ticks = TickEngine::default();
        let mut display = CountingDisplay::default();
        let mut pressed = Held(ButtonMask::only(Button::Adjust));

        ticks.on_tick();
        for _ in 0..10 {
            ctl.poll(&ticks, &mut pressed, &mut NoSensor, &mut display);
        }
        assert!(!ctl.buttons().is_pressed(Button::Adjust));
        for _ in 0..4 {
            ticks.on_tick();
            ctl.poll(&ticks, &mut pressed, &mut NoSensor, &mut display);
        }
        assert!(ctl.buttons().is_pressed(Button::Adjust));
        assert_eq!(ctl.brightness(), 8);
        assert_eq!(display.brightness, Some(8));
    }

    #[test]
    fn test_set_time() {
        let mut ctl = Controller::new(ClockConfig::default());
        ctl.refresh(&mut CountingDisplay::default(), &mut Events::new());
        ctl.set_time(ClockTime::new(0x12, 0x34, 0x56));
        assert_eq!(ctl.time(), ClockTime::new(0x12, 0x34, 0x56));
        assert!(ctl.flags().need_refresh);
    }
}
