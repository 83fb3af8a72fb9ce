//! Alternating measurement cycle
//!
//! Driven once per elapsed second. One second issues a measurement command,
//! a later second (after `settle_seconds`) reads its result, converts it and
//! switches the displayed kind. The command issued is always for the kind
//! that is *not* currently displayed, so humidity and temperature
//! alternate: humidity, temperature, humidity, ...

use crate::config::SensorConfig;
use crate::traits::{MeasurementKind, SensorError, SensorPort};

use super::conversion::{humidity_centi, temperature_centi};

/// A converted sensor value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// What was measured
    pub kind: MeasurementKind,
    /// Value in hundredths (unsigned 16-bit word)
    pub value: u16,
}

/// Outcome of one [`SensorCycle::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleStep {
    /// A measurement command was sent and acknowledged
    Started(MeasurementKind),
    /// The command was sent but not acknowledged; the read still follows
    StartUnacknowledged(MeasurementKind),
    /// Waiting for the conversion to settle
    Settling,
    /// A result was read and converted
    Completed(Reading),
    /// Reading the result failed; the same kind is measured again
    ReadFailed(SensorError),
}

/// Measurement cycle state
#[derive(Debug, Clone)]
pub struct SensorCycle {
    settle_seconds: u8,
    /// Kind of the value currently shown
    displayed: MeasurementKind,
    /// A command has been issued and its result not yet read
    pending: bool,
    /// Seconds left before the pending result is read
    settle: u8,
    /// Current derived value (hundredths)
    value: u16,
    /// Last temperature, used to compensate humidity
    temperature: u16,
    /// Last raw words, indexed humidity then temperature
    last_raw: [u16; 2],
}

impl SensorCycle {
    /// Create a cycle that shows a zero temperature until the first result
    pub fn new(config: SensorConfig) -> Self {
        Self {
            settle_seconds: config.settle_seconds.max(1),
            displayed: MeasurementKind::Temperature,
            pending: false,
            settle: 0,
            value: 0,
            temperature: 0,
            last_raw: [0; 2],
        }
    }

    /// Advance the cycle by one elapsed second
    pub fn step<S: SensorPort>(&mut self, sensor: &mut S) -> CycleStep {
        if !self.pending {
            let kind = self.displayed.other();
            self.pending = true;
            self.settle = self.settle_seconds;
            return match sensor.start_measurement(kind) {
                Ok(()) => CycleStep::Started(kind),
                Err(SensorError::NoAcknowledge) => CycleStep::StartUnacknowledged(kind),
            };
        }

        self.settle = self.settle.saturating_sub(1);
        if self.settle > 0 {
            return CycleStep::Settling;
        }

        self.pending = false;
        let raw = match sensor.read_raw() {
            Ok(raw) => raw,
            Err(e) => return CycleStep::ReadFailed(e),
        };

        let kind = self.displayed.other();
        self.last_raw[Self::raw_index(kind)] = raw;
        self.value = match kind {
            MeasurementKind::Temperature => {
                self.temperature = temperature_centi(raw);
                self.temperature
            }
            MeasurementKind::Humidity => humidity_centi(self.temperature, raw),
        };
        self.displayed = kind;

        CycleStep::Completed(self.reading())
    }

    /// The value currently shown
    pub fn reading(&self) -> Reading {
        Reading {
            kind: self.displayed,
            value: self.value,
        }
    }

    /// Kind of the value currently shown
    pub fn displayed(&self) -> MeasurementKind {
        self.displayed
    }

    /// Whether a command is waiting for its result
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Last raw word received for `kind`
    pub fn last_raw(&self, kind: MeasurementKind) -> u16 {
        self.last_raw[Self::raw_index(kind)]
    }

    fn raw_index(kind: MeasurementKind) -> usize {
        match kind {
            MeasurementKind::Humidity => 0,
            MeasurementKind::Temperature => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sensor fake answering from a fixed raw word per kind
    struct FakeSensor {
        humidity: u16,
        temperature: u16,
        last_command: Option<MeasurementKind>,
        commands: usize,
        reads: usize,
        acknowledge: bool,
    }

    impl FakeSensor {
        fn new(humidity: u16, temperature: u16) -> Self {
            Self {
                humidity,
                temperature,
                last_command: None,
                commands: 0,
                reads: 0,
                acknowledge: true,
            }
        }
    }

    impl SensorPort for FakeSensor {
        fn start_measurement(&mut self, kind: MeasurementKind) -> Result<(), SensorError> {
            self.last_command = Some(kind);
            self.commands += 1;
            if self.acknowledge {
                Ok(())
            } else {
                Err(SensorError::NoAcknowledge)
            }
        }

        fn read_raw(&mut self) -> Result<u16, SensorError> {
            self.reads += 1;
            match self.last_command {
                Some(MeasurementKind::Humidity) => Ok(self.humidity),
                Some(MeasurementKind::Temperature) => Ok(self.temperature),
                None => Err(SensorError::NoAcknowledge),
            }
        }
    }

    #[test]
    fn test_first_command_is_humidity() {
        let mut cycle = SensorCycle::new(SensorConfig::default());
        let mut sensor = FakeSensor::new(1000, 6460);
        assert_eq!(cycle.reading().kind, MeasurementKind::Temperature);
        assert_eq!(
            cycle.step(&mut sensor),
            CycleStep::Started(MeasurementKind::Humidity)
        );
        assert!(cycle.is_pending());
    }

    #[test]
    fn test_kinds_alternate() {
        let mut cycle = SensorCycle::new(SensorConfig::default());
        let mut sensor = FakeSensor::new(1000, 6460);

        cycle.step(&mut sensor);
        // No temperature yet: compensated against 0.00 C
        assert_eq!(
            cycle.step(&mut sensor),
            CycleStep::Completed(Reading {
                kind: MeasurementKind::Humidity,
                value: 3081,
            })
        );

        assert_eq!(
            cycle.step(&mut sensor),
            CycleStep::Started(MeasurementKind::Temperature)
        );
        assert_eq!(
            cycle.step(&mut sensor),
            CycleStep::Completed(Reading {
                kind: MeasurementKind::Temperature,
                value: 2500,
            })
        );

        cycle.step(&mut sensor);
        assert_eq!(
            cycle.step(&mut sensor),
            CycleStep::Completed(Reading {
                kind: MeasurementKind::Humidity,
                value: 3306,
            })
        );
        assert_eq!(cycle.last_raw(MeasurementKind::Temperature), 6460);
        assert_eq!(cycle.last_raw(MeasurementKind::Humidity), 1000);
    }

    #[test]
    fn test_settle_delays_read() {
        let config = SensorConfig {
            settle_seconds: 3,
            ..SensorConfig::default()
        };
        let mut cycle = SensorCycle::new(config);
        let mut sensor = FakeSensor::new(1000, 6460);

        cycle.step(&mut sensor);
        assert_eq!(cycle.step(&mut sensor), CycleStep::Settling);
        assert_eq!(cycle.step(&mut sensor), CycleStep::Settling);
        assert_eq!(sensor.reads, 0);
        assert!(matches!(cycle.step(&mut sensor), CycleStep::Completed(_)));
        assert_eq!(sensor.reads, 1);
    }

    #[test]
    fn test_missing_ack_still_reads() {
        let mut cycle = SensorCycle::new(SensorConfig::default());
        let mut sensor = FakeSensor::new(1000, 6460);
        sensor.acknowledge = false;

        assert_eq!(
            cycle.step(&mut sensor),
            CycleStep::StartUnacknowledged(MeasurementKind::Humidity)
        );
        assert!(cycle.is_pending());
        assert!(matches!(cycle.step(&mut sensor), CycleStep::Completed(_)));
    }

    #[test]
    fn test_read_failure_retries_same_kind() {
        let mut cycle = SensorCycle::new(SensorConfig::default());
        let mut sensor = FakeSensor::new(1000, 6460);

        cycle.pending = true;
        cycle.settle = 1;
        assert_eq!(
            cycle.step(&mut sensor),
            CycleStep::ReadFailed(SensorError::NoAcknowledge)
        );
        assert_eq!(cycle.displayed(), MeasurementKind::Temperature);
        assert_eq!(
            cycle.step(&mut sensor),
            CycleStep::Started(MeasurementKind::Humidity)
        );
        assert_eq!(sensor.commands, 1);
    }
}
