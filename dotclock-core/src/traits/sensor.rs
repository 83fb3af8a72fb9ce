//! Humidity/temperature sensor trait

/// Errors that can occur with the sensor link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// The sensor did not pull the data line low after a command byte
    NoAcknowledge,
}

/// The two quantities the sensor measures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MeasurementKind {
    /// Relative humidity
    Humidity,
    /// Temperature
    Temperature,
}

impl MeasurementKind {
    /// The other kind; the measurement cycle alternates between them
    pub fn other(self) -> Self {
        match self {
            MeasurementKind::Humidity => MeasurementKind::Temperature,
            MeasurementKind::Temperature => MeasurementKind::Humidity,
        }
    }
}

/// Trait for a two-step (command, then read) measuring sensor
pub trait SensorPort {
    /// Issue the measurement command for `kind`
    ///
    /// The command has been sent even when this returns an error; the
    /// error only reports that the acknowledgment was missing.
    fn start_measurement(&mut self, kind: MeasurementKind) -> Result<(), SensorError>;

    /// Read the 16-bit raw result of the last measurement
    fn read_raw(&mut self) -> Result<u16, SensorError>;
}

impl<T: SensorPort + ?Sized> SensorPort for &mut T {
    fn start_measurement(&mut self, kind: MeasurementKind) -> Result<(), SensorError> {
        (**self).start_measurement(kind)
    }

    fn read_raw(&mut self) -> Result<u16, SensorError> {
        (**self).read_raw()
    }
}
