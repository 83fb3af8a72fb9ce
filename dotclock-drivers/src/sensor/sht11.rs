//! SHT1x humidity/temperature sensor
//!
//! Two-wire link with software timing: an open-drain data line and a clock
//! driven by the host. It is not I2C; transfers begin with a
//! "transmission start" sequence instead:
//!
//! ```text
//!        _____         ________
//! DATA:       |_______|
//!            ___     ___
//! SCK:   ___|   |___|   |______
//! ```
//!
//! Bytes go out MSB first. Data changes while the clock is low and is read
//! while it is high. After each byte the receiver acknowledges by pulling
//! data low for a ninth clock pulse.
//!
//! A measurement is a command byte followed, after the conversion time,
//! by two result bytes (MSB first). The CRC byte that would follow is
//! skipped by not acknowledging the second byte.

use dotclock_core::config::SensorConfig;
use dotclock_core::traits::{MeasurementKind, SensorError, SensorPort};
use dotclock_hal::{InputPin, Level, OpenDrainPin, OutputPin};
use embedded_hal::delay::DelayNs;

/// Command bytes
pub mod cmd {
    /// Measure temperature
    pub const MEASURE_TEMPERATURE: u8 = 0x03;
    /// Measure relative humidity
    pub const MEASURE_HUMIDITY: u8 = 0x05;
}

/// Command byte for a measurement kind
pub const fn command_for(kind: MeasurementKind) -> u8 {
    match kind {
        MeasurementKind::Temperature => cmd::MEASURE_TEMPERATURE,
        MeasurementKind::Humidity => cmd::MEASURE_HUMIDITY,
    }
}

/// SHT1x driver
pub struct Sht11<SDA, SCL, D> {
    sda: SDA,
    scl: SCL,
    delay: D,
    half_period_ns: u32,
}

impl<SDA, SCL, D> Sht11<SDA, SCL, D>
where
    SDA: OpenDrainPin,
    SCL: OutputPin,
    D: DelayNs,
{
    /// Create a driver and park the bus (clock low, data released)
    pub fn new(sda: SDA, scl: SCL, delay: D, config: &SensorConfig) -> Self {
        let mut sensor = Self {
            sda,
            scl,
            delay,
            half_period_ns: config.half_period_ns,
        };
        sensor.init();
        sensor
    }

    /// Clock low, data released
    pub fn init(&mut self) {
        self.scl.set_low();
        self.sda.release();
    }

    fn pause(&mut self) {
        self.delay.delay_ns(self.half_period_ns);
    }

    /// Transmission start sequence
    pub fn start(&mut self) {
        self.sda.release();
        self.scl.set_low();
        self.pause();
        self.scl.set_high();
        self.pause();
        self.sda.drive_low();
        self.pause();
        self.scl.set_low();
        self.pause();
        self.scl.set_high();
        self.pause();
        self.sda.release();
        self.pause();
        self.scl.set_low();
    }

    /// Resynchronise the sensor's interface: nine clocks with data
    /// released, then a start sequence
    ///
    /// Needed only if a transfer was cut short.
    pub fn connection_reset(&mut self) {
        self.sda.release();
        self.scl.set_low();
        for _ in 0..9 {
            self.scl.set_high();
            self.pause();
            self.scl.set_low();
        }
        self.start();
    }

    /// Send one byte; returns whether the sensor acknowledged it
    pub fn write_byte(&mut self, byte: u8) -> bool {
        for i in 0..8 {
            OpenDrainPin::set_level(&mut self.sda, Level::from(byte & (0x80 >> i) != 0));
            self.scl.set_high();
            self.pause();
            self.scl.set_low();
        }

        self.sda.release();
        self.scl.set_high();
        self.pause();
        let ack = self.sda.is_low();
        self.scl.set_low();

        ack
    }

    /// Receive one byte, acknowledging it if `ack`
    pub fn read_byte(&mut self, ack: bool) -> u8 {
        let mut byte = 0u8;

        self.sda.release();
        for _ in 0..8 {
            byte <<= 1;
            self.scl.set_high();
            self.pause();
            if self.sda.is_high() {
                byte |= 0x01;
            }
            self.scl.set_low();
        }

        if ack {
            self.sda.drive_low();
        }
        self.scl.set_high();
        self.pause();
        self.scl.set_low();
        self.sda.release();

        byte
    }

    /// Receive a 16-bit result, big-endian, without its CRC
    pub fn read_word(&mut self) -> u16 {
        let high = self.read_byte(true);
        let low = self.read_byte(false);
        u16::from_be_bytes([high, low])
    }

    /// Start sequence plus command byte; returns the acknowledgment
    pub fn command(&mut self, command: u8) -> bool {
        self.start();
        self.write_byte(command)
    }

    /// Release the pins and delay
    pub fn release(self) -> (SDA, SCL, D) {
        (self.sda, self.scl, self.delay)
    }
}

impl<SDA, SCL, D> SensorPort for Sht11<SDA, SCL, D>
where
    SDA: OpenDrainPin,
    SCL: OutputPin,
    D: DelayNs,
{
    fn start_measurement(&mut self, kind: MeasurementKind) -> Result<(), SensorError> {
        if self.command(command_for(kind)) {
            Ok(())
        } else {
            Err(SensorError::NoAcknowledge)
        }
    }

    fn read_raw(&mut self) -> Result<u16, SensorError> {
        Ok(self.read_word())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use heapless::Vec;

    /// Line change made by the host
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Edge {
        Scl(bool),
        Sda(bool),
    }

    /// Simulated bus with a scripted device
    ///
    /// Clock pulses are numbered from zero. The device pulls data low for
    /// the whole of pulse `n` (and the low phase before it) when bit `n`
    /// of `device_pulls` is set.
    struct Bus {
        scl: bool,
        host_low: bool,
        pulses: u32,
        device_pulls: u64,
        /// Data level at each rising clock edge, bit per pulse
        sampled: u64,
        /// Host was driving data low at each rising edge
        host_drove: u64,
        edges: Vec<Edge, 128>,
    }

    impl Bus {
        fn new(device_pulls: u64) -> RefCell<Self> {
            RefCell::new(Self {
                scl: false,
                host_low: false,
                pulses: 0,
                device_pulls,
                sampled: 0,
                host_drove: 0,
                edges: Vec::new(),
            })
        }

        /// Pulse the device is in: the running one while high, the next
        /// one while low
        fn device_low(&self) -> bool {
            let pulse = if self.scl {
                self.pulses - 1
            } else {
                self.pulses
            };
            pulse < 64 && self.device_pulls & (1 << pulse) != 0
        }

        fn sda(&self) -> bool {
            !(self.host_low || self.device_low())
        }

        /// Bits sampled over pulses `first..first + 8`, MSB first
        fn byte_at(&self, first: u32) -> u8 {
            (0..8).fold(0, |byte, i| {
                (byte << 1) | ((self.sampled >> (first + i)) & 1) as u8
            })
        }
    }

    struct Scl<'a>(&'a RefCell<Bus>);
    struct Sda<'a>(&'a RefCell<Bus>);

    impl OutputPin for Scl<'_> {
        fn set_high(&mut self) {
            let mut bus = self.0.borrow_mut();
            if !bus.scl {
                bus.scl = true;
                bus.pulses += 1;
                let pulse = bus.pulses - 1;
                if bus.sda() {
                    bus.sampled |= 1 << pulse;
                }
                if bus.host_low {
                    bus.host_drove |= 1 << pulse;
                }
            }
            let _ = bus.edges.push(Edge::Scl(true));
        }

        fn set_low(&mut self) {
            let mut bus = self.0.borrow_mut();
            bus.scl = false;
            let _ = bus.edges.push(Edge::Scl(false));
        }

        fn is_set_high(&self) -> bool {
            self.0.borrow().scl
        }
    }

    impl InputPin for Sda<'_> {
        fn is_high(&self) -> bool {
            self.0.borrow().sda()
        }
    }

    impl OpenDrainPin for Sda<'_> {
        fn release(&mut self) {
            let mut bus = self.0.borrow_mut();
            bus.host_low = false;
            let _ = bus.edges.push(Edge::Sda(true));
        }

        fn drive_low(&mut self) {
            let mut bus = self.0.borrow_mut();
            bus.host_low = true;
            let _ = bus.edges.push(Edge::Sda(false));
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn sensor(bus: &RefCell<Bus>) -> Sht11<Sda<'_>, Scl<'_>, NoDelay> {
        let sensor = Sht11::new(Sda(bus), Scl(bus), NoDelay, &SensorConfig::default());
        bus.borrow_mut().edges.clear();
        sensor
    }

    #[test]
    fn test_init_parks_bus() {
        let bus = Bus::new(0);
        let _sensor = Sht11::new(Sda(&bus), Scl(&bus), NoDelay, &SensorConfig::default());
        assert_eq!(
            bus.borrow().edges.as_slice(),
            &[Edge::Scl(false), Edge::Sda(true)]
        );
    }

    #[test]
    fn test_start_sequence() {
        let bus = Bus::new(0);
        let mut sht = sensor(&bus);
        sht.start();
        assert_eq!(
            bus.borrow().edges.as_slice(),
            &[
                Edge::Sda(true),
                Edge::Scl(false),
                Edge::Scl(true),
                Edge::Sda(false),
                Edge::Scl(false),
                Edge::Scl(true),
                Edge::Sda(true),
                Edge::Scl(false),
            ]
        );
        assert_eq!(bus.borrow().pulses, 2);
    }

    #[test]
    fn test_command_bits_and_ack() {
        // Start uses pulses 0-1, command bits 2-9, acknowledge on 10
        let bus = Bus::new(1 << 10);
        let mut sht = sensor(&bus);
        assert_eq!(sht.start_measurement(MeasurementKind::Temperature), Ok(()));
        assert_eq!(bus.borrow().pulses, 11);
        assert_eq!(bus.borrow().byte_at(2), cmd::MEASURE_TEMPERATURE);
        // Data is released after the acknowledge pulse
        assert!(!bus.borrow().host_low);
    }

    #[test]
    fn test_humidity_command() {
        let bus = Bus::new(1 << 10);
        let mut sht = sensor(&bus);
        assert_eq!(sht.start_measurement(MeasurementKind::Humidity), Ok(()));
        assert_eq!(bus.borrow().byte_at(2), cmd::MEASURE_HUMIDITY);
    }

    #[test]
    fn test_missing_ack() {
        let bus = Bus::new(0);
        let mut sht = sensor(&bus);
        assert_eq!(
            sht.start_measurement(MeasurementKind::Humidity),
            Err(SensorError::NoAcknowledge)
        );
        // The command still went out
        assert_eq!(bus.borrow().pulses, 11);
    }

    #[test]
    fn test_read_word_acks_high_byte_only() {
        let word: u16 = 0x1A2B;
        let [high, low] = word.to_be_bytes();
        let mut pulls = 0u64;
        for i in 0..8 {
            if high & (0x80 >> i) == 0 {
                pulls |= 1 << i;
            }
            if low & (0x80 >> i) == 0 {
                pulls |= 1 << (9 + i);
            }
        }

        let bus = Bus::new(pulls);
        let mut sht = sensor(&bus);
        assert_eq!(sht.read_raw(), Ok(0x1A2B));

        let bus = bus.borrow();
        assert_eq!(bus.pulses, 18);
        assert_eq!(bus.host_drove & (1 << 8), 1 << 8);
        assert_eq!(bus.host_drove & (1 << 17), 0);
        assert_eq!(bus.host_drove & 0xFF, 0);
        assert!(!bus.host_low);
    }

    #[test]
    fn test_connection_reset() {
        let bus = Bus::new(0);
        let mut sht = sensor(&bus);
        sht.connection_reset();
        // Nine reset pulses then the two of the start sequence
        assert_eq!(bus.borrow().pulses, 11);
        assert_eq!(bus.borrow().sampled & 0x1FF, 0x1FF);
    }

    #[test]
    fn test_command_bytes() {
        assert_eq!(command_for(MeasurementKind::Temperature), 0x03);
        assert_eq!(command_for(MeasurementKind::Humidity), 0x05);
    }
}
