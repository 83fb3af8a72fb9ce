//! HT1632 dot-matrix LED controller
//!
//! The controller is written over a three-wire link: active-low chip
//! select, a write clock and serial data. Every transfer starts with a
//! 3-bit opcode:
//!
//! ```text
//! command: 100 CCCCCCCC x  [CCCCCCCC x ...]      (12 bits, then 9 per command)
//! write:   101 AAAAAAA DDDDDDDD                  (10 bits, then 8 data bits)
//! ```
//!
//! The first chunk of a transfer is loaded into the shifter in one go and
//! each further chunk only after the shifter reports ready. Chip select is
//! released once the last chunk has gone out.
//!
//! A shifter that never reports ready is turned into
//! [`DisplayError::Timeout`] after `ready_spin_limit` polls; chip select is
//! released on that path too, so the next transfer starts from a clean
//! frame.

use dotclock_core::config::DisplayConfig;
use dotclock_core::display::layout::ADDRESS_SPACE;
use dotclock_core::traits::{DisplayError, MatrixDisplay};
use dotclock_hal::{OutputPin, SerialShifter};

/// Transfer opcodes (3 bits)
pub mod op {
    /// Read display memory (unused, the link is write-only)
    pub const READ: u16 = 0b110;
    /// Write display memory
    pub const WRITE: u16 = 0b101;
    /// Command
    pub const COMMAND: u16 = 0b100;
}

/// Command codes
pub mod cmd {
    /// Turn off system oscillator
    pub const SYSDIS: u8 = 0x00;
    /// Turn on system oscillator
    pub const SYSEN: u8 = 0x01;
    /// Turn off LED duty cycle generator
    pub const LEDOFF: u8 = 0x02;
    /// Turn on LED duty cycle generator
    pub const LEDON: u8 = 0x03;
    /// Turn off whole-panel blinking
    pub const BLINKOFF: u8 = 0x08;
    /// Turn on whole-panel blinking
    pub const BLINKON: u8 = 0x09;
    /// Slave mode, clock from external source
    pub const SLAVE: u8 = 0x10;
    /// Master mode, on-chip RC oscillator, clock output
    pub const MASTER: u8 = 0x14;
    /// On-chip RC oscillator
    pub const RC: u8 = 0x18;
    /// External clock
    pub const EXTCLK: u8 = 0x1C;
    /// 16 COM lines, PMOS open drain outputs
    pub const C16PMOS: u8 = 0x2C;
    /// PWM duty; add the level 0-15
    pub const SETPWM: u8 = 0xA0;
}

/// HT1632 driver
pub struct Ht1632<SH, CS> {
    shifter: SH,
    cs: CS,
    ready_spin_limit: u32,
}

impl<SH: SerialShifter, CS: OutputPin> Ht1632<SH, CS> {
    /// Create a driver; chip select is released immediately
    pub fn new(shifter: SH, mut cs: CS, config: &DisplayConfig) -> Self {
        cs.set_high();
        Self {
            shifter,
            cs,
            ready_spin_limit: config.ready_spin_limit.max(1),
        }
    }

    /// Bring the controller up: RC clock, 16-COM PMOS, panel blink on,
    /// oscillator on, LEDs on, initial brightness
    ///
    /// Must run before any memory write.
    pub fn init(&mut self, brightness: u8) -> Result<(), DisplayError> {
        self.command_sequence(&[
            cmd::RC,
            cmd::C16PMOS,
            cmd::BLINKON,
            cmd::SYSEN,
            cmd::LEDON,
            cmd::SETPWM + (brightness & 0x0F),
        ])
    }

    /// Zero all display memory
    pub fn clear(&mut self) -> Result<(), DisplayError> {
        // Each write covers two nibble addresses
        for address in (0..ADDRESS_SPACE).step_by(2) {
            self.write_byte(address, 0)?;
        }
        Ok(())
    }

    /// Send a single command
    pub fn command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.command_sequence(&[command])
    }

    /// Send several commands in one chip-select frame
    pub fn command_sequence(&mut self, commands: &[u8]) -> Result<(), DisplayError> {
        let Some((&first, rest)) = commands.split_first() else {
            return Ok(());
        };

        self.cs.set_low();
        let result = self.shift_commands(first, rest);
        self.cs.set_high();
        result
    }

    fn shift_commands(&mut self, first: u8, rest: &[u8]) -> Result<(), DisplayError> {
        self.shifter
            .shift_out((op::COMMAND << 13) | (u16::from(first) << 5), 12);
        for &command in rest {
            self.wait_ready()?;
            self.shifter.shift_out(u16::from(command) << 8, 9);
        }
        self.wait_ready()
    }

    /// Write 8 bits (two nibble addresses) at `address`
    pub fn write_byte(&mut self, address: u8, data: u8) -> Result<(), DisplayError> {
        self.cs.set_low();
        let result = self.shift_write(address, data);
        self.cs.set_high();
        result
    }

    fn shift_write(&mut self, address: u8, data: u8) -> Result<(), DisplayError> {
        self.shifter
            .shift_out((op::WRITE << 13) | (u16::from(address & 0x7F) << 6), 10);
        self.wait_ready()?;
        self.shifter.shift_out(u16::from(data) << 8, 8);
        self.wait_ready()
    }

    fn wait_ready(&mut self) -> Result<(), DisplayError> {
        for _ in 0..self.ready_spin_limit {
            if self.shifter.is_ready() {
                return Ok(());
            }
        }
        Err(DisplayError::Timeout)
    }

    /// Release the pins
    pub fn release(self) -> (SH, CS) {
        (self.shifter, self.cs)
    }
}

impl<SH: SerialShifter, CS: OutputPin> MatrixDisplay for Ht1632<SH, CS> {
    fn write_byte(&mut self, address: u8, data: u8) -> Result<(), DisplayError> {
        Ht1632::write_byte(self, address, data)
    }

    fn set_brightness(&mut self, level: u8) -> Result<(), DisplayError> {
        self.command(cmd::SETPWM + (level & 0x0F))
    }

    fn set_panel_blink(&mut self, enabled: bool) -> Result<(), DisplayError> {
        self.command(if enabled { cmd::BLINKON } else { cmd::BLINKOFF })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    /// Shifter that records each loaded chunk
    struct RecordingShifter {
        chunks: Vec<(u16, u8), 128>,
        /// Never reports ready
        stuck: bool,
    }

    impl RecordingShifter {
        fn new() -> Self {
            Self {
                chunks: Vec::new(),
                stuck: false,
            }
        }
    }

    impl SerialShifter for RecordingShifter {
        fn shift_out(&mut self, word: u16, bits: u8) {
            let _ = self.chunks.push((word, bits));
        }

        fn is_ready(&self) -> bool {
            !self.stuck
        }
    }

    /// Mock chip-select pin counting frames
    struct MockPin {
        high: bool,
        falls: u32,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                high: false,
                falls: 0,
            }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            if self.high {
                self.falls += 1;
            }
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn driver() -> Ht1632<RecordingShifter, MockPin> {
        Ht1632::new(RecordingShifter::new(), MockPin::new(), &DisplayConfig::default())
    }

    #[test]
    fn test_new_releases_chip_select() {
        let display = driver();
        assert!(display.cs.is_set_high());
    }

    #[test]
    fn test_single_command_frame() {
        let mut display = driver();
        display.command(cmd::BLINKOFF).unwrap();
        // 100 0000 1000 x
        assert_eq!(display.shifter.chunks.as_slice(), &[(0b1000_0001_0000_0000, 12)]);
        assert_eq!(display.cs.falls, 1);
        assert!(display.cs.is_set_high());
    }

    #[test]
    fn test_init_sequence() {
        let mut display = driver();
        display.init(7).unwrap();
        let chunks = display.shifter.chunks.as_slice();
        assert_eq!(chunks.len(), 6);
        assert_eq!(chunks[0], ((0b100 << 13) | (0x18 << 5), 12));
        assert_eq!(chunks[1], (0x2C << 8, 9));
        assert_eq!(chunks[2], (0x09 << 8, 9));
        assert_eq!(chunks[3], (0x01 << 8, 9));
        assert_eq!(chunks[4], (0x03 << 8, 9));
        assert_eq!(chunks[5], (0xA7 << 8, 9));
        // One chip-select frame for the whole burst
        assert_eq!(display.cs.falls, 1);
    }

    #[test]
    fn test_write_frame() {
        let mut display = driver();
        display.write_byte(0x5A, 0x3E).unwrap();
        assert_eq!(
            display.shifter.chunks.as_slice(),
            &[((0b101 << 13) | (0x5A << 6), 10), (0x3E00, 8)]
        );
        assert_eq!(display.cs.falls, 1);
    }

    #[test]
    fn test_write_masks_address() {
        let mut display = driver();
        display.write_byte(0xFF, 0x00).unwrap();
        assert_eq!(display.shifter.chunks[0], ((0b101 << 13) | (0x7F << 6), 10));
    }

    #[test]
    fn test_brightness_and_blink_commands() {
        let mut display = driver();
        MatrixDisplay::set_brightness(&mut display, 15).unwrap();
        MatrixDisplay::set_panel_blink(&mut display, false).unwrap();
        MatrixDisplay::set_panel_blink(&mut display, true).unwrap();
        let commands: Vec<u16, 4> = display
            .shifter
            .chunks
            .iter()
            .map(|&(word, _)| (word >> 5) & 0xFF)
            .collect();
        assert_eq!(commands.as_slice(), &[0xAF, 0x08, 0x09]);
        assert_eq!(display.cs.falls, 3);
    }

    #[test]
    fn test_clear_writes_every_other_address() {
        let mut display = driver();
        display.clear().unwrap();
        let addresses: Vec<u16, 64> = display
            .shifter
            .chunks
            .iter()
            .filter(|&&(_, bits)| bits == 10)
            .map(|&(word, _)| (word >> 6) & 0x7F)
            .collect();
        assert_eq!(addresses.len(), 48);
        assert_eq!(addresses[0], 0);
        assert_eq!(addresses[47], 94);
        assert!(display
            .shifter
            .chunks
            .iter()
            .filter(|&&(_, bits)| bits == 8)
            .all(|&(word, _)| word == 0));
    }

    #[test]
    fn test_timeout_releases_chip_select() {
        let mut display = Ht1632::new(
            RecordingShifter::new(),
            MockPin::new(),
            &DisplayConfig {
                ready_spin_limit: 3,
                ..DisplayConfig::default()
            },
        );
        display.shifter.stuck = true;
        assert_eq!(display.write_byte(0x10, 0xFF), Err(DisplayError::Timeout));
        assert!(display.cs.is_set_high());
        // The data byte is never loaded
        assert_eq!(display.shifter.chunks.len(), 1);

        assert_eq!(display.init(7), Err(DisplayError::Timeout));
        assert!(display.cs.is_set_high());
        assert_eq!(display.shifter.chunks.len(), 2);
    }
}
