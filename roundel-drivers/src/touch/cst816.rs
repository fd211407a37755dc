//! CST816 capacitive touch controller driver
//!
//! The CST816 sits on the two-wire bus at address 0x15 (400 kHz fast
//! mode) and exposes a fixed register map. A touch report is a 6-byte
//! burst read starting at the gesture register, fetched with a
//! repeated-start transaction: write address+register, restart with
//! address+read.
//!
//! # Report layout
//!
//! ```text
//! byte 0        gesture code
//! byte 1 [3:0]  finger count
//! byte 2 [3:0]  X high nibble, [7:6] event code
//! byte 3        X low byte
//! byte 4 [3:0]  Y high nibble
//! byte 5        Y low byte
//! ```
//!
//! There is no checksum in this protocol; a decode that masks the wrong
//! nibbles corrupts coordinates silently, so the mask logic lives in a
//! pure function with its own tests.

use roundel_core::touch::{Gesture, TouchEvent, TouchSample};
use roundel_hal::i2c::{BusError, I2cBus};

/// 7-bit bus address of the CST816
pub const CST816_ADDRESS: u8 = 0x15;

/// CST816 register addresses
pub mod reg {
    /// Gesture code (start of the 6-byte touch report)
    pub const GESTURE: u8 = 0x01;
    /// Finger count (low nibble)
    pub const FINGER_NUM: u8 = 0x02;
    /// X position high nibble + event bits
    pub const XPOS_H: u8 = 0x03;
    /// X position low byte
    pub const XPOS_L: u8 = 0x04;
    /// Y position high nibble
    pub const YPOS_H: u8 = 0x05;
    /// Y position low byte
    pub const YPOS_L: u8 = 0x06;
    /// Firmware version (read-only)
    pub const VERSION: u8 = 0xA7;
    /// Power mode (write 0x03 to sleep)
    pub const SLEEP: u8 = 0xE5;
}

/// Value written to the power-mode register to enter sleep
const SLEEP_COMMAND: u8 = 0x03;

/// Touch report length in bytes
const REPORT_LEN: usize = 6;

/// Touch driver configuration
#[derive(Debug, Clone, Copy)]
pub struct TouchConfig {
    /// 7-bit device address
    pub address: u8,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            address: CST816_ADDRESS,
        }
    }
}

/// Decode a raw 6-byte touch report
///
/// `touched` follows the finger-count nibble; with no contact the event
/// is forced to `None` and coordinates are zeroed regardless of the
/// remaining register contents.
pub fn decode(report: &[u8; REPORT_LEN]) -> TouchSample {
    let gesture = Gesture::from_code(report[0]);
    let fingers = report[1] & 0x0F;

    if fingers == 0 {
        return TouchSample {
            gesture,
            ..TouchSample::RELEASED
        };
    }

    TouchSample {
        x: u16::from(report[2] & 0x0F) << 8 | u16::from(report[3]),
        y: u16::from(report[4] & 0x0F) << 8 | u16::from(report[5]),
        event: TouchEvent::from_code(report[2] >> 6),
        gesture,
        touched: true,
    }
}

/// CST816 driver over any [`I2cBus`] implementation
///
/// Owns nothing beyond the bus handle; every read produces a fresh
/// sample. The bus itself must already be configured for 400 kHz fast
/// mode by the chip HAL.
pub struct Cst816<B> {
    bus: B,
    config: TouchConfig,
}

impl<B: I2cBus> Cst816<B> {
    /// Create a driver over a configured bus
    pub fn new(bus: B, config: TouchConfig) -> Self {
        Self { bus, config }
    }

    /// Probe the controller after bus bring-up
    ///
    /// Attempts one version read. The device operates without firmware
    /// version confirmation, so a failed probe is not an error: the
    /// caller logs it and continues. Returns the version if the probe
    /// succeeded.
    pub fn init(&mut self) -> Option<u8> {
        self.version().ok()
    }

    /// Read and decode one touch report
    pub fn read_touch(&mut self) -> Result<TouchSample, BusError> {
        let mut report = [0u8; REPORT_LEN];
        self.read_regs(reg::GESTURE, &mut report)?;
        Ok(decode(&report))
    }

    /// Read the firmware version register
    pub fn version(&mut self) -> Result<u8, BusError> {
        let mut version = [0u8; 1];
        self.read_regs(reg::VERSION, &mut version)?;
        Ok(version[0])
    }

    /// Put the controller to sleep
    pub fn sleep(&mut self) -> Result<(), BusError> {
        self.write_reg(reg::SLEEP, SLEEP_COMMAND)
    }

    /// Rouse the controller from sleep
    ///
    /// The CST816 has no dedicated wake command; this issues a version
    /// read and relies on the bus traffic to rouse the device. The
    /// datasheet does not guarantee this exits sleep mode - treat it as
    /// unverified until checked against hardware.
    pub fn wake(&mut self) -> Result<(), BusError> {
        self.version().map(|_| ())
    }

    /// Register-address write followed by a repeated-start burst read
    fn read_regs(&mut self, start: u8, buf: &mut [u8]) -> Result<(), BusError> {
        self.bus.write_read(self.config.address, &[start], buf)
    }

    fn write_reg(&mut self, register: u8, value: u8) -> Result<(), BusError> {
        self.bus.write(self.config.address, &[register, value])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn decode_single_finger_report() {
        // finger count 1, x = 0x0123, y = 0x0245
        let sample = decode(&[0x00, 0x01, 0x01, 0x23, 0x02, 0x45]);
        assert!(sample.touched);
        assert_eq!(sample.x, 0x0123);
        assert_eq!(sample.y, 0x0245);
        // Event bits 7:6 of the X high byte are zero here, which the
        // controller numbers as "no event"
        assert_eq!(sample.event, TouchEvent::None);
        assert_eq!(sample.gesture, Gesture::None);
    }

    #[test]
    fn decode_masks_event_bits_out_of_x() {
        // Event bits 7:6 set on the X high byte must not leak into x
        let sample = decode(&[0x00, 0x01, 0x8F, 0xFF, 0x0F, 0xFF]);
        assert_eq!(sample.x, 0x0FFF);
        assert_eq!(sample.y, 0x0FFF);
        assert_eq!(sample.event, TouchEvent::Up);
    }

    #[test]
    fn decode_event_field_uses_controller_numbering() {
        // 0 none, 1 down, 2 up, 3 contact, carried in bits 7:6 of byte 2
        for (bits, expected) in [
            (0x00u8, TouchEvent::None),
            (0x01, TouchEvent::Down),
            (0x02, TouchEvent::Up),
            (0x03, TouchEvent::Contact),
        ] {
            let sample = decode(&[0x00, 0x01, bits << 6 | 0x01, 0x23, 0x02, 0x45]);
            assert_eq!(sample.event, expected);
            assert_eq!(sample.x, 0x0123);
        }
    }

    #[test]
    fn decode_no_fingers_is_released() {
        // Garbage in the coordinate bytes must not matter
        let sample = decode(&[0x05, 0xF0, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert!(!sample.touched);
        assert_eq!(sample.event, TouchEvent::None);
        assert_eq!(sample.x, 0);
        assert_eq!(sample.y, 0);
        // Gesture is still decoded; the controller reports swipes after lift
        assert_eq!(sample.gesture, Gesture::SingleClick);
    }

    proptest! {
        #[test]
        fn decoded_coordinates_are_12_bit(report in proptest::array::uniform6(any::<u8>())) {
            let sample = decode(&report);
            prop_assert!(sample.x <= 0x0FFF);
            prop_assert!(sample.y <= 0x0FFF);
            prop_assert_eq!(sample.touched, report[1] & 0x0F > 0);
            if !sample.touched {
                prop_assert_eq!(sample.event, TouchEvent::None);
            }
        }
    }

    /// Scripted bus with the CST816 register map and sleep behavior:
    /// while asleep every data read NACKs, except a version read, which
    /// rouses the device (the wake-probe policy under test).
    struct MockBus {
        registers: [u8; 0x100],
        asleep: bool,
        fail_with: Option<BusError>,
    }

    impl MockBus {
        fn new() -> Self {
            let mut registers = [0u8; 0x100];
            registers[reg::VERSION as usize] = 0xB4;
            Self {
                registers,
                asleep: false,
                fail_with: None,
            }
        }

        fn with_report(report: [u8; 6]) -> Self {
            let mut bus = Self::new();
            bus.registers[reg::GESTURE as usize..reg::GESTURE as usize + 6]
                .copy_from_slice(&report);
            bus
        }
    }

    impl I2cBus for MockBus {
        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), BusError> {
            assert_eq!(address, CST816_ADDRESS);
            if let Some(error) = self.fail_with {
                return Err(error);
            }
            if data.len() == 2 && data[0] == reg::SLEEP && data[1] == SLEEP_COMMAND {
                self.asleep = true;
            }
            Ok(())
        }

        fn read(&mut self, _address: u8, _buf: &mut [u8]) -> Result<(), BusError> {
            unimplemented!("driver only uses write_read bursts")
        }

        fn write_read(
            &mut self,
            address: u8,
            write_data: &[u8],
            read_buf: &mut [u8],
        ) -> Result<(), BusError> {
            assert_eq!(address, CST816_ADDRESS);
            if let Some(error) = self.fail_with {
                return Err(error);
            }
            let start = write_data[0];
            if self.asleep {
                if start == reg::VERSION {
                    self.asleep = false;
                } else {
                    return Err(BusError::Nack);
                }
            }
            for (i, byte) in read_buf.iter_mut().enumerate() {
                *byte = self.registers[start as usize + i];
            }
            Ok(())
        }
    }

    #[test]
    fn read_touch_decodes_bus_report() {
        let bus = MockBus::with_report([0x00, 0x01, 0x01, 0x23, 0x02, 0x45]);
        let mut touch = Cst816::new(bus, TouchConfig::default());
        let sample = touch.read_touch().unwrap();
        assert!(sample.touched);
        assert_eq!((sample.x, sample.y), (0x0123, 0x0245));
    }

    #[test]
    fn init_probe_failure_is_non_fatal() {
        let mut bus = MockBus::new();
        bus.fail_with = Some(BusError::Timeout);
        let mut touch = Cst816::new(bus, TouchConfig::default());
        assert_eq!(touch.init(), None);

        let mut touch = Cst816::new(MockBus::new(), TouchConfig::default());
        assert_eq!(touch.init(), Some(0xB4));
    }

    #[test]
    fn read_after_sleep_fails_until_wake() {
        let bus = MockBus::with_report([0x00, 0x01, 0x00, 0x10, 0x00, 0x20]);
        let mut touch = Cst816::new(bus, TouchConfig::default());

        touch.sleep().unwrap();
        assert_eq!(touch.read_touch(), Err(BusError::Nack));

        touch.wake().unwrap();
        assert!(touch.read_touch().unwrap().touched);
    }

    #[test]
    fn bus_error_propagates_from_read_touch() {
        let mut bus = MockBus::new();
        bus.fail_with = Some(BusError::Timeout);
        let mut touch = Cst816::new(bus, TouchConfig::default());
        assert_eq!(touch.read_touch(), Err(BusError::Timeout));
    }
}
