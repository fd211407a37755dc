//! I2C bus driver for RP2040
//!
//! Wraps the embassy-rp blocking I2C master in the shared `I2cBus` trait
//! so the touch driver stays chip-agnostic.

use embassy_rp::i2c::{AbortReason, Blocking, Error as I2cError, I2c, Instance};

use roundel_hal::i2c::{BusError, I2cBus};

/// Blocking I2C master implementing [`roundel_hal::I2cBus`]
///
/// Constructed by the firmware with `I2c::new_blocking` at the frequency
/// from [`roundel_hal::I2cConfig`]; this wrapper only does error mapping.
pub struct BlockingI2c<'d, T: Instance> {
    inner: I2c<'d, T, Blocking>,
}

impl<'d, T: Instance> BlockingI2c<'d, T> {
    /// Wrap an already-configured embassy-rp I2C peripheral
    pub fn new(inner: I2c<'d, T, Blocking>) -> Self {
        Self { inner }
    }
}

fn map_error(e: I2cError) -> BusError {
    match e {
        I2cError::Abort(AbortReason::NoAcknowledge) => BusError::Nack,
        I2cError::AddressOutOfRange(_) | I2cError::AddressReserved(_) => BusError::Config,
        _ => BusError::Bus,
    }
}

impl<'d, T: Instance> I2cBus for BlockingI2c<'d, T> {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), BusError> {
        self.inner.blocking_write(address as u16, data).map_err(map_error)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), BusError> {
        self.inner.blocking_read(address as u16, buf).map_err(map_error)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), BusError> {
        self.inner
            .blocking_write_read(address as u16, write_data, read_buf)
            .map_err(map_error)
    }
}
