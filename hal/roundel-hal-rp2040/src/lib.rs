//! RP2040-specific HAL for the Roundel handheld
//!
//! This crate provides RP2040 implementations of the shared `roundel-hal`
//! traits on top of embassy-rp:
//!
//! - Blocking I2C master for the touch controller bus
//! - GPIO wrappers for the physical button and backlight

#![no_std]

pub mod gpio;
pub mod i2c;

pub use gpio::{InputPin, OutputPin};
pub use i2c::BlockingI2c;
