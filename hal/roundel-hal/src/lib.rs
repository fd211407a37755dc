//! Roundel Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs. This keeps the drivers and application logic
//! host-testable: the touch driver only sees [`i2c::I2cBus`], never the
//! embassy peripheral types.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (roundel-firmware)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  roundel-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  roundel-hal-rp2040 (embassy-rp impls)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`i2c::I2cBus`] - Two-wire bus operations

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use i2c::{BusError, I2cBus, I2cConfig};
