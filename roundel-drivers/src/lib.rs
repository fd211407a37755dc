//! Hardware driver implementations
//!
//! This crate provides concrete drivers over the traits defined in
//! roundel-hal:
//!
//! - CST816 capacitive touch controller (two-wire bus)

#![no_std]
#![deny(unsafe_code)]

pub mod touch;

pub use touch::{Cst816, TouchConfig};
