//! Board-agnostic core logic for the Roundel handheld firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Shared device state (connection flag, feature toggles, counters)
//! - Screen navigation state machine
//! - UI event/command model (pointer routing, widget taps)
//! - Background activity engine (simulated catch/spin events)
//! - Physical button debouncing
//! - Touch data model and the presenter trait the UI layer implements

#![no_std]
#![deny(unsafe_code)]

pub mod activity;
pub mod events;
pub mod input;
pub mod state;
pub mod touch;
pub mod traits;
