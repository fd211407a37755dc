//! UI presentation model and display abstractions for Roundel
//!
//! This crate provides:
//! - `UiModel`: label state and widget hit regions for the three screens,
//!   implementing the `UiPresenter` contract from roundel-core
//! - `DisplayBackend` trait for the actual panel driver
//!
//! # Architecture
//!
//! The render loop owns a `UiModel` and a backend. Queued UI commands
//! are applied to the model; pointer events are hit-tested against the
//! active screen's widget map; the model's view is then handed to the
//! backend, which owns all actual drawing. Rendering primitives and
//! panel bring-up stay entirely behind [`DisplayBackend`].

#![no_std]

pub mod backend;
pub mod model;
pub mod widgets;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use model::{ScreenView, UiModel};
pub use widgets::{hit_test, Rect};
