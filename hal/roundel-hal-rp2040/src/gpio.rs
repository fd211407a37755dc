//! GPIO wrappers for RP2040
//!
//! Adapts embassy-rp GPIO types to the shared `roundel-hal` pin traits.

use embassy_rp::gpio::{Input, Output};

/// Input pin wrapper implementing [`roundel_hal::InputPin`]
pub struct InputPin<'d> {
    inner: Input<'d>,
}

impl<'d> InputPin<'d> {
    /// Wrap an embassy-rp input (pull-up configuration is the caller's job)
    pub fn new(inner: Input<'d>) -> Self {
        Self { inner }
    }
}

impl roundel_hal::InputPin for InputPin<'_> {
    fn is_high(&self) -> bool {
        self.inner.is_high()
    }
}

/// Output pin wrapper implementing [`roundel_hal::OutputPin`]
pub struct OutputPin<'d> {
    inner: Output<'d>,
}

impl<'d> OutputPin<'d> {
    /// Wrap an embassy-rp output
    pub fn new(inner: Output<'d>) -> Self {
        Self { inner }
    }
}

impl roundel_hal::OutputPin for OutputPin<'_> {
    fn set_high(&mut self) {
        self.inner.set_high();
    }

    fn set_low(&mut self) {
        self.inner.set_low();
    }
}
