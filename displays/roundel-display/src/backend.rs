//! Display backend trait
//!
//! The seam to the external panel driver. Widget drawing, fonts, and
//! SPI transfers all live on the other side of this trait.

use crate::model::ScreenView;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the panel
    Communication,
    /// Panel not initialized
    NotInitialized,
}

/// Display backend trait
///
/// Implementations render a [`ScreenView`] to the hardware. The render
/// loop calls [`present`](DisplayBackend::present) once per tick when
/// the model is dirty; it must return well within the 10 ms tick or
/// input latency degrades.
pub trait DisplayBackend {
    /// Render the view to the panel
    fn present(&mut self, view: &ScreenView<'_>) -> Result<(), DisplayError>;

    /// Check if the panel is ready
    fn is_ready(&self) -> bool;
}
