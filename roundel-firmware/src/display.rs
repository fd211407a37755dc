//! Panel backend
//!
//! The round LCD hangs off SPI behind an external panel driver; all
//! drawing stays on that side of the `DisplayBackend` seam, and a real
//! panel driver slots in here without touching the render task. This
//! backend logs the view it would draw.

use defmt::*;

use roundel_display::{DisplayBackend, DisplayError, ScreenView};

/// Logging stand-in for the panel driver
pub struct PanelBackend {
    ready: bool,
}

impl PanelBackend {
    /// Create the backend; `ready` once the panel is powered
    pub fn new() -> Self {
        Self { ready: true }
    }
}

impl Default for PanelBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBackend for PanelBackend {
    fn present(&mut self, view: &ScreenView<'_>) -> Result<(), DisplayError> {
        if !self.ready {
            return Err(DisplayError::NotInitialized);
        }
        debug!(
            "present {}: status={} items={} locations={} battery={} arc={}",
            view.screen, view.status, view.items, view.locations, view.battery, view.progress
        );
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}
