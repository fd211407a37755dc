//! Presenter trait for the UI layer
//!
//! The only calls the core loops make into the presentation layer.
//! Widget construction, layout, and drawing stay behind this trait; the
//! render loop applies queued [`UiCommand`](crate::events::UiCommand)s
//! to it each tick.

use crate::state::Screen;

/// UI layer contract consumed by the core loops
pub trait UiPresenter {
    /// Replace the status line text
    fn set_status_text(&mut self, text: &str);

    /// Update the counter and battery labels
    fn set_counter_displays(&mut self, items: u32, locations: u32, battery_percent: u8);

    /// Reflect the connection flag in the status label
    fn set_connection_label(&mut self, connected: bool);

    /// Flash the catch feedback highlight
    fn play_catch_feedback(&mut self);

    /// Load a different screen
    fn switch_screen(&mut self, screen: Screen);
}
