//! UI label state
//!
//! Holds the text of every label the core loops can update and tracks
//! dirtiness so the render loop only redraws when something changed.
//! This is the `UiPresenter` implementation the firmware hands to its
//! render task.

use core::fmt::Write;

use heapless::String;

use roundel_core::state::Screen;
use roundel_core::traits::UiPresenter;

/// Maximum label length in characters
const LABEL_LEN: usize = 24;

/// Read-only snapshot of the model for the backend to draw
pub struct ScreenView<'a> {
    /// Active screen
    pub screen: Screen,
    /// Status line ("Connected"/"Disconnected" or custom text)
    pub status: &'a str,
    /// Items-collected counter label
    pub items: &'a str,
    /// Locations-visited counter label
    pub locations: &'a str,
    /// Battery percentage label
    pub battery: &'a str,
    /// Progress arc value, items collected modulo 100
    pub progress: u8,
    /// Auto-catch toggle button state ("Catch: ON"/"Catch: OFF")
    pub auto_catch: bool,
    /// Auto-spin toggle button state ("Spin: ON"/"Spin: OFF")
    pub auto_spin: bool,
    /// Whether the catch feedback highlight is active
    pub catch_feedback: bool,
}

/// UI presentation model
pub struct UiModel {
    screen: Screen,
    status: String<LABEL_LEN>,
    items: String<LABEL_LEN>,
    locations: String<LABEL_LEN>,
    battery: String<LABEL_LEN>,
    progress: u8,
    auto_catch: bool,
    auto_spin: bool,
    catch_feedback: bool,
    dirty: bool,
}

impl UiModel {
    /// Create the model with boot-time labels
    pub fn new() -> Self {
        let mut model = Self {
            screen: Screen::Main,
            status: String::new(),
            items: String::new(),
            locations: String::new(),
            battery: String::new(),
            progress: 0,
            auto_catch: true,
            auto_spin: true,
            catch_feedback: false,
            dirty: true,
        };
        model.set_connection_label(false);
        model.set_counter_displays(0, 0, 100);
        model
    }

    /// Active screen
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Whether the model changed since the last `take_view`
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Snapshot the labels for drawing and clear the dirty flag
    pub fn take_view(&mut self) -> ScreenView<'_> {
        self.dirty = false;
        ScreenView {
            screen: self.screen,
            status: self.status.as_str(),
            items: self.items.as_str(),
            locations: self.locations.as_str(),
            battery: self.battery.as_str(),
            progress: self.progress,
            auto_catch: self.auto_catch,
            auto_spin: self.auto_spin,
            catch_feedback: self.catch_feedback,
        }
    }

    /// Reflect the toggle states on their buttons
    ///
    /// Not part of the `UiPresenter` contract; the render loop calls
    /// this after routing a toggle tap into the device state.
    pub fn set_toggle_labels(&mut self, auto_catch: bool, auto_spin: bool) {
        if self.auto_catch != auto_catch || self.auto_spin != auto_spin {
            self.auto_catch = auto_catch;
            self.auto_spin = auto_spin;
            self.dirty = true;
        }
    }

    /// Clear the catch highlight (called after the feedback period)
    pub fn clear_catch_feedback(&mut self) {
        if self.catch_feedback {
            self.catch_feedback = false;
            self.dirty = true;
        }
    }

    fn set_label(target: &mut String<LABEL_LEN>, text: &str) {
        target.clear();
        // Truncate if too long
        for c in text.chars() {
            if target.push(c).is_err() {
                break;
            }
        }
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}

impl UiPresenter for UiModel {
    fn set_status_text(&mut self, text: &str) {
        Self::set_label(&mut self.status, text);
        self.dirty = true;
    }

    fn set_counter_displays(&mut self, items: u32, locations: u32, battery_percent: u8) {
        self.items.clear();
        let _ = write!(self.items, "{}", items);
        self.locations.clear();
        let _ = write!(self.locations, "Stops: {}", locations);
        self.battery.clear();
        let _ = write!(self.battery, "{}%", battery_percent);
        // The arc wraps every 100 items
        self.progress = (items % 100) as u8;
        self.dirty = true;
    }

    fn set_connection_label(&mut self, connected: bool) {
        self.set_status_text(if connected { "Connected" } else { "Disconnected" });
    }

    fn play_catch_feedback(&mut self) {
        self.catch_feedback = true;
        self.dirty = true;
    }

    fn switch_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            self.screen = screen;
            self.dirty = true;
        }
    }
}
