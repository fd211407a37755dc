//! Widget hit regions for the 240x240 round panel
//!
//! The layout matches the rendered widget positions: toggle buttons in
//! the bottom corners and a settings button bottom-center on the main
//! screen, a single back button on the settings screen. The stats
//! screen has no bound controls.

use roundel_core::events::UiEvent;
use roundel_core::state::Screen;

/// Panel width in pixels
pub const PANEL_WIDTH: u16 = 240;

/// Panel height in pixels
pub const PANEL_HEIGHT: u16 = 240;

/// Axis-aligned hit rectangle, end-exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// Whether the point falls inside this rectangle
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Auto-catch toggle, bottom-left of the main screen (90x35)
pub const BTN_AUTO_CATCH: Rect = Rect {
    x: 10,
    y: 165,
    width: 90,
    height: 35,
};

/// Auto-spin toggle, bottom-right of the main screen (90x35)
pub const BTN_AUTO_SPIN: Rect = Rect {
    x: 140,
    y: 165,
    width: 90,
    height: 35,
};

/// Settings button, bottom-center of the main screen (60x30)
pub const BTN_SETTINGS: Rect = Rect {
    x: 90,
    y: 205,
    width: 60,
    height: 30,
};

/// Back button, bottom-center of the settings screen (80x35)
pub const BTN_BACK: Rect = Rect {
    x: 80,
    y: 185,
    width: 80,
    height: 35,
};

/// Resolve a pointer press on the active screen to a widget tap
pub fn hit_test(screen: Screen, x: u16, y: u16) -> Option<UiEvent> {
    match screen {
        Screen::Main => {
            if BTN_AUTO_CATCH.contains(x, y) {
                Some(UiEvent::AutoCatchTap)
            } else if BTN_AUTO_SPIN.contains(x, y) {
                Some(UiEvent::AutoSpinTap)
            } else if BTN_SETTINGS.contains(x, y) {
                Some(UiEvent::SettingsTap)
            } else {
                None
            }
        }
        Screen::Settings => {
            if BTN_BACK.contains(x, y) {
                Some(UiEvent::BackTap)
            } else {
                None
            }
        }
        // No bound controls; reachable only programmatically
        Screen::Stats => None,
    }
}
