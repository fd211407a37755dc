//! Process-wide device state
//!
//! One record shared by the input, activity, and render loops. Every
//! field is an atomic scalar with relaxed ordering. Each field is
//! independently consistent, but a counter update and a label refresh
//! reading it are still not a transaction. `snapshot_counters` is a
//! best-effort pair of loads, which is all the display needs.

use portable_atomic::{AtomicBool, AtomicU32, AtomicU8, Ordering};

use super::Screen;

/// Shared device state
///
/// Const-constructible so the firmware can keep it in a `static` and hand
/// `&'static DeviceState` to every task at spawn time.
pub struct DeviceState {
    connected: AtomicBool,
    auto_catch: AtomicBool,
    auto_spin: AtomicBool,
    items_collected: AtomicU32,
    locations_visited: AtomicU32,
    battery_percent: AtomicU8,
    screen: AtomicU8,
}

impl DeviceState {
    /// Initial state: disconnected, both toggles on, counters zero,
    /// full battery, main screen loaded
    pub const fn new() -> Self {
        Self {
            connected: AtomicBool::new(false),
            auto_catch: AtomicBool::new(true),
            auto_spin: AtomicBool::new(true),
            items_collected: AtomicU32::new(0),
            locations_visited: AtomicU32::new(0),
            battery_percent: AtomicU8::new(100),
            screen: AtomicU8::new(Screen::Main as u8),
        }
    }

    /// Set the connection flag
    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::Relaxed);
    }

    /// Read the connection flag
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }

    /// Flip the connection flag, returning the new value
    pub fn toggle_connected(&self) -> bool {
        !self.connected.fetch_xor(true, Ordering::Relaxed)
    }

    /// Flip the auto-catch toggle, returning the new value
    pub fn toggle_auto_catch(&self) -> bool {
        !self.auto_catch.fetch_xor(true, Ordering::Relaxed)
    }

    /// Read the auto-catch toggle
    pub fn auto_catch_enabled(&self) -> bool {
        self.auto_catch.load(Ordering::Relaxed)
    }

    /// Flip the auto-spin toggle, returning the new value
    pub fn toggle_auto_spin(&self) -> bool {
        !self.auto_spin.fetch_xor(true, Ordering::Relaxed)
    }

    /// Read the auto-spin toggle
    pub fn auto_spin_enabled(&self) -> bool {
        self.auto_spin.load(Ordering::Relaxed)
    }

    /// Count one collected item
    pub fn increment_items_collected(&self) -> u32 {
        self.items_collected.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Count one visited location
    pub fn increment_locations_visited(&self) -> u32 {
        self.locations_visited.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Best-effort read of both counters
    ///
    /// The two loads are not a combined atomic snapshot; an increment may
    /// land between them.
    pub fn snapshot_counters(&self) -> (u32, u32) {
        (
            self.items_collected.load(Ordering::Relaxed),
            self.locations_visited.load(Ordering::Relaxed),
        )
    }

    /// Update the displayed battery percentage
    pub fn set_battery_percent(&self, percent: u8) {
        self.battery_percent.store(percent.min(100), Ordering::Relaxed);
    }

    /// Read the displayed battery percentage
    pub fn battery_percent(&self) -> u8 {
        self.battery_percent.load(Ordering::Relaxed)
    }

    /// Read the active screen
    pub fn screen(&self) -> Screen {
        Screen::from_id(self.screen.load(Ordering::Relaxed))
    }

    /// Record the active screen
    pub fn set_screen(&self, screen: Screen) {
        self.screen.store(screen as u8, Ordering::Relaxed);
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let state = DeviceState::new();
        assert!(!state.is_connected());
        assert!(state.auto_catch_enabled());
        assert!(state.auto_spin_enabled());
        assert_eq!(state.snapshot_counters(), (0, 0));
        assert_eq!(state.battery_percent(), 100);
        assert_eq!(state.screen(), Screen::Main);
    }

    #[test]
    fn toggle_pair_is_identity() {
        let state = DeviceState::new();

        let original = state.auto_catch_enabled();
        let flipped = state.toggle_auto_catch();
        assert_eq!(flipped, !original);
        let restored = state.toggle_auto_catch();
        assert_eq!(restored, original);

        let original = state.auto_spin_enabled();
        state.toggle_auto_spin();
        let restored = state.toggle_auto_spin();
        assert_eq!(restored, original);
    }

    #[test]
    fn toggle_connected_returns_new_value() {
        let state = DeviceState::new();
        assert!(state.toggle_connected());
        assert!(state.is_connected());
        assert!(!state.toggle_connected());
        assert!(!state.is_connected());
    }

    #[test]
    fn counters_increment_independently() {
        let state = DeviceState::new();
        assert_eq!(state.increment_items_collected(), 1);
        assert_eq!(state.increment_items_collected(), 2);
        assert_eq!(state.increment_locations_visited(), 1);
        assert_eq!(state.snapshot_counters(), (2, 1));
    }

    #[test]
    fn battery_percent_is_clamped() {
        let state = DeviceState::new();
        state.set_battery_percent(250);
        assert_eq!(state.battery_percent(), 100);
        state.set_battery_percent(42);
        assert_eq!(state.battery_percent(), 42);
    }
}
