//! UI event and command model
//!
//! Widget interaction flows through explicit bounded channels: the
//! input loop produces [`PointerEvent`]s, the render loop hit-tests
//! them into [`UiEvent`]s, and the other loops describe label updates
//! as [`UiCommand`]s that the render loop applies each tick.

use crate::state::Screen;

/// Pointer state forwarded to the GUI's input channel
///
/// Produced on every input-poll iteration; a bus error on the touch read
/// maps to `Released` (fail-open).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PointerEvent {
    /// Finger on the panel at panel coordinates
    Pressed { x: u16, y: u16 },
    /// No finger on the panel
    Released,
}

/// Widget tap resolved from a pointer event on the active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiEvent {
    /// Auto-catch toggle button tapped
    AutoCatchTap,
    /// Auto-spin toggle button tapped
    AutoSpinTap,
    /// Settings button tapped (main screen)
    SettingsTap,
    /// Back button tapped (settings screen)
    BackTap,
}

/// Display update requested by the input or activity loops
///
/// Applied to the presenter by the render loop, one queue drain per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiCommand {
    /// Connection status changed
    SetStatus { connected: bool },
    /// Counter/battery labels changed
    SetCounters {
        items: u32,
        locations: u32,
        battery_percent: u8,
    },
    /// Flash the catch feedback highlight
    PlayCatchFeedback,
    /// Load a different screen
    SwitchScreen(Screen),
}
