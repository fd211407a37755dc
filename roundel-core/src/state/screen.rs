//! Screen navigation state machine
//!
//! Which screen is loaded is a function of the current screen and a
//! widget tap routed through the render loop.

use crate::events::UiEvent;

/// Screens the UI layer can load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Screen {
    /// Status, counters, and toggle buttons
    Main = 0,
    /// Settings with a back button
    Settings = 1,
    /// Statistics; reachable only via `switch_screen`, no bound control
    Stats = 2,
}

impl Screen {
    /// Recover a screen from its stored discriminant
    pub fn from_id(id: u8) -> Self {
        match id {
            1 => Screen::Settings,
            2 => Screen::Stats,
            _ => Screen::Main,
        }
    }

    /// Process a widget tap and return the next screen
    ///
    /// Taps that do not navigate (the toggles) and taps with no binding
    /// on the current screen keep the current screen.
    pub fn transition(self, event: UiEvent) -> Self {
        use Screen::*;
        use UiEvent::*;

        match (self, event) {
            (Main, SettingsTap) => Settings,
            (Settings, BackTap) => Main,

            // Default: stay on current screen
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_to_settings_and_back() {
        let screen = Screen::Main;
        let settings = screen.transition(UiEvent::SettingsTap);
        assert_eq!(settings, Screen::Settings);

        let main = settings.transition(UiEvent::BackTap);
        assert_eq!(main, Screen::Main);
    }

    #[test]
    fn toggles_do_not_navigate() {
        assert_eq!(Screen::Main.transition(UiEvent::AutoCatchTap), Screen::Main);
        assert_eq!(Screen::Main.transition(UiEvent::AutoSpinTap), Screen::Main);
    }

    #[test]
    fn unbound_taps_keep_screen() {
        // Back has no binding on the main screen, settings none on settings
        assert_eq!(Screen::Main.transition(UiEvent::BackTap), Screen::Main);
        assert_eq!(
            Screen::Settings.transition(UiEvent::SettingsTap),
            Screen::Settings
        );
        // Stats has no bound controls at all
        for event in [
            UiEvent::AutoCatchTap,
            UiEvent::AutoSpinTap,
            UiEvent::SettingsTap,
            UiEvent::BackTap,
        ] {
            assert_eq!(Screen::Stats.transition(event), Screen::Stats);
        }
    }

    #[test]
    fn id_round_trip() {
        for screen in [Screen::Main, Screen::Settings, Screen::Stats] {
            assert_eq!(Screen::from_id(screen as u8), screen);
        }
    }
}
