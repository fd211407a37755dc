//! Render task
//!
//! Fixed 10 ms tick that pumps the UI: drains queued pointer events
//! (hit-testing presses against the active screen and routing the
//! resulting taps through the screen state machine and device-state
//! toggles), applies queued label updates to the presenter, and hands
//! the dirty view to the display backend. No business logic lives
//! here; the task must never block past its tick or input latency
//! degrades.

use defmt::*;
use embassy_time::{Duration, Ticker};

use roundel_core::events::{PointerEvent, UiCommand, UiEvent};
use roundel_core::state::DeviceState;
use roundel_core::traits::UiPresenter;
use roundel_display::{hit_test, DisplayBackend, UiModel};

use crate::channels::{POINTER_EVENTS, UI_COMMANDS};
use crate::display::PanelBackend;

/// Render tick interval in milliseconds
const TICK_INTERVAL_MS: u64 = 10;

/// How long the catch highlight stays up, in render ticks (500 ms)
const CATCH_FEEDBACK_TICKS: u8 = 50;

/// Render task - UI pump
#[embassy_executor::task]
pub async fn render_task(mut backend: PanelBackend, state: &'static DeviceState) {
    info!("Render task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));
    let mut ui = UiModel::new();
    let mut pointer_down = false;
    let mut feedback_ticks: u8 = 0;

    loop {
        ticker.next().await;

        // Pointer events: taps fire on the released-to-pressed edge
        while let Ok(event) = POINTER_EVENTS.try_receive() {
            match event {
                PointerEvent::Pressed { x, y } => {
                    if !pointer_down {
                        if let Some(tap) = hit_test(state.screen(), x, y) {
                            handle_tap(tap, state, &mut ui);
                        }
                    }
                    pointer_down = true;
                }
                PointerEvent::Released => pointer_down = false,
            }
        }

        // Label updates from the other loops
        while let Ok(command) = UI_COMMANDS.try_receive() {
            match command {
                UiCommand::SetStatus { connected } => ui.set_connection_label(connected),
                UiCommand::SetCounters {
                    items,
                    locations,
                    battery_percent,
                } => ui.set_counter_displays(items, locations, battery_percent),
                UiCommand::PlayCatchFeedback => {
                    ui.play_catch_feedback();
                    feedback_ticks = CATCH_FEEDBACK_TICKS;
                }
                UiCommand::SwitchScreen(screen) => {
                    state.set_screen(screen);
                    ui.switch_screen(screen);
                }
            }
        }

        if feedback_ticks > 0 {
            feedback_ticks -= 1;
            if feedback_ticks == 0 {
                ui.clear_catch_feedback();
            }
        }

        if ui.is_dirty() && backend.is_ready() {
            if backend.present(&ui.take_view()).is_err() {
                warn!("Panel present failed");
            }
        }
    }
}

/// Route a widget tap into state changes and label updates
fn handle_tap(tap: UiEvent, state: &DeviceState, ui: &mut UiModel) {
    match tap {
        UiEvent::AutoCatchTap => {
            let enabled = state.toggle_auto_catch();
            info!("Auto-catch {}", if enabled { "enabled" } else { "disabled" });
            ui.set_toggle_labels(enabled, state.auto_spin_enabled());
        }
        UiEvent::AutoSpinTap => {
            let enabled = state.toggle_auto_spin();
            info!("Auto-spin {}", if enabled { "enabled" } else { "disabled" });
            ui.set_toggle_labels(state.auto_catch_enabled(), enabled);
        }
        UiEvent::SettingsTap | UiEvent::BackTap => {
            let current = state.screen();
            let next = current.transition(tap);
            if next != current {
                debug!("Screen: {:?} -> {:?}", current, next);
                state.set_screen(next);
                ui.switch_screen(next);
            }
        }
    }
}
