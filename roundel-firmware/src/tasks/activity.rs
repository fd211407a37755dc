//! Background activity task
//!
//! Simulates the companion device's periodic events on a 100 ms poll:
//! while connected, items are collected every 5 s with auto-catch on
//! and locations visited every 7 s with auto-spin on. Fires increment
//! the shared counters and queue label updates for the render task.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use roundel_core::activity::{ActivityConfig, ActivityEngine};
use roundel_core::events::UiCommand;
use roundel_core::state::DeviceState;

use crate::channels::UI_COMMANDS;

/// Battery percentage shown after a catch event
const BATTERY_AFTER_CATCH: u8 = 95;

/// Battery percentage shown after a spin event
const BATTERY_AFTER_SPIN: u8 = 94;

/// Background activity task
#[embassy_executor::task]
pub async fn activity_task(state: &'static DeviceState) {
    info!("Activity task started");

    let config = ActivityConfig::default();
    let mut engine = ActivityEngine::new(config, 0);
    let mut ticker = Ticker::every(Duration::from_millis(config.poll_interval_ms as u64));
    let start = Instant::now();

    loop {
        ticker.next().await;

        let now_ms = start.elapsed().as_millis() as u32;
        let report = engine.update(
            now_ms,
            state.is_connected(),
            state.auto_catch_enabled(),
            state.auto_spin_enabled(),
        );

        if report.caught {
            let total = state.increment_items_collected();
            state.set_battery_percent(BATTERY_AFTER_CATCH);
            info!("Item collected, total: {}", total);
            push_counters(state);
            let _ = UI_COMMANDS.try_send(UiCommand::PlayCatchFeedback);
        }

        if report.spun {
            let total = state.increment_locations_visited();
            state.set_battery_percent(BATTERY_AFTER_SPIN);
            info!("Location visited, total: {}", total);
            push_counters(state);
        }
    }
}

fn push_counters(state: &DeviceState) {
    let (items, locations) = state.snapshot_counters();
    let command = UiCommand::SetCounters {
        items,
        locations,
        battery_percent: state.battery_percent(),
    };
    if UI_COMMANDS.try_send(command).is_err() {
        warn!("UI command queue full, dropping counter update");
    }
}
