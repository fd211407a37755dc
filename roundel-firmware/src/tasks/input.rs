//! Input poll task
//!
//! Samples the physical button and the touch controller at a fixed
//! 50 ms rate. A button press flips the connection flag and queues a
//! status refresh; the press is then held off for the 500 ms debounce
//! window, so a held button toggles once per window. The debounce is
//! tracked with timestamps rather than by sleeping through the window,
//! so touch polling never stalls while the button is held.
//!
//! Every iteration also polls the touch driver and forwards the result
//! into the pointer channel; a bus error maps to a released pointer
//! (fail-open), never to an error the UI would see.

use defmt::*;
use embassy_rp::peripherals::I2C0;
use embassy_time::{Duration, Instant, Ticker};

use roundel_core::events::UiCommand;
use roundel_core::input::{pointer_from_touch, ButtonDebounce, InputConfig};
use roundel_core::state::DeviceState;
use roundel_drivers::touch::Cst816;
use roundel_hal::InputPin as _;
use roundel_hal_rp2040::gpio::InputPin;
use roundel_hal_rp2040::i2c::BlockingI2c;

use crate::channels::{POINTER_EVENTS, UI_COMMANDS};

/// Input poll task - physical button plus touch forwarding
#[embassy_executor::task]
pub async fn input_task(
    button: InputPin<'static>,
    mut touch: Cst816<BlockingI2c<'static, I2C0>>,
    state: &'static DeviceState,
) {
    info!("Input task started");

    let config = InputConfig::default();
    let mut debounce = ButtonDebounce::new(config);
    let mut ticker = Ticker::every(Duration::from_millis(config.poll_interval_ms as u64));
    let start = Instant::now();

    loop {
        let now_ms = start.elapsed().as_millis() as u32;

        // Button is active-low with a pull-up
        if debounce.poll(button.is_low(), now_ms) {
            let connected = state.toggle_connected();
            info!("Button pressed, connected: {}", connected);
            if UI_COMMANDS.try_send(UiCommand::SetStatus { connected }).is_err() {
                warn!("UI command queue full, dropping status update");
            }
        }

        // Forward the pointer state every iteration; the render task
        // drains faster than we produce, so try_send rarely drops.
        let pointer = pointer_from_touch(touch.read_touch());
        let _ = POINTER_EVENTS.try_send(pointer);

        ticker.next().await;
    }
}
