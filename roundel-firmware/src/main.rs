//! Roundel - Round-Display Handheld Firmware
//!
//! Main firmware binary for RP2040-based handhelds with a 240x240
//! round touch panel. Three independent loops share one device state:
//! input polling, background catch/spin activity, and rendering.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{Config as RpI2cConfig, I2c};
use {defmt_rtt as _, panic_probe as _};

use roundel_core::state::DeviceState;
use roundel_drivers::touch::{Cst816, TouchConfig};
use roundel_hal::{I2cConfig, OutputPin as _};
use roundel_hal_rp2040::gpio::{InputPin, OutputPin};
use roundel_hal_rp2040::i2c::BlockingI2c;

mod channels;
mod display;
mod tasks;

/// Shared device state, read and written by all tasks
static DEVICE: DeviceState = DeviceState::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Roundel firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Display backlight (board: GPIO3)
    let mut backlight = OutputPin::new(Output::new(p.PIN_3, Level::Low));
    backlight.set_high();

    // Touch controller on I2C0 (board: SDA=GPIO4, SCL=GPIO5)
    let bus_config = I2cConfig::FAST;
    let mut i2c_config = RpI2cConfig::default();
    i2c_config.frequency = bus_config.frequency;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);
    let bus = BlockingI2c::new(i2c);

    let mut touch = Cst816::new(bus, TouchConfig::default());
    match touch.init() {
        Some(version) => info!("Touch controller ready, chip version {:#04x}", version),
        None => warn!("Touch controller not responding, continuing without it"),
    }

    // Physical button, active-low with internal pull-up (board: GPIO9)
    let button = InputPin::new(Input::new(p.PIN_9, Pull::Up));

    info!("Input peripherals initialized");

    let backend = display::PanelBackend::new();

    // Spawn tasks
    spawner.spawn(tasks::input_task(button, touch, &DEVICE)).unwrap();
    spawner.spawn(tasks::activity_task(&DEVICE)).unwrap();
    spawner.spawn(tasks::render_task(backend, &DEVICE)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
