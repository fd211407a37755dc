//! Shared device state and screen navigation

mod device;
mod screen;

pub use device::DeviceState;
pub use screen::Screen;
