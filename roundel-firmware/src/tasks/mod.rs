//! Embassy async tasks
//!
//! Each control loop runs as an independent task and communicates via
//! the channels in `crate::channels` and the shared `DeviceState`.

pub mod activity;
pub mod input;
pub mod render;

pub use activity::activity_task;
pub use input::input_task;
pub use render::render_task;
