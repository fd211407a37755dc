//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy
//! tasks. Uses embassy-sync primitives for safe async communication.
//! Producers use try_send and drop on overflow; the render task drains
//! both queues every tick.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use roundel_core::events::{PointerEvent, UiCommand};

/// Channel capacity for pointer events from the input loop
const POINTER_CHANNEL_SIZE: usize = 8;

/// Channel capacity for UI label updates
const UI_CHANNEL_SIZE: usize = 8;

/// Pointer events from the touch poll (pressed at x/y, or released)
pub static POINTER_EVENTS: Channel<CriticalSectionRawMutex, PointerEvent, POINTER_CHANNEL_SIZE> =
    Channel::new();

/// Display updates from the input and activity loops
pub static UI_COMMANDS: Channel<CriticalSectionRawMutex, UiCommand, UI_CHANNEL_SIZE> =
    Channel::new();
