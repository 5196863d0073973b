//! Embassy async tasks
//!
//! Each task runs independently and communicates via statics/signals.

pub mod controller;
pub mod tick;

pub use controller::{controller_task, FirmwareBoard, DIGITS, SWITCH_COUNT};
pub use tick::{tick_task, TICK};
