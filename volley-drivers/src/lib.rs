//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in volley-core on top of embedded-hal pins:
//!
//! - Switch bank and reset button inputs
//! - Atomic tick flag shared with a timer task
//! - Scoreboard digit latch
//! - A board that bundles them for the match loop

#![no_std]
#![deny(unsafe_code)]

pub mod board;
pub mod button;
pub mod digits;
pub mod switches;
pub mod tick;

pub use board::PanelBoard;
pub use button::ResetPin;
pub use digits::DigitLatch;
pub use switches::SwitchBank;
pub use tick::TickFlag;
