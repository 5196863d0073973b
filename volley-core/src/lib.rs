//! Board-agnostic match engine for the Volley paddle game
//!
//! This crate contains all game logic that does not depend on specific
//! hardware:
//!
//! - Hardware abstraction traits (switches, reset button, tick, digits)
//! - Integer physics: rotation, collision response, ball and paddle motion
//! - Switch decoding and the match clock
//! - Phase machine and the match controller
//! - Scoreboard digits and configuration types
//!
//! Everything runs in whole pixels per fixed 100 ms tick. No floating
//! point, no heap.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod display;
pub mod input;
pub mod physics;
pub mod state;
pub mod timing;
pub mod traits;

pub use controller::{MatchController, TickReport};
