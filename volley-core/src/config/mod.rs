//! Configuration types
//!
//! Board-agnostic game parameters and switch wiring. The firmware bakes a
//! validated copy in at build time; tests construct their own.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
