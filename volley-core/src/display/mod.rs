//! Display output
//!
//! The scoreboard digits and the per-tick court snapshot.

pub mod scoreboard;
pub mod snapshot;

pub use scoreboard::{digits_for, flush, DigitUpdate, DigitUpdates, Scoreboard};
pub use snapshot::Snapshot;
