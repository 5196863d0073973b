//! Fixed-tick timing

pub mod clock;

pub use clock::{
    ClockEvent, GameClock, SECONDS_PER_ESCALATION, TICKS_PER_SECOND, TICK_INTERVAL_MS,
};
