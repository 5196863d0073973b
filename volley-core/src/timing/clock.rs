//! Match clock
//!
//! Counts fixed ticks into whole seconds and hands out one fast-ball
//! escalation permit every [`SECONDS_PER_ESCALATION`] seconds.

/// Ticks in one second of match time
pub const TICKS_PER_SECOND: u32 = 10;

/// Tick period in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1000 / TICKS_PER_SECOND as u64;

/// Seconds between fast-ball escalations
pub const SECONDS_PER_ESCALATION: u32 = 2;

/// What a single tick did to the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockEvent {
    /// A whole second elapsed on this tick
    pub second_elapsed: bool,
    /// An escalation permit was granted on this tick
    pub escalation_granted: bool,
}

/// Tick and second counters plus the pending escalation permit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameClock {
    /// Ticks since the last whole second, always below `TICKS_PER_SECOND`
    ticks: u32,
    /// Whole seconds since reset
    seconds: u32,
    escalation_pending: bool,
}

impl GameClock {
    pub const fn new() -> Self {
        Self {
            ticks: 0,
            seconds: 0,
            escalation_pending: false,
        }
    }

    /// Advance by one tick
    pub fn tick(&mut self) -> ClockEvent {
        self.ticks += 1;
        if self.ticks < TICKS_PER_SECOND {
            return ClockEvent::default();
        }

        self.ticks = 0;
        self.seconds = self.seconds.wrapping_add(1);

        let escalation_granted = self.seconds % SECONDS_PER_ESCALATION == 0;
        if escalation_granted {
            self.escalation_pending = true;
        }

        ClockEvent {
            second_elapsed: true,
            escalation_granted,
        }
    }

    /// Consume the escalation permit
    ///
    /// Returns `true` at most once per grant.
    pub fn take_escalation(&mut self) -> bool {
        core::mem::take(&mut self.escalation_pending)
    }

    /// Seconds field of the elapsed time (0-59)
    pub const fn seconds(&self) -> u32 {
        self.seconds % 60
    }

    /// Minutes field of the elapsed time
    pub const fn minutes(&self) -> u32 {
        self.seconds / 60
    }
}
