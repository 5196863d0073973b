//! Match phase machine
//!
//! Whether the simulation steps at all is a function of the phase alone.

use super::events::Event;

/// Match phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Power-on, before the first reset
    #[default]
    Idle,
    /// Ball and paddles are simulated every tick
    Playing,
    /// A player reached the winning score; frozen until reset
    Over,
}

impl Phase {
    /// Check if ticks advance the simulation in this phase
    pub fn is_simulating(&self) -> bool {
        matches!(self, Phase::Playing)
    }

    /// Process an event and return the next phase
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Phase::*;

        match (self, event) {
            // Reset is honored everywhere
            (_, Reset) => Playing,

            (Playing, ScoreLimitReached) => Over,

            // Default: stay in current phase
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        assert_eq!(Phase::default(), Phase::Idle);
    }

    #[test]
    fn test_reset_from_any_phase() {
        for phase in [Phase::Idle, Phase::Playing, Phase::Over] {
            assert_eq!(phase.transition(Event::Reset), Phase::Playing);
        }
    }

    #[test]
    fn test_score_limit_ends_match() {
        assert_eq!(
            Phase::Playing.transition(Event::ScoreLimitReached),
            Phase::Over
        );
    }

    #[test]
    fn test_score_limit_ignored_outside_play() {
        assert_eq!(Phase::Idle.transition(Event::ScoreLimitReached), Phase::Idle);
        assert_eq!(Phase::Over.transition(Event::ScoreLimitReached), Phase::Over);
    }

    #[test]
    fn test_simulating() {
        assert!(Phase::Playing.is_simulating());
        assert!(!Phase::Idle.is_simulating());
        assert!(!Phase::Over.is_simulating());
    }
}
