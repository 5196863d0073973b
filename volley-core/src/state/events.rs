//! Events that trigger phase transitions

/// Events that can trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Reset button held during a loop iteration
    Reset,
    /// A player's score reached the winning score
    ScoreLimitReached,
}
