//! Switch bank wiring
//!
//! Maps each game input onto one bit of the 16-bit switch bitmask
//! returned by [`SwitchPanel`](crate::traits::SwitchPanel).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::ConfigError;

/// Width of the switch bitmask
pub const SWITCH_BITS: u8 = 16;

/// Bit assignments for every switch the engine reads
///
/// The default layout matches the ten-switch board: player 2 on the two
/// rightmost switches, player 1 on the two leftmost, modes in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SwitchMap {
    /// Player 1 moves toward larger y
    pub p1_up: u8,
    /// Player 1 moves toward smaller y
    pub p1_down: u8,
    /// Player 2 moves toward larger y
    pub p2_up: u8,
    /// Player 2 moves toward smaller y
    pub p2_down: u8,
    /// Reverse player 1 controls
    pub reverse1: u8,
    /// Reverse player 2 controls
    pub reverse2: u8,
    /// Enlarge the ball
    pub mega_ball: u8,
    /// Shrink both paddles
    pub precision_pong: u8,
    /// Speed the ball up over time
    pub fast_ball: u8,
}

impl Default for SwitchMap {
    fn default() -> Self {
        Self {
            p1_up: 9,
            p1_down: 8,
            p2_up: 0,
            p2_down: 1,
            reverse1: 2,
            reverse2: 7,
            mega_ball: 3,
            precision_pong: 4,
            fast_ball: 5,
        }
    }
}

impl SwitchMap {
    /// All assigned bits, in field order
    pub const fn bits(&self) -> [u8; 9] {
        [
            self.p1_up,
            self.p1_down,
            self.p2_up,
            self.p2_down,
            self.reverse1,
            self.reverse2,
            self.mega_ball,
            self.precision_pong,
            self.fast_ball,
        ]
    }

    /// Check every bit fits the bank and no bit drives two inputs
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: u16 = 0;
        for bit in self.bits() {
            if bit >= SWITCH_BITS {
                return Err(ConfigError::SwitchConflict);
            }
            let mask = 1u16 << bit;
            if seen & mask != 0 {
                return Err(ConfigError::SwitchConflict);
            }
            seen |= mask;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_map_is_valid() {
        assert_eq!(SwitchMap::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_leaves_switch_six_free() {
        let bits = SwitchMap::default().bits();
        assert!(!bits.contains(&6));
        assert!(bits.iter().all(|&b| b <= 9));
    }

    #[test]
    fn test_duplicate_bit_rejected() {
        let map = SwitchMap {
            reverse2: 2,
            ..Default::default()
        };
        assert_eq!(map.validate(), Err(ConfigError::SwitchConflict));
    }

    #[test]
    fn test_out_of_bank_bit_rejected() {
        let map = SwitchMap {
            fast_ball: 16,
            ..Default::default()
        };
        assert_eq!(map.validate(), Err(ConfigError::SwitchConflict));
    }
}
