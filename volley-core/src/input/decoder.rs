//! Switch bitmask decoding
//!
//! Turns the raw 16-bit switch word into paddle velocities and mode flags.
//! Decoding is a pure function of the bitmask; nothing is latched.

use crate::config::{GameConfig, SwitchMap};

/// Game modes selected on the switch bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeFlags {
    /// Ball uses `mega_ball_size`
    pub mega_ball: bool,
    /// Both paddles use `precision_paddle_height`
    pub precision_pong: bool,
    /// Ball speeds up every escalation period
    pub fast_ball: bool,
    /// Player 1 directions swapped
    pub reverse1: bool,
    /// Player 2 directions swapped
    pub reverse2: bool,
}

impl ModeFlags {
    /// Every mode off
    pub const NONE: Self = Self {
        mega_ball: false,
        precision_pong: false,
        fast_ball: false,
        reverse1: false,
        reverse2: false,
    };
}

/// One decoded switch word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecodedInput {
    /// Requested player 1 velocity, before reversal
    pub p1_velocity: i32,
    /// Requested player 2 velocity, before reversal
    pub p2_velocity: i32,
    pub flags: ModeFlags,
}

/// Decoder bound to a switch layout and paddle speed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputDecoder {
    switches: SwitchMap,
    paddle_speed: i32,
}

#[inline]
const fn bit(bitmask: u16, index: u8) -> bool {
    index < 16 && bitmask & (1 << index) != 0
}

/// Velocity for a pair of opposing direction switches
///
/// Both or neither held means no movement.
const fn axis(up: bool, down: bool, speed: i32) -> i32 {
    match (up, down) {
        (true, false) => speed,
        (false, true) => -speed,
        _ => 0,
    }
}

impl InputDecoder {
    pub const fn new(switches: SwitchMap, paddle_speed: i32) -> Self {
        Self {
            switches,
            paddle_speed,
        }
    }

    pub const fn from_config(config: &GameConfig) -> Self {
        Self::new(config.switches, config.paddle_speed)
    }

    pub const fn switches(&self) -> &SwitchMap {
        &self.switches
    }

    /// Decode one switch word
    pub const fn decode(&self, bitmask: u16) -> DecodedInput {
        let map = &self.switches;
        let speed = self.paddle_speed;

        DecodedInput {
            p1_velocity: axis(bit(bitmask, map.p1_up), bit(bitmask, map.p1_down), speed),
            p2_velocity: axis(bit(bitmask, map.p2_up), bit(bitmask, map.p2_down), speed),
            flags: ModeFlags {
                mega_ball: bit(bitmask, map.mega_ball),
                precision_pong: bit(bitmask, map.precision_pong),
                fast_ball: bit(bitmask, map.fast_ball),
                reverse1: bit(bitmask, map.reverse1),
                reverse2: bit(bitmask, map.reverse2),
            },
        }
    }
}
