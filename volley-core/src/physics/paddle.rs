//! Paddle motion with boundary lockout
//!
//! A paddle that has left the court is never teleported back; it simply
//! refuses any velocity that would carry it further out.

use crate::config::GameConfig;

/// One player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PaddleState {
    /// Vertical center in pixels
    pub center_y: i32,
    /// Velocity requested by the input decoder this tick
    pub velocity: i32,
    /// Current height in pixels
    pub height: i32,
    /// Controls are reversed for this paddle
    pub reversed: bool,
}

impl PaddleState {
    /// Paddle at mid-court with normal height
    pub const fn centered(config: &GameConfig) -> Self {
        Self {
            center_y: config.center_y(),
            velocity: 0,
            height: config.paddle_height,
            reversed: false,
        }
    }

    /// Edge nearest y = 0
    pub const fn low_edge(&self) -> i32 {
        self.center_y - self.height / 2
    }

    /// Edge nearest y = screen_height
    pub const fn high_edge(&self) -> i32 {
        self.center_y + self.height / 2
    }

    /// Whole paddle lies within `[0, screen_height]`
    pub const fn is_in_bounds(&self, screen_height: i32) -> bool {
        self.low_edge() >= 0 && self.high_edge() <= screen_height
    }

    /// Does the vertical span `[lo, hi]` overlap the paddle face
    pub const fn covers(&self, lo: i32, hi: i32) -> bool {
        hi >= self.low_edge() && lo <= self.high_edge()
    }
}

/// Velocity that will actually move the paddle, after reversal
pub const fn applied_velocity(paddle: &PaddleState, input_velocity: i32) -> i32 {
    if paddle.reversed {
        -input_velocity
    } else {
        input_velocity
    }
}

/// Advance one paddle by one tick
///
/// In bounds, the applied velocity is used as-is. Past the low edge only
/// positive velocity is accepted, past the high edge only negative.
pub fn step(paddle: &mut PaddleState, input_velocity: i32, config: &GameConfig) {
    paddle.velocity = input_velocity;
    let applied = applied_velocity(paddle, input_velocity);

    let allowed = if paddle.is_in_bounds(config.screen_height) {
        true
    } else if paddle.low_edge() < 0 {
        applied > 0
    } else {
        applied < 0
    };

    if allowed {
        paddle.center_y += applied;
    }
}
