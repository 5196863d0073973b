//! Game parameter definitions
//!
//! Court geometry, sizes and speeds. All values are in pixels or
//! pixels-per-tick; the engine never uses floating point.

use super::hardware::SwitchMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default court width in pixels
pub const DEFAULT_SCREEN_WIDTH: i32 = 320;

/// Default court height in pixels
pub const DEFAULT_SCREEN_HEIGHT: i32 = 240;

/// Score that ends the match
pub const DEFAULT_WINNING_SCORE: u32 = 5;

/// Largest accepted court width or height
///
/// Keeps every coordinate and scaled trig product well inside `i32`.
pub const MAX_SCREEN_DIMENSION: i32 = 4096;

/// Errors found while validating a [`GameConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Screen width or height is not positive
    EmptyScreen,
    /// Screen width or height is above [`MAX_SCREEN_DIMENSION`]
    ScreenTooLarge,
    /// A paddle height is zero or taller than the screen
    PaddleTooTall,
    /// A ball size is zero or covers half the screen
    BallTooLarge,
    /// Paddle band does not fit inside the left half of the court
    PaddleOutsideCourt,
    /// Paddle speed is not positive or exceeds the screen height
    InvalidPaddleSpeed,
    /// Serve velocity is zero or above the cap, or the cap or fast-ball
    /// increment is out of range
    InvalidBallSpeed,
    /// Winning score is zero
    InvalidWinningScore,
    /// A switch bit is outside the 16-bit bank or assigned twice
    SwitchConflict,
}

/// Game configuration
///
/// Defaults reproduce the 320x240 VGA board layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct GameConfig {
    /// Court width in pixels
    pub screen_width: i32,
    /// Court height in pixels
    pub screen_height: i32,
    /// Distance of each paddle's outer face from its goal line
    pub paddle_inset: i32,
    /// Paddle thickness along x
    pub paddle_width: i32,
    /// Normal paddle height
    pub paddle_height: i32,
    /// Paddle height while precision-pong is active
    pub precision_paddle_height: i32,
    /// Paddle movement per tick while a direction switch is held
    pub paddle_speed: i32,
    /// Normal ball side length
    pub ball_size: i32,
    /// Ball side length while mega-ball is active
    pub mega_ball_size: i32,
    /// Serve x-velocity after reset and after each goal (negative = toward player 1)
    pub initial_ball_velocity: i32,
    /// Per-axis speed added on each fast-ball escalation
    pub fast_ball_increment: i32,
    /// Upper bound on |dx| and |dy|
    pub max_ball_speed: i32,
    /// Score that ends the match
    pub winning_score: u32,
    /// Switch bit assignments
    pub switches: SwitchMap,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            paddle_inset: 8,
            paddle_width: 8,
            paddle_height: 30,
            precision_paddle_height: 8,
            paddle_speed: 5,
            ball_size: 3,
            mega_ball_size: 30,
            initial_ball_velocity: -3,
            fast_ball_increment: 1,
            max_ball_speed: 8,
            winning_score: DEFAULT_WINNING_SCORE,
            switches: SwitchMap::default(),
        }
    }
}

impl GameConfig {
    /// Horizontal center of the court
    pub const fn center_x(&self) -> i32 {
        self.screen_width / 2
    }

    /// Vertical center of the court
    pub const fn center_y(&self) -> i32 {
        self.screen_height / 2
    }

    /// Paddle height for the current precision-pong setting
    pub const fn paddle_height_for(&self, precision: bool) -> i32 {
        if precision {
            self.precision_paddle_height
        } else {
            self.paddle_height
        }
    }

    /// Ball size for the current mega-ball setting
    pub const fn ball_size_for(&self, mega: bool) -> i32 {
        if mega {
            self.mega_ball_size
        } else {
            self.ball_size
        }
    }

    /// Check that the configuration keeps every engine invariant reachable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return Err(ConfigError::EmptyScreen);
        }
        if self.screen_width > MAX_SCREEN_DIMENSION || self.screen_height > MAX_SCREEN_DIMENSION {
            return Err(ConfigError::ScreenTooLarge);
        }

        for height in [self.paddle_height, self.precision_paddle_height] {
            if height <= 0 || height > self.screen_height {
                return Err(ConfigError::PaddleTooTall);
            }
        }

        for size in [self.ball_size, self.mega_ball_size] {
            if size <= 0 || size > self.screen_height / 2 || size > self.screen_width / 2 {
                return Err(ConfigError::BallTooLarge);
            }
        }

        // Both terms are below center_x once checked, so the subtraction is safe
        if self.paddle_inset <= 0
            || self.paddle_width <= 0
            || self.paddle_inset >= self.center_x()
            || self.paddle_width >= self.center_x() - self.paddle_inset
        {
            return Err(ConfigError::PaddleOutsideCourt);
        }

        if self.paddle_speed <= 0 || self.paddle_speed > self.screen_height {
            return Err(ConfigError::InvalidPaddleSpeed);
        }

        // A ball never moves further than one paddle width or half the
        // court per tick
        if self.max_ball_speed <= 0
            || self.max_ball_speed > self.paddle_width
            || self.max_ball_speed > self.screen_height / 2
        {
            return Err(ConfigError::InvalidBallSpeed);
        }
        if self.initial_ball_velocity == 0
            || self.initial_ball_velocity.unsigned_abs() > self.max_ball_speed.unsigned_abs()
            || self.fast_ball_increment < 0
            || self.fast_ball_increment > self.max_ball_speed
        {
            return Err(ConfigError::InvalidBallSpeed);
        }

        if self.winning_score == 0 {
            return Err(ConfigError::InvalidWinningScore);
        }

        self.switches.validate()
    }
}
