//! Ball advance, speed-up and goal detection

use super::collision::{apply, classify, Contact};
use super::vector::Vector2;
use crate::config::GameConfig;
use crate::state::{MatchState, Player};

/// The ball's square hitbox and velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BallState {
    /// Left edge in pixels
    pub x: i32,
    /// Edge nearest y = 0, in pixels
    pub y: i32,
    pub velocity: Vector2,
    /// Side length of the hitbox
    pub size: i32,
}

impl BallState {
    /// Ball at screen center with the canonical serve velocity
    pub const fn served(config: &GameConfig, size: i32) -> Self {
        Self {
            x: config.center_x(),
            y: config.center_y(),
            velocity: Vector2::new(config.initial_ball_velocity, 0),
            size,
        }
    }

    /// Put the ball back at center with the serve velocity, keeping its size
    pub fn serve(&mut self, config: &GameConfig) {
        *self = Self::served(config, self.size);
    }
}

/// Grow one velocity component by `increment` without changing its sign
const fn escalate_component(value: i32, increment: i32, max: i32) -> i32 {
    if value == 0 {
        return 0;
    }
    let mut magnitude = value.abs() + increment;
    if magnitude > max {
        magnitude = max;
    }
    if value < 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Apply one fast-ball speed-up to a velocity
///
/// Zero components stay zero so a straight serve stays straight.
pub const fn escalate(velocity: Vector2, config: &GameConfig) -> Vector2 {
    Vector2::new(
        escalate_component(velocity.dx, config.fast_ball_increment, config.max_ball_speed),
        escalate_component(velocity.dy, config.fast_ball_increment, config.max_ball_speed),
    )
}

/// Result of one ball step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BallStep {
    /// Surface hit this step
    pub contact: Contact,
    /// Player awarded a point, if the ball crossed a goal line
    pub scorer: Option<Player>,
}

/// Advance the ball by one tick
///
/// `escalate_now` is the clock's one-shot escalation permit; it only has
/// an effect while fast-ball is on. Paddles are read but never changed.
pub fn step(state: &mut MatchState, escalate_now: bool, config: &GameConfig) -> BallStep {
    let ball = &mut state.ball;
    ball.size = config.ball_size_for(state.flags.mega_ball);

    if state.flags.fast_ball && escalate_now {
        ball.velocity = escalate(ball.velocity, config);
    }

    ball.x += ball.velocity.dx;
    ball.y += ball.velocity.dy;

    let [paddle1, paddle2] = &state.paddles;
    let contact = classify(ball, paddle1, paddle2, config);
    apply(ball, contact, config);

    let scorer = if ball.x <= 0 {
        Some(Player::Two)
    } else if ball.x >= config.screen_width {
        Some(Player::One)
    } else {
        None
    };

    if let Some(player) = scorer {
        state.award_point(player);
        state.ball.serve(config);
    }

    BallStep { contact, scorer }
}
