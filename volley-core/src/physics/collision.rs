//! Collision classification and response
//!
//! A contact only counts while the ball is moving into the surface, so a
//! resolved ball that still overlaps a wall or paddle on the next tick is
//! not bounced a second time.

use super::ball::BallState;
use super::paddle::PaddleState;
use super::vector::{rotate, Rotation, Vector2};
use crate::config::GameConfig;

/// Nudge applied to a ball moving purely along y (snaps to 15°)
pub const VERTICAL_NUDGE_DEGREES: i32 = 5;

/// Deflection added to a flat return off a paddle
pub const FLAT_RETURN_DEGREES: i32 = 45;

/// What the ball touched this step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Contact {
    #[default]
    None,
    /// Top or bottom wall
    Wall,
    /// Player 1 paddle (left)
    Paddle1,
    /// Player 2 paddle (right)
    Paddle2,
}

impl Contact {
    pub const fn is_paddle(&self) -> bool {
        matches!(self, Contact::Paddle1 | Contact::Paddle2)
    }
}

/// Player 1's paddle x-band `(left, right)`
pub const fn paddle1_band(config: &GameConfig) -> (i32, i32) {
    (config.paddle_inset, config.paddle_inset + config.paddle_width)
}

/// Player 2's paddle x-band `(left, right)`
pub const fn paddle2_band(config: &GameConfig) -> (i32, i32) {
    let right = config.screen_width - config.paddle_inset;
    (right - config.paddle_width, right)
}

/// Work out which surface, if any, the ball hit on its latest move
///
/// Paddles are tested against the horizontal sweep of this step so a fast
/// ball cannot tunnel through the band. Paddles win over walls.
pub fn classify(
    ball: &BallState,
    paddle1: &PaddleState,
    paddle2: &PaddleState,
    config: &GameConfig,
) -> Contact {
    let Vector2 { dx, dy } = ball.velocity;
    let (ball_lo, ball_hi) = (ball.y, ball.y + ball.size - 1);

    if dx < 0 {
        let (left, right) = paddle1_band(config);
        let previous = ball.x - dx;
        if ball.x <= right && previous >= left && paddle1.covers(ball_lo, ball_hi) {
            return Contact::Paddle1;
        }
    }

    if dx > 0 {
        let (left, right) = paddle2_band(config);
        let leading = ball.x + ball.size - 1;
        let previous = leading - dx;
        if leading >= left && previous <= right && paddle2.covers(ball_lo, ball_hi) {
            return Contact::Paddle2;
        }
    }

    if (ball.y <= 0 && dy < 0) || (ball.y + ball.size > config.screen_height && dy > 0) {
        return Contact::Wall;
    }

    Contact::None
}

/// Ball center lies in the half of the court nearest y = 0
fn in_low_half(ball: &BallState, config: &GameConfig) -> bool {
    ball.y + ball.size / 2 < config.center_y()
}

/// Post-collision velocity
///
/// Rules in priority order: a purely horizontal ball is sent straight
/// back, a purely vertical ball gets a small clockwise nudge, a wall hit
/// turns the ball 90° away from the wall it was moving into (the sign of
/// dy picks the wall), a paddle hit reverses dx.
pub fn resolve(ball: &BallState, contact: Contact) -> Vector2 {
    let v = ball.velocity;

    if contact == Contact::None {
        return v;
    }

    if v.dy == 0 {
        return Vector2::new(-v.dx, v.dy);
    }

    if v.dx == 0 {
        return rotate(v, VERTICAL_NUDGE_DEGREES, Rotation::Clockwise);
    }

    match contact {
        Contact::Wall => {
            // ccw sets dy' = dx, cw sets dy' = -dx; pick whichever leaves the wall
            let direction = if (v.dy < 0) == (v.dx > 0) {
                Rotation::CounterClockwise
            } else {
                Rotation::Clockwise
            };
            rotate(v, 90, direction)
        }
        Contact::Paddle1 | Contact::Paddle2 => Vector2::new(-v.dx, v.dy),
        Contact::None => v,
    }
}

/// Resolve a contact in place
///
/// Besides [`resolve`], a flat return off a paddle is angled 45° away from
/// the horizontal center line, and the ball is pulled back onto the surface
/// it hit: the court-side face of a paddle or the inside of a wall.
pub fn apply(ball: &mut BallState, contact: Contact, config: &GameConfig) {
    if contact == Contact::None {
        return;
    }

    let flat = ball.velocity.dy == 0;
    let mut velocity = resolve(ball, contact);

    if contact.is_paddle() && flat && velocity.dx != 0 {
        // ccw gives dy' the sign of dx'; cw the opposite
        let want_high = !in_low_half(ball, config);
        let direction = if want_high == (velocity.dx > 0) {
            Rotation::CounterClockwise
        } else {
            Rotation::Clockwise
        };
        velocity = rotate(velocity, FLAT_RETURN_DEGREES, direction);
    }

    match contact {
        Contact::Wall => {
            ball.y = ball.y.clamp(0, config.screen_height - ball.size);
        }
        Contact::Paddle1 => {
            let (_, right) = paddle1_band(config);
            ball.x = ball.x.max(right);
        }
        Contact::Paddle2 => {
            let (left, _) = paddle2_band(config);
            ball.x = ball.x.min(left - ball.size + 1);
        }
        Contact::None => {}
    }

    ball.velocity = velocity;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    fn ball(x: i32, y: i32, dx: i32, dy: i32) -> BallState {
        BallState {
            x,
            y,
            velocity: Vector2::new(dx, dy),
            size: 3,
        }
    }

    fn paddles(config: &GameConfig) -> (PaddleState, PaddleState) {
        (PaddleState::centered(config), PaddleState::centered(config))
    }

    #[test]
    fn test_horizontal_ball_flips_for_every_contact() {
        for contact in [Contact::Wall, Contact::Paddle1, Contact::Paddle2] {
            let b = ball(100, 100, -3, 0);
            assert_eq!(resolve(&b, contact), Vector2::new(3, 0));
        }
    }

    #[test]
    fn test_no_contact_leaves_velocity() {
        let b = ball(100, 100, -3, 2);
        assert_eq!(resolve(&b, Contact::None), Vector2::new(-3, 2));
    }

    #[test]
    fn test_vertical_ball_is_nudged() {
        let b = ball(100, 238, 0, 3);
        assert_eq!(resolve(&b, Contact::Wall), Vector2::new(-1, -3));

        let b = ball(100, 0, 0, -3);
        assert_eq!(resolve(&b, Contact::Wall), Vector2::new(1, 3));
    }

    #[test]
    fn test_wall_hit_leaves_low_wall() {
        // Moving left into y = 0: cw gives (-dy, -dx) = (2, 3)
        let b = ball(100, 0, -3, -2);
        let v = resolve(&b, Contact::Wall);
        assert_eq!(v, Vector2::new(2, 3));
        assert!(v.dy > 0);

        // Moving right into y = 0: ccw gives (-dy, dx) = (2, 3)
        let b = ball(100, 0, 3, -2);
        let v = resolve(&b, Contact::Wall);
        assert!(v.dy > 0);
    }

    #[test]
    fn test_wall_hit_leaves_high_wall() {
        let b = ball(100, 238, 3, 2);
        assert!(resolve(&b, Contact::Wall).dy < 0);
        let b = ball(100, 238, -3, 2);
        assert!(resolve(&b, Contact::Wall).dy < 0);
    }

    #[test]
    fn test_wall_side_follows_direction_of_travel() {
        // Center in the high half but moving toward y = 0
        let b = ball(100, 200, 3, -2);
        assert!(resolve(&b, Contact::Wall).dy > 0);
        let b = ball(100, 200, -3, -2);
        assert!(resolve(&b, Contact::Wall).dy > 0);

        // Center in the low half but moving toward y = height
        let b = ball(100, 10, 3, 2);
        assert!(resolve(&b, Contact::Wall).dy < 0);
        let b = ball(100, 10, -3, 2);
        assert!(resolve(&b, Contact::Wall).dy < 0);
    }

    #[test]
    fn test_paddle_hit_reverses_dx() {
        let b = ball(14, 110, -3, 2);
        assert_eq!(resolve(&b, Contact::Paddle1), Vector2::new(3, 2));
    }

    #[test]
    fn test_classify_wall() {
        let config = config();
        let (p1, p2) = paddles(&config);
        assert_eq!(classify(&ball(100, -1, 2, -3), &p1, &p2, &config), Contact::Wall);
        assert_eq!(classify(&ball(100, 238, 2, 3), &p1, &p2, &config), Contact::Wall);
        // Already moving away: no contact
        assert_eq!(classify(&ball(100, -1, 2, 3), &p1, &p2, &config), Contact::None);
        assert_eq!(classify(&ball(100, 120, 2, 3), &p1, &p2, &config), Contact::None);
    }

    #[test]
    fn test_classify_paddles() {
        let config = config();
        let (p1, p2) = paddles(&config);

        // Band 8..=16 on the left, centered paddle spans 105..=135
        assert_eq!(classify(&ball(13, 119, -3, 0), &p1, &p2, &config), Contact::Paddle1);
        // Same spot, moving away
        assert_eq!(classify(&ball(13, 119, 3, 0), &p1, &p2, &config), Contact::None);
        // In the band but above the paddle
        assert_eq!(classify(&ball(13, 40, -3, 0), &p1, &p2, &config), Contact::None);

        // Band 304..=312 on the right; leading edge = x + 2
        assert_eq!(classify(&ball(303, 119, 3, 0), &p1, &p2, &config), Contact::Paddle2);
        assert_eq!(classify(&ball(303, 119, -3, 0), &p1, &p2, &config), Contact::None);
    }

    #[test]
    fn test_classify_fast_ball_cannot_tunnel() {
        let config = config();
        let (p1, p2) = paddles(&config);
        // Jumped from x = 20 to x = 4 in one step, straight over the band
        assert_eq!(classify(&ball(4, 119, -16, 0), &p1, &p2, &config), Contact::Paddle1);
    }

    #[test]
    fn test_flat_paddle_return_is_angled_away_from_center() {
        let config = config();

        // Ball below center line: sent toward y = 0
        let mut b = ball(13, 100, -3, 0);
        apply(&mut b, Contact::Paddle1, &config);
        assert!(b.velocity.dx > 0);
        assert!(b.velocity.dy < 0);

        // Ball above center line: sent toward y = height
        let mut b = ball(303, 125, 3, 0);
        apply(&mut b, Contact::Paddle2, &config);
        assert!(b.velocity.dx < 0);
        assert!(b.velocity.dy > 0);
    }

    #[test]
    fn test_apply_keeps_ball_on_paddle_face() {
        let config = config();
        let mut b = ball(2, 119, -8, 2);
        apply(&mut b, Contact::Paddle1, &config);
        assert_eq!(b.x, 16);
        assert_eq!(b.velocity, Vector2::new(8, 2));

        let mut b = ball(315, 119, 8, 2);
        apply(&mut b, Contact::Paddle2, &config);
        // Trailing pixel on the face at x = 304
        assert_eq!(b.x, 302);
        assert_eq!(b.velocity, Vector2::new(-8, 2));
    }

    #[test]
    fn test_apply_clamps_wall_contact() {
        let config = config();
        let mut b = ball(100, -2, 3, -3);
        apply(&mut b, Contact::Wall, &config);
        assert_eq!(b.y, 0);
        assert!(b.velocity.dy > 0);

        let mut b = ball(100, 239, 3, 3);
        apply(&mut b, Contact::Wall, &config);
        assert_eq!(b.y, 237);
        assert!(b.velocity.dy < 0);
    }

    proptest! {
        #[test]
        fn prop_resolution_never_stalls(
            dx in -8i32..=8,
            dy in -8i32..=8,
            y in 0i32..240,
            which in 0usize..3,
        ) {
            prop_assume!(dx != 0 || dy != 0);
            let contact = [Contact::Wall, Contact::Paddle1, Contact::Paddle2][which];
            let config = config();
            let mut b = ball(160, y, dx, dy);
            apply(&mut b, contact, &config);
            prop_assert!(!b.velocity.is_zero());
        }

        #[test]
        fn prop_wall_contact_leaves_wall(dx in -8i32..=8, dy in 1i32..=8, low in any::<bool>()) {
            let config = config();
            let (p1, p2) = paddles(&config);
            let mut b = if low {
                ball(160, -1, dx, -dy)
            } else {
                ball(160, 239, dx, dy)
            };
            prop_assume!(classify(&b, &p1, &p2, &config) == Contact::Wall);
            apply(&mut b, Contact::Wall, &config);
            if low {
                prop_assert!(b.velocity.dy > 0);
            } else {
                prop_assert!(b.velocity.dy < 0);
            }
        }

        #[test]
        fn prop_returned_ball_clears_paddle_band(
            x in -8i32..=20,
            dx in 1i32..=8,
            dy in -8i32..=8,
            size in 3i32..=30,
        ) {
            let config = config();
            let (_, p1_right) = paddle1_band(&config);
            let (p2_left, _) = paddle2_band(&config);

            let mut b = BallState { x, y: 110, velocity: Vector2::new(-dx, dy), size };
            apply(&mut b, Contact::Paddle1, &config);
            prop_assert!(b.x >= p1_right);

            let mirrored = config.screen_width - x - size;
            let mut b = BallState { x: mirrored, y: 110, velocity: Vector2::new(dx, dy), size };
            apply(&mut b, Contact::Paddle2, &config);
            prop_assert!(b.x + b.size - 1 <= p2_left);
        }

        #[test]
        fn prop_paddle_contact_leaves_paddle(dx in 1i32..=8, dy in -8i32..=8, right in any::<bool>()) {
            let config = config();
            let contact = if right { Contact::Paddle2 } else { Contact::Paddle1 };
            let mut b = if right {
                ball(303, 119, dx, dy)
            } else {
                ball(13, 119, -dx, dy)
            };
            apply(&mut b, contact, &config);
            if right {
                prop_assert!(b.velocity.dx < 0);
            } else {
                prop_assert!(b.velocity.dx > 0);
            }
        }
    }
}
