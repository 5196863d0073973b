//! Integer physics
//!
//! Discrete rotation, collision response, ball and paddle motion.
//! Everything is whole pixels per tick.

pub mod ball;
pub mod collision;
pub mod paddle;
pub mod vector;

pub use ball::{BallState, BallStep};
pub use collision::Contact;
pub use paddle::PaddleState;
pub use vector::{rotate, AngleBucket, Rotation, Vector2};
