//! Match state and phase machine
//!
//! The phase machine is explicit, finite, and deterministic; the match
//! record is the only mutable game data in the program.

pub mod events;
pub mod machine;
pub mod match_state;

pub use events::Event;
pub use machine::Phase;
pub use match_state::{MatchState, Player};
