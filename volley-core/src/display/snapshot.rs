//! Renderable view of the court

use crate::physics::{BallState, PaddleState};
use crate::state::{MatchState, Phase};

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub ball: BallState,
    pub paddles: [PaddleState; 2],
    pub phase: Phase,
}

impl From<&MatchState> for Snapshot {
    fn from(state: &MatchState) -> Self {
        Self {
            ball: state.ball,
            paddles: state.paddles,
            phase: state.phase,
        }
    }
}
