//! The single mutable match record
//!
//! One `MatchState` lives for the whole program and is reinitialized in
//! place on every reset.

use super::machine::Phase;
use crate::config::GameConfig;
use crate::input::ModeFlags;
use crate::physics::{BallState, PaddleState};
use crate::timing::GameClock;

/// A player, identified by court side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Player {
    /// Left paddle
    One,
    /// Right paddle
    Two,
}

impl Player {
    /// Index into `scores` and `paddles`
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// Complete match state
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatchState {
    pub ball: BallState,
    /// Player 1 then player 2
    pub paddles: [PaddleState; 2],
    /// Player 1 then player 2
    pub scores: [u32; 2],
    /// Mode flags applied on the latest tick
    pub flags: ModeFlags,
    pub phase: Phase,
    pub clock: GameClock,
}

impl MatchState {
    /// Power-on state: centered, scoreless, idle
    pub const fn new(config: &GameConfig) -> Self {
        Self {
            ball: BallState::served(config, config.ball_size),
            paddles: [PaddleState::centered(config), PaddleState::centered(config)],
            scores: [0, 0],
            flags: ModeFlags::NONE,
            phase: Phase::Idle,
            clock: GameClock::new(),
        }
    }

    /// Reinitialize every sub-state except the phase
    pub fn reset(&mut self, config: &GameConfig) {
        let phase = self.phase;
        *self = Self::new(config);
        self.phase = phase;
    }

    /// Add exactly one point
    pub fn award_point(&mut self, player: Player) {
        let score = &mut self.scores[player.index()];
        *score = score.saturating_add(1);
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    /// First player at or above `winning_score`
    pub fn winner(&self, winning_score: u32) -> Option<Player> {
        [Player::One, Player::Two]
            .into_iter()
            .find(|&player| self.score(player) >= winning_score)
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.clock.seconds()
    }

    pub fn elapsed_minutes(&self) -> u32 {
        self.clock.minutes()
    }
}
