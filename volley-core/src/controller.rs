//! Match controller
//!
//! Owns the single match record and runs one loop iteration at a time:
//! reset button, tick flag, simulation step, scoreboard refresh. Every
//! mutation happens in the fixed order decode, paddles, ball, clock, end
//! check.

use crate::config::{ConfigError, GameConfig};
use crate::display::{flush, DigitUpdates, Scoreboard, Snapshot};
use crate::input::InputDecoder;
use crate::physics::{ball, paddle, Contact};
use crate::state::{Event, MatchState, Phase, Player};
use crate::traits::Board;

/// Outcome of one tick
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// The simulation advanced on this tick
    pub stepped: bool,
    /// Surface the ball hit
    pub contact: Contact,
    /// Player who scored on this tick
    pub scorer: Option<Player>,
    /// The match entered `Over` on this tick
    pub match_over: bool,
    /// Scoreboard positions that changed
    pub digits: DigitUpdates,
}

/// Drives a match from power-on to game over and back
#[derive(Debug, Clone)]
pub struct MatchController {
    config: GameConfig,
    decoder: InputDecoder,
    state: MatchState,
    scoreboard: Scoreboard,
}

impl MatchController {
    /// Controller in `Idle` with everything centered
    pub fn new(config: GameConfig) -> Self {
        Self {
            decoder: InputDecoder::from_config(&config),
            state: MatchState::new(&config),
            scoreboard: Scoreboard::new(),
            config,
        }
    }

    /// Controller for a configuration that passes validation
    pub fn try_new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.state)
    }

    /// Start a fresh match
    ///
    /// Returns the full scoreboard so the display shows all zeros.
    pub fn reset(&mut self) -> DigitUpdates {
        self.state.reset(&self.config);
        self.state.phase = self.state.phase.transition(Event::Reset);
        self.scoreboard.invalidate();

        #[cfg(feature = "defmt")]
        defmt::info!("match reset");

        self.scoreboard.refresh(&self.state)
    }

    /// Run one tick with the given switch word
    ///
    /// Outside `Playing` nothing moves and an empty report is returned.
    pub fn tick(&mut self, bitmask: u16) -> TickReport {
        if !self.state.phase.is_simulating() {
            return TickReport::default();
        }

        let config = &self.config;
        let state = &mut self.state;

        let input = self.decoder.decode(bitmask);
        state.flags = input.flags;

        let height = config.paddle_height_for(input.flags.precision_pong);
        let requests = [
            (input.p1_velocity, input.flags.reverse1),
            (input.p2_velocity, input.flags.reverse2),
        ];
        for (paddle_state, (velocity, reversed)) in state.paddles.iter_mut().zip(requests) {
            paddle_state.height = height;
            paddle_state.reversed = reversed;
            paddle::step(paddle_state, velocity, config);
        }

        let permit = state.clock.take_escalation();
        let step = ball::step(state, permit, config);

        #[cfg(feature = "defmt")]
        {
            if permit && state.flags.fast_ball {
                defmt::debug!("ball speed up: {}", state.ball.velocity);
            }
        }

        let clock = state.clock.tick();

        #[cfg(feature = "defmt")]
        {
            if clock.escalation_granted {
                defmt::debug!("escalation permit at {}s", state.elapsed_seconds());
            }
            if let Some(player) = step.scorer {
                defmt::info!("goal for {}: {} - {}", player, state.scores[0], state.scores[1]);
            }
        }

        let match_over = state.winner(config.winning_score).is_some();
        if match_over {
            state.phase = state.phase.transition(Event::ScoreLimitReached);

            #[cfg(feature = "defmt")]
            {
                if let Some(winner) = state.winner(config.winning_score) {
                    defmt::info!("game over, {} wins", winner);
                }
            }
        }

        // Digits only move on a goal or a second boundary
        let digits = if clock.second_elapsed || step.scorer.is_some() {
            self.scoreboard.refresh(&self.state)
        } else {
            DigitUpdates::new()
        };

        TickReport {
            stepped: true,
            contact: step.contact,
            scorer: step.scorer,
            match_over,
            digits,
        }
    }

    /// One firmware loop iteration
    ///
    /// A held reset button restarts the match. A pending tick is consumed
    /// whatever the phase; it only steps the simulation while `Playing`.
    /// Returns the report when a tick was consumed.
    pub fn poll<B: Board + ?Sized>(&mut self, board: &mut B) -> Option<TickReport> {
        if board.is_pressed() {
            let digits = self.reset();
            flush(board, &digits);
        }

        if !board.take_tick() {
            return None;
        }

        let report = self.tick(board.read_switches());
        flush(board, &report.digits);
        Some(report)
    }
}
