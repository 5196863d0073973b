//! End-to-end match flow through a mock board

use volley_core::config::GameConfig;
use volley_core::state::{Phase, Player};
use volley_core::traits::{DigitDisplay, ResetButton, SwitchPanel, TickSource};
use volley_core::MatchController;

/// Player 1 down switch
const P1_DOWN: u16 = 1 << 8;

#[derive(Default)]
struct MockBoard {
    switches: u16,
    reset_held: bool,
    tick_pending: bool,
    digits: [Option<u8>; 6],
    digit_writes: usize,
}

impl SwitchPanel for MockBoard {
    fn read_switches(&mut self) -> u16 {
        self.switches
    }
}

impl ResetButton for MockBoard {
    fn is_pressed(&mut self) -> bool {
        self.reset_held
    }
}

impl TickSource for MockBoard {
    fn tick_ready(&self) -> bool {
        self.tick_pending
    }

    fn clear_tick(&mut self) {
        self.tick_pending = false;
    }
}

impl DigitDisplay for MockBoard {
    fn display_digit(&mut self, index: u8, digit: u8) {
        assert!(index < 6 && digit <= 9);
        self.digits[index as usize] = Some(digit);
        self.digit_writes += 1;
    }
}

fn press_reset(controller: &mut MatchController, board: &mut MockBoard) {
    board.reset_held = true;
    controller.poll(board);
    board.reset_held = false;
}

/// Raise the tick flag and run one loop iteration
fn run_ticks(controller: &mut MatchController, board: &mut MockBoard, ticks: u32) {
    for _ in 0..ticks {
        board.tick_pending = true;
        controller.poll(board);
        assert!(!board.tick_pending);
    }
}

#[test]
fn idle_until_reset() {
    let mut controller = MatchController::new(GameConfig::default());
    let mut board = MockBoard::default();

    run_ticks(&mut controller, &mut board, 5);
    assert_eq!(controller.phase(), Phase::Idle);
    assert_eq!(controller.state().ball.x, 160);
    assert_eq!(board.digit_writes, 0);

    press_reset(&mut controller, &mut board);
    assert_eq!(controller.phase(), Phase::Playing);
    assert_eq!(board.digits, [Some(0); 6]);
}

#[test]
fn no_tick_no_step() {
    let mut controller = MatchController::new(GameConfig::default());
    let mut board = MockBoard::default();
    press_reset(&mut controller, &mut board);

    for _ in 0..10 {
        assert!(controller.poll(&mut board).is_none());
    }
    assert_eq!(controller.state().ball.x, 160);
}

#[test]
fn one_goal_per_traversal() {
    let mut controller = MatchController::new(GameConfig::default());
    let mut board = MockBoard::default();
    press_reset(&mut controller, &mut board);

    // Hold player 1's paddle against the low wall, clear of the ball's row
    board.switches = P1_DOWN;
    run_ticks(&mut controller, &mut board, 100);

    let state = controller.state();
    assert_eq!(state.scores, [0, 1]);
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(board.digits[5], Some(1));
    assert_eq!(board.digits[0], Some(0));
    // Ten seconds of play
    assert_eq!(board.digits[3], Some(1));
    assert_eq!(board.digits[4], Some(0));
}

#[test]
fn match_ends_at_winning_score_and_freezes() {
    let config = GameConfig::default();
    let mut controller = MatchController::new(config);
    let mut board = MockBoard::default();
    press_reset(&mut controller, &mut board);
    board.switches = P1_DOWN;

    let mut winner = None;
    for _ in 0..1000 {
        board.tick_pending = true;
        if let Some(report) = controller.poll(&mut board) {
            if report.match_over {
                winner = report.scorer;
                break;
            }
        }
    }

    assert_eq!(winner, Some(Player::Two));
    assert_eq!(controller.phase(), Phase::Over);
    assert_eq!(controller.state().scores, [0, config.winning_score]);
    assert_eq!(board.digits[5], Some(5));

    let frozen = controller.snapshot();
    let seconds = controller.state().elapsed_seconds();
    run_ticks(&mut controller, &mut board, 50);
    assert_eq!(controller.snapshot(), frozen);
    assert_eq!(controller.state().elapsed_seconds(), seconds);

    press_reset(&mut controller, &mut board);
    assert_eq!(controller.phase(), Phase::Playing);
    assert_eq!(controller.state().scores, [0, 0]);
    assert_eq!(board.digits, [Some(0); 6]);
}

#[test]
fn held_reset_restarts_every_iteration() {
    let mut controller = MatchController::new(GameConfig::default());
    let mut board = MockBoard::default();
    board.reset_held = true;

    run_ticks(&mut controller, &mut board, 20);

    // Each iteration resets, then runs a single tick
    assert_eq!(controller.phase(), Phase::Playing);
    assert_eq!(controller.state().ball.x, 157);
    assert_eq!(controller.state().elapsed_seconds(), 0);
}
