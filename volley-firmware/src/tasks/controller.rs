//! Match controller task
//!
//! The sole owner of the match. Wakes on every tick, and often enough in
//! between to honor the reset button promptly.

use defmt::*;
use embassy_futures::select::select;
use embassy_rp::gpio::Input;
use embassy_time::Timer;

use volley_core::config::GameConfig;
use volley_core::MatchController;
use volley_drivers::{DigitLatch, PanelBoard, ResetPin, SwitchBank, TickFlag};

use crate::tasks::tick::TICK_WAKE;

/// Number of switches wired on the panel
pub const SWITCH_COUNT: usize = 10;

/// Reset button poll period between ticks
pub const RESET_POLL_MS: u64 = 10;

/// Scoreboard digits, read by the external display
pub static DIGITS: DigitLatch = DigitLatch::new();

/// The board the firmware runs the match on
pub type FirmwareBoard = PanelBoard<
    SwitchBank<Input<'static>, SWITCH_COUNT>,
    ResetPin<Input<'static>>,
    &'static TickFlag,
    &'static DigitLatch,
>;

/// Controller task - main match loop
#[embassy_executor::task]
pub async fn controller_task(mut board: FirmwareBoard, config: GameConfig) {
    info!("Controller task started, waiting for reset");

    let mut controller = MatchController::new(config);

    loop {
        select(TICK_WAKE.wait(), Timer::after_millis(RESET_POLL_MS)).await;

        let Some(report) = controller.poll(&mut board) else {
            continue;
        };

        if report.stepped {
            trace!("{}", controller.snapshot());
        }
        if report.scorer.is_some() {
            debug!("scoreboard {}", DIGITS.read_all());
        }
    }
}
