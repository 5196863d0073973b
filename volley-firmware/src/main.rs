//! Volley - two-player paddle game firmware
//!
//! Main firmware binary for RP2040-based game panels. A tick task drives
//! the match clock at a fixed 100 ms and the controller task runs the
//! match from the switch bank, latching scoreboard digits for the display.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use {defmt_rtt as _, panic_probe as _};

use volley_drivers::{PanelBoard, ResetPin, SwitchBank};

mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Volley firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let game_config = config::load();

    // Switch bank: slide switches to 3V3 with pull-downs, switch n on GPIOn
    let switches: [Input<'static>; tasks::SWITCH_COUNT] = [
        Input::new(p.PIN_0, Pull::Down),
        Input::new(p.PIN_1, Pull::Down),
        Input::new(p.PIN_2, Pull::Down),
        Input::new(p.PIN_3, Pull::Down),
        Input::new(p.PIN_4, Pull::Down),
        Input::new(p.PIN_5, Pull::Down),
        Input::new(p.PIN_6, Pull::Down),
        Input::new(p.PIN_7, Pull::Down),
        Input::new(p.PIN_8, Pull::Down),
        Input::new(p.PIN_9, Pull::Down),
    ];
    let switches = SwitchBank::new_active_high(switches);

    // Reset push button to ground
    let reset = ResetPin::new_active_low(Input::new(p.PIN_10, Pull::Up));

    info!("Inputs initialized");

    let board: tasks::FirmwareBoard =
        PanelBoard::new(switches, reset, &tasks::TICK, &tasks::DIGITS);

    // Spawn tasks
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner
        .spawn(tasks::controller_task(board, game_config))
        .unwrap();

    info!("All tasks spawned, press reset to start a match");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
