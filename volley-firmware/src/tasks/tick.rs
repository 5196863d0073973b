//! Tick task for the fixed-rate match clock
//!
//! Raises the shared tick flag every `TICK_INTERVAL_MS` and wakes the
//! controller. Ticks the controller has not consumed yet are merged.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};
use volley_core::timing::TICK_INTERVAL_MS;
use volley_drivers::TickFlag;

/// Tick flag read and cleared by the controller
pub static TICK: TickFlag = TickFlag::new();

/// Signal to wake the controller after a tick
pub static TICK_WAKE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Tick task - raises the tick flag periodically
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        ticker.next().await;

        TICK.raise();
        TICK_WAKE.signal(());
    }
}
