//! Board assembly
//!
//! Bundles the individual input and display drivers into one value that
//! satisfies [`volley_core::traits::Board`].

use volley_core::traits::{DigitDisplay, ResetButton, SwitchPanel, TickSource};

/// A panel of switches, a reset button, a tick source and a digit display
pub struct PanelBoard<S, R, T, D> {
    pub switches: S,
    pub reset: R,
    pub tick: T,
    pub display: D,
}

impl<S, R, T, D> PanelBoard<S, R, T, D> {
    pub fn new(switches: S, reset: R, tick: T, display: D) -> Self {
        Self {
            switches,
            reset,
            tick,
            display,
        }
    }
}

impl<S: SwitchPanel, R, T, D> SwitchPanel for PanelBoard<S, R, T, D> {
    fn read_switches(&mut self) -> u16 {
        self.switches.read_switches()
    }
}

impl<S, R: ResetButton, T, D> ResetButton for PanelBoard<S, R, T, D> {
    fn is_pressed(&mut self) -> bool {
        self.reset.is_pressed()
    }
}

impl<S, R, T: TickSource, D> TickSource for PanelBoard<S, R, T, D> {
    fn tick_ready(&self) -> bool {
        self.tick.tick_ready()
    }

    fn clear_tick(&mut self) {
        self.tick.clear_tick();
    }

    fn take_tick(&mut self) -> bool {
        self.tick.take_tick()
    }
}

impl<S, R, T, D: DigitDisplay> DigitDisplay for PanelBoard<S, R, T, D> {
    fn display_digit(&mut self, index: u8, digit: u8) {
        self.display.display_digit(index, digit);
    }
}
