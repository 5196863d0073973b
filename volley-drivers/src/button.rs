//! Reset button input

use embedded_hal::digital::InputPin;
use volley_core::traits::ResetButton;

/// Push button on a single pin
///
/// A failed read counts as released.
pub struct ResetPin<P> {
    pin: P,
    /// If true, pressed = pin LOW
    active_low: bool,
}

impl<P: InputPin> ResetPin<P> {
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Button wired to ground with a pull-up
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: InputPin> ResetButton for ResetPin<P> {
    fn is_pressed(&mut self) -> bool {
        self.pin
            .is_high()
            .map(|high| high != self.active_low)
            .unwrap_or(false)
    }
}
