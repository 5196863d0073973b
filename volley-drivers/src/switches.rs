//! Switch bank input
//!
//! Reads a row of slide switches into the 16-bit word the match engine
//! decodes. Pin `n` of the bank drives bit `n`.

use embedded_hal::digital::InputPin;
use volley_core::config::SWITCH_BITS;
use volley_core::traits::SwitchPanel;

/// Row of switch pins
///
/// Pins beyond the sixteenth are never read. A pin that fails to read
/// counts as off so a flaky input cannot lock the game up.
pub struct SwitchBank<P, const N: usize> {
    pins: [P; N],
    /// If true, switch ON = pin LOW
    active_low: bool,
}

impl<P: InputPin, const N: usize> SwitchBank<P, N> {
    /// Create a new switch bank
    ///
    /// # Arguments
    /// - `pins`: Switch pins, switch 0 first
    /// - `active_low`: If true, a switch is on when its pin reads LOW (pull-ups)
    pub fn new(pins: [P; N], active_low: bool) -> Self {
        Self { pins, active_low }
    }

    /// Switches that pull the pin high when on
    pub fn new_active_high(pins: [P; N]) -> Self {
        Self::new(pins, false)
    }

    /// Switches that pull the pin to ground when on
    pub fn new_active_low(pins: [P; N]) -> Self {
        Self::new(pins, true)
    }

    fn is_on(pin: &mut P, active_low: bool) -> bool {
        match pin.is_high() {
            Ok(high) => high != active_low,
            Err(_) => false,
        }
    }
}

impl<P: InputPin, const N: usize> SwitchPanel for SwitchBank<P, N> {
    fn read_switches(&mut self) -> u16 {
        let active_low = self.active_low;
        self.pins
            .iter_mut()
            .take(SWITCH_BITS as usize)
            .enumerate()
            .fold(0u16, |bits, (index, pin)| {
                if Self::is_on(pin, active_low) {
                    bits | (1 << index)
                } else {
                    bits
                }
            })
    }
}
