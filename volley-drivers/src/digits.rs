//! Scoreboard digit latch
//!
//! The match loop writes digits through [`DigitDisplay`]; whatever drives
//! the physical display reads them back from here. Segment encoding is
//! the display's business.

use portable_atomic::{AtomicU8, Ordering};
use volley_core::traits::{DigitDisplay, DIGIT_COUNT};

/// Value of a position that has never been written
pub const BLANK: u8 = 0xFF;

/// Latest digit at every scoreboard position, shared between tasks
pub struct DigitLatch {
    digits: [AtomicU8; DIGIT_COUNT as usize],
}

impl Default for DigitLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitLatch {
    /// All positions blank
    pub const fn new() -> Self {
        Self {
            digits: [const { AtomicU8::new(BLANK) }; DIGIT_COUNT as usize],
        }
    }

    /// Digit at `index`, `None` while blank or out of range
    pub fn digit_at(&self, index: usize) -> Option<u8> {
        self.digits
            .get(index)
            .map(|d| d.load(Ordering::Relaxed))
            .filter(|&d| d != BLANK)
    }

    /// Copy of every position
    pub fn read_all(&self) -> [Option<u8>; DIGIT_COUNT as usize] {
        core::array::from_fn(|index| self.digit_at(index))
    }
}

impl DigitDisplay for &DigitLatch {
    fn display_digit(&mut self, index: u8, digit: u8) {
        if let Some(d) = self.digits.get(index as usize) {
            d.store(digit, Ordering::Relaxed);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("digit {} = {}", index, digit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use volley_core::traits::show_digit;

    #[test]
    fn test_starts_blank() {
        let latch = DigitLatch::new();
        assert_eq!(latch.read_all(), [None; 6]);
    }

    #[test]
    fn test_latch_through_display_trait() {
        let latch = DigitLatch::new();
        let mut display = &latch;
        display.display_digit(3, 7);
        display.display_digit(9, 1);
        assert_eq!(latch.digit_at(3), Some(7));
        assert_eq!(latch.digit_at(9), None);
    }

    #[test]
    fn test_guarded_helper() {
        let latch = DigitLatch::new();
        show_digit(&mut &latch, 0, 12);
        assert_eq!(latch.digit_at(0), None);
        show_digit(&mut &latch, 0, 4);
        assert_eq!(latch.digit_at(0), Some(4));
    }
}
