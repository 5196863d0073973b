//! Seven-segment scoreboard output

/// Number of digits on the scoreboard
pub const DIGIT_COUNT: u8 = 6;

/// Trait for the digit display
///
/// The core only ever passes `index < DIGIT_COUNT` and `digit <= 9`.
pub trait DigitDisplay {
    /// Show `digit` at position `index`
    fn display_digit(&mut self, index: u8, digit: u8);
}

/// Forward a digit only if both index and value are in range
///
/// Out-of-range requests are dropped without touching the display.
pub fn show_digit<D: DigitDisplay + ?Sized>(display: &mut D, index: u8, digit: u8) {
    if index < DIGIT_COUNT && digit <= 9 {
        display.display_digit(index, digit);
    }
}
