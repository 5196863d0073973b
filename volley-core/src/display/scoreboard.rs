//! Score and clock digits
//!
//! Six seven-segment positions: player 1 score, minutes (tens, ones),
//! seconds (tens, ones), player 2 score. The scoreboard remembers what it
//! last emitted and reports only the positions that changed.

use heapless::Vec;

use crate::state::MatchState;
use crate::traits::{show_digit, DigitDisplay, DIGIT_COUNT};

/// Position of player 1's score
pub const P1_SCORE_DIGIT: u8 = 0;
/// Position of the minutes tens digit
pub const MINUTES_TENS_DIGIT: u8 = 1;
/// Position of the minutes ones digit
pub const MINUTES_ONES_DIGIT: u8 = 2;
/// Position of the seconds tens digit
pub const SECONDS_TENS_DIGIT: u8 = 3;
/// Position of the seconds ones digit
pub const SECONDS_ONES_DIGIT: u8 = 4;
/// Position of player 2's score
pub const P2_SCORE_DIGIT: u8 = 5;

/// Marks a cached position as never emitted
const BLANK: u8 = 0xFF;

/// One changed digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitUpdate {
    pub index: u8,
    pub digit: u8,
}

/// Changed digits from one refresh, in position order
pub type DigitUpdates = Vec<DigitUpdate, { DIGIT_COUNT as usize }>;

/// Full digit layout for a match state
///
/// Scores show their last decimal digit; minutes wrap at 100.
pub fn digits_for(state: &MatchState) -> [u8; DIGIT_COUNT as usize] {
    let minutes = state.elapsed_minutes() % 100;
    let seconds = state.elapsed_seconds();
    [
        (state.scores[0] % 10) as u8,
        (minutes / 10) as u8,
        (minutes % 10) as u8,
        (seconds / 10 % 10) as u8,
        (seconds % 10) as u8,
        (state.scores[1] % 10) as u8,
    ]
}

/// Last-emitted digit cache
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scoreboard {
    shown: [u8; DIGIT_COUNT as usize],
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoreboard {
    /// Scoreboard that has emitted nothing yet
    pub const fn new() -> Self {
        Self {
            shown: [BLANK; DIGIT_COUNT as usize],
        }
    }

    /// Forget what was shown so the next refresh emits every digit
    pub fn invalidate(&mut self) {
        self.shown = [BLANK; DIGIT_COUNT as usize];
    }

    /// Compare against `state` and record the new digits
    pub fn refresh(&mut self, state: &MatchState) -> DigitUpdates {
        let mut updates = DigitUpdates::new();
        for (index, (shown, digit)) in self.shown.iter_mut().zip(digits_for(state)).enumerate() {
            if *shown != digit {
                *shown = digit;
                // Capacity equals the digit count
                let _ = updates.push(DigitUpdate {
                    index: index as u8,
                    digit,
                });
            }
        }
        updates
    }
}

/// Push a batch of updates to the display
pub fn flush<D: DigitDisplay + ?Sized>(display: &mut D, updates: &[DigitUpdate]) {
    for update in updates {
        show_digit(display, update.index, update.digit);
    }
}
