//! Hardware abstraction traits
//!
//! These traits define the interface between the match engine and the
//! board. The engine never touches registers; drivers implement these.

pub mod board;
pub mod display;

pub use board::{Board, ResetButton, SwitchPanel, TickSource};
pub use display::{show_digit, DigitDisplay, DIGIT_COUNT};
