//! Input side of the board: switches, reset button, tick source

/// Trait for the switch bank
///
/// Implementations assemble every switch into one word, switch `n` in
/// bit `n`. A switch that cannot be read reports off.
pub trait SwitchPanel {
    /// Read the current switch positions
    fn read_switches(&mut self) -> u16;
}

/// Trait for the match reset button
///
/// Level-triggered: holding the button resets on every poll.
pub trait ResetButton {
    /// Check if the button is held right now
    fn is_pressed(&mut self) -> bool;
}

/// Trait for the fixed-period tick flag
///
/// The flag is raised by a timer and cleared by the consumer.
pub trait TickSource {
    /// Check if a tick is pending
    fn tick_ready(&self) -> bool;

    /// Acknowledge the pending tick
    fn clear_tick(&mut self);

    /// Read and clear the flag in one step
    ///
    /// Implementations backed by an atomic should override this with a
    /// single swap so a tick raised in between is never lost.
    fn take_tick(&mut self) -> bool {
        let ready = self.tick_ready();
        if ready {
            self.clear_tick();
        }
        ready
    }
}

/// Everything the match loop talks to
pub trait Board: SwitchPanel + ResetButton + TickSource + super::DigitDisplay {}

impl<T> Board for T where T: SwitchPanel + ResetButton + TickSource + super::DigitDisplay {}
