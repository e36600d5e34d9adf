//! Messages that drive the dashboard update loop.
//!
//! The runner multiplexes key events from a blocking reader and
//! thought-stream ticks into these, and draws on its own interval.

use crossterm::event::KeyEvent;

use crate::stream::Tick;

#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Keyboard input.
    Input(KeyEvent),
    /// The thought producer fired.
    Thought(Tick),
    /// Quit the dashboard.
    Quit,
}
