use crossterm::event::Event as CrosstermEvent;
use std::time::Duration;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Periodic tick carrying the real time elapsed since the previous one
    Tick { elapsed: Duration },
}
