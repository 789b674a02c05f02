//! Events driving the dispatch loop.
//!
//! Terminal input, OS termination signals and the periodic render tick are
//! merged into a single stream of [`Event`]s by the [`EventHandler`].

pub mod handler;

pub use handler::{EventHandler, EventSender};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),
    /// Terminal resize event
    Resize(u16, u16),
    /// Time to redraw
    Tick,
    /// The process received an interrupt or termination signal
    Terminate(&'static str),
}

/// Whether `key` asks the application to quit.
pub fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
