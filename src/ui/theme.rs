//! UI theme definition.

use ratatui::style::{Color, Modifier, Style};

/// Theme for the application UI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Rows with a measured round-trip time
    pub normal_row: Style,
    /// Rows whose last probe failed or has not completed
    pub alert_row: Style,
    /// Bottom status line
    pub status_line: Style,
    /// Key hints inside the status line
    pub key_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            normal_row: Style::default().fg(Color::White),
            alert_row: Style::default().fg(Color::Red),
            status_line: Style::default().fg(Color::Gray),
            key_style: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        }
    }
}
