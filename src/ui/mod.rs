//! Terminal rendering.
//!
//! The UI is stateless between frames: every render tick paints a fresh
//! snapshot of the result table plus a one-line status bar.

pub mod format;
pub mod latency_view;
pub mod theme;

pub use latency_view::LatencyView;
pub use theme::Theme;

use std::time::Duration;

use chrono::{DateTime, Local};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::Row;
use self::format::format_rtt;

/// Facts shown in the status bar.
#[derive(Debug, Clone)]
pub struct StatusInfo {
    pub targets: usize,
    pub interval: Duration,
    pub refreshed_at: DateTime<Local>,
}

/// Main UI controller.
#[derive(Debug, Default)]
pub struct Ui {
    theme: Theme,
}

impl Ui {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint `rows` and the status bar into the whole frame.
    pub fn render(&self, frame: &mut Frame, rows: &[Row], status: &StatusInfo) {
        let area = frame.size();
        LatencyView::render(frame, area, rows, &self.theme);
        self.render_status_line(frame, area, status);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect, status: &StatusInfo) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let status_area = Rect::new(area.x, area.bottom() - 1, area.width, 1);

        let line = Line::from(vec![
            Span::raw(format!(
                " {} targets | every {} | updated {} | ",
                status.targets,
                format_rtt(status.interval),
                status.refreshed_at.format("%H:%M:%S"),
            )),
            Span::styled("q", self.theme.key_style),
            Span::raw(" quit"),
        ]);

        frame.render_widget(Paragraph::new(line).style(self.theme.status_line), status_area);
    }
}
