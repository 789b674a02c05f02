//! Latency view: one line per target with its last round-trip time.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::format::{fit_column, format_rtt};
use crate::state::Row;
use crate::ui::Theme;

/// Width of the target column, in terminal cells.
pub const LABEL_WIDTH: usize = 50;

/// Renders a snapshot of the result table.
pub struct LatencyView;

impl LatencyView {
    /// Area available for rows: one blank line and column of margin at the
    /// top and left, and the bottom line kept free for the status line.
    pub fn rows_area(area: Rect) -> Rect {
        Rect {
            x: area.x.saturating_add(1).min(area.right()),
            y: area.y.saturating_add(1).min(area.bottom()),
            width: area.width.saturating_sub(1),
            height: area.height.saturating_sub(2),
        }
    }

    /// Paint as many rows as fit; the rest are dropped, never scrolled.
    pub fn render(frame: &mut Frame, area: Rect, rows: &[Row], theme: &Theme) {
        let area = Self::rows_area(area);
        if area.width == 0 || area.height == 0 {
            return;
        }

        let lines: Vec<Line> = rows
            .iter()
            .take(area.height as usize)
            .map(|row| Self::row_line(row, theme))
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Format one row: label column then duration, styled by outcome.
    pub fn row_line<'a>(row: &Row, theme: &Theme) -> Line<'a> {
        let style = if row.result.is_alert() {
            theme.alert_row
        } else {
            theme.normal_row
        };

        Line::from(vec![
            Span::styled(fit_column(&row.target.label(), LABEL_WIDTH), style),
            Span::styled(format_rtt(row.result.last_rtt), style),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ProbeResult;
    use crate::target::Target;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn row(address: &str, name: &str, result: ProbeResult) -> Row {
        Row {
            target: Target::new(address, name),
            result,
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn alert_row_for_zero_rtt() {
        let theme = Theme::default();
        let line = LatencyView::row_line(&row("10.0.0.1", "router", ProbeResult::failed()), &theme);

        assert!(line.spans.iter().all(|span| span.style == theme.alert_row));
        assert_eq!(text(&line).trim_end(), format!("{:<50}0s", "10.0.0.1 (router)"));
    }

    #[test]
    fn normal_row_for_measured_rtt() {
        let theme = Theme::default();
        let result = ProbeResult::success(Duration::from_micros(12_345));
        let line = LatencyView::row_line(&row("10.0.0.2", "", result), &theme);

        assert!(line.spans.iter().all(|span| span.style == theme.normal_row));
        assert_eq!(text(&line), format!("{:<50}12.345ms", "10.0.0.2"));
    }

    #[test]
    fn rows_area_leaves_margins() {
        let area = LatencyView::rows_area(Rect::new(0, 0, 80, 24));
        assert_eq!(area, Rect::new(1, 1, 79, 22));
    }

    #[test]
    fn rows_area_of_tiny_terminal_is_empty() {
        assert_eq!(LatencyView::rows_area(Rect::new(0, 0, 10, 2)).height, 0);
        assert_eq!(LatencyView::rows_area(Rect::new(0, 0, 0, 0)).width, 0);
    }
}
