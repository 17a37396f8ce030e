//! Field rendering utilities for forms

use crate::state::{FieldKind, FormField, Rule};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered box plus error line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a field box and, below it, its visible error text
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, error: &str, is_active: bool) {
    let has_error = !error.is_empty();
    let border_style = match (is_active, has_error) {
        (true, _) => Style::default().fg(Color::Cyan),
        (false, true) => Style::default().fg(Color::Red),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let display_value = field.display_value();
    let mut spans = if display_value.is_empty() && !is_active {
        vec![Span::styled("(empty)", Style::default().fg(Color::DarkGray))]
    } else {
        vec![Span::styled(display_value, value_style)]
    };
    // choices are cycled, not typed
    if is_active && !matches!(field.kind, FieldKind::Choice(_)) {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let required = if field.has_rule(Rule::Required) { " *" } else { "" };
    let block = Block::default()
        .title(format!(" {}{required} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    let box_area = Rect {
        height: area.height.min(3),
        ..area
    };
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), box_area);

    if has_error && area.height > 3 {
        let error_area = Rect {
            x: area.x + 1,
            y: area.y + 3,
            width: area.width.saturating_sub(1),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(error.trim_end()).style(Style::default().fg(Color::Red)),
            error_area,
        );
    }
}
