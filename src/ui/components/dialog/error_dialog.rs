//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the oldest queued error on top of the current view
pub fn render_error_dialog(frame: &mut Frame, message: &str) {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    render_dialog(
        frame,
        DialogConfig {
            title: "Error",
            accent: Color::Red,
            message,
            hint: vec![
                Span::raw("Press "),
                Span::styled("Enter", key),
                Span::raw(" or "),
                Span::styled("Esc", key),
                Span::raw(" to dismiss"),
            ],
            max_width: 60,
        },
    );
}
