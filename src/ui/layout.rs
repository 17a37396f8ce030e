//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::{ADD_SKILL_SHORTCUT, REMOVE_SKILL_SHORTCUT, SAVE_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split off the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];

    // View-specific hints
    spans.push(Span::styled(
        view_hints(&app.state.current_view),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    if let Some(form) = app.state.form.form() {
        if form.is_dirty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("modified", Style::default().fg(Color::Yellow)));
        }
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        &app.store_address,
        Style::default().fg(Color::Blue),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}

/// Get keyboard hints for the current view
fn view_hints(view: &View) -> String {
    match view {
        View::EmployeeList => "j/k:nav  Enter:edit  n:new  r:reload  q:quit".to_string(),
        View::EmployeeCreate | View::EmployeeEdit => format!(
            "Tab:next  {SAVE_SHORTCUT}:save  {ADD_SKILL_SHORTCUT}:add skill  {REMOVE_SKILL_SHORTCUT}:remove skill  Esc:cancel"
        ),
    }
}
