//! Employee list view

use super::widgets::render_scrollable_list;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the employee list
pub fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let employees = &app.state.employees;
    let block = Block::default()
        .title(format!(" Employees ({}) ", employees.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if employees.is_empty() {
        let content = Paragraph::new("No employees found.\nPress 'n' to create a new employee.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let items: Vec<ListItem> = employees
        .iter()
        .enumerate()
        .map(|(idx, employee)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸ " } else { "  " };
            let number = employee
                .id
                .map(|id| format!("#{id}"))
                .unwrap_or_else(|| "#?".to_string());

            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(format!("{number:<5}"), Style::default().fg(Color::Cyan)),
                Span::styled(format!("{:<12}", employee.full_name), style),
                Span::styled(
                    format!("[{}] ", employee.contact_preference),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(employee.preferred_contact(), Style::default().fg(Color::Blue)),
                Span::styled(
                    format!("  {} skills", employee.skills.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    render_scrollable_list(frame, area, list, app.state.selected_index);
}
