//! Employee create/edit form

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::{App, FORM_BUTTONS};
use crate::state::{paths, EmployeeForm};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use crate::ui::widgets::scroll_offset;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One visual row group of the form
enum Row {
    /// "Skill N" separator
    Header(String),
    /// Field at `index` in display order
    Field { index: usize, path: String },
}

impl Row {
    fn height(&self) -> u16 {
        match self {
            Row::Header(_) => 1,
            Row::Field { .. } => FIELD_HEIGHT,
        }
    }
}

/// Draw the form with its action panel on the right
pub fn draw_employee_form(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = app.state.form.form() else {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(loading, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_fields(frame, chunks[0], app, form);
    draw_action_panel(frame, chunks[1], app);
}

fn layout_rows(form: &EmployeeForm) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut current_skill = None;

    for (index, path) in form.field_paths().into_iter().enumerate() {
        let skill = paths::skill_index(&path);
        if skill.is_some() && skill != current_skill {
            if let Some(i) = skill {
                rows.push(Row::Header(format!("Skill {}", i + 1)));
            }
            current_skill = skill;
        }
        rows.push(Row::Field { index, path });
    }

    rows
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &App, form: &EmployeeForm) {
    let form_focused = !app.state.is_action_panel_active();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let shown = form.errors().values().filter(|e| !e.is_empty()).count();
    let failing = form.reasons().values().filter(|r| !r.is_empty()).count();
    let title = match (shown, failing) {
        (0, 0) => format!(" {} ", app.state.form.title()),
        (0, n) => format!(" {} - {n} incomplete ", app.state.form.title()),
        (n, _) => format!(" {} - {n} errors ", app.state.form.title()),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = layout_rows(form);
    let total: u16 = rows.iter().map(Row::height).sum();

    // Keep the focused field on screen
    let mut end = 0;
    let mut y = 0;
    for row in &rows {
        y += row.height();
        if matches!(row, Row::Field { index, .. } if *index == app.state.active_form_field) {
            end = y;
        }
    }
    let offset = scroll_offset(end, inner.height, total);

    let mut y = 0u16;
    for row in &rows {
        let height = row.height();
        let top = y;
        y += height;
        if top < offset || y > offset + inner.height {
            continue;
        }

        let row_area = Rect {
            x: inner.x,
            y: inner.y + top - offset,
            width: inner.width,
            height,
        };
        match row {
            Row::Header(label) => {
                let header = Paragraph::new(Line::from(vec![
                    Span::styled(
                        label.as_str(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        if form.skills_dirty() { "  (list changed)" } else { "" },
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
                frame.render_widget(header, row_area);
            }
            Row::Field { index, path } => {
                if let Some(field) = form.field(path) {
                    draw_field(
                        frame,
                        row_area,
                        field,
                        form.error_for(path),
                        *index == app.state.active_form_field,
                    );
                }
            }
        }
    }
}

fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.is_action_panel_active();
    let selected = app.state.form_selected_button;

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(BUTTON_HEIGHT); FORM_BUTTONS.len()];
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let accents = [Color::Green, Color::Blue, Color::Gray];
    for (idx, (label, accent)) in FORM_BUTTONS.iter().zip(accents).enumerate() {
        render_action_button(frame, chunks[idx], label, is_focused && selected == idx, accent);
    }
}
