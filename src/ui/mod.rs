//! UI module for rendering the TUI

mod components;
mod employees;
mod forms;
mod layout;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    // Draw main content based on current view
    match &app.state.current_view {
        View::EmployeeList => employees::draw_list(frame, main_area, app),
        View::EmployeeCreate | View::EmployeeEdit => forms::draw_employee_form(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Error dialog overlays everything
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Employee, EmployeeForm, FormDefaults, FormState};
    use crate::store::MockEmployeeGateway;
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        App::with_gateway(
            Box::new(MockEmployeeGateway::new()),
            "http://test".to_string(),
            FormDefaults::default(),
        )
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_empty_list_renders_hint() {
        let screen = render(&app());
        assert!(screen.contains("No employees found"));
        assert!(screen.contains("http://test"));
    }

    #[test]
    fn test_list_renders_employees() {
        let mut app = app();
        app.state.employees = vec![Employee {
            id: Some(7),
            full_name: "Ada".to_string(),
            email: "ada@gmail.com".to_string(),
            ..Default::default()
        }];
        let screen = render(&app);
        assert!(screen.contains("#7"));
        assert!(screen.contains("Ada"));
        assert!(screen.contains("ada@gmail.com"));
    }

    #[test]
    fn test_form_renders_fields_and_errors() {
        let mut app = app();
        app.state.current_view = View::EmployeeCreate;
        let mut form = EmployeeForm::new();
        form.mark_all_touched();
        app.state.form = FormState::Create(form);

        let screen = render(&app);
        assert!(screen.contains("New Employee"));
        assert!(screen.contains("errors"));
        assert!(screen.contains("Full Name"));
        assert!(screen.contains("Full Name is required."));
        assert!(screen.contains("Skill 1"));
        assert!(screen.contains("Save"));
    }

    #[test]
    fn test_error_dialog_overlays_view() {
        let mut app = app();
        app.push_error("store unreachable");
        let screen = render(&app);
        assert!(screen.contains("Error"));
        assert!(screen.contains("store unreachable"));
    }
}
