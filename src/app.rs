//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::is_shortcut;
use crate::state::{
    paths, AppState, EmployeeForm, FieldKind, FormDefaults, FormError, FormState, View, ViewParams,
};
use crate::store::{EmployeeGateway, StoreClient};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Buttons on the form action panel, in display order
pub const FORM_BUTTONS: &[&str] = &["Save", "Add Skill", "Cancel"];

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Gateway to the employee store
    store: Box<dyn EmployeeGateway>,
    /// Address shown in the status bar
    pub store_address: String,
    /// Starting values for the create flow
    defaults: FormDefaults,
    /// Whether the app should quit
    quit: bool,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance connected to the configured store and
    /// opened at `route`
    pub async fn new(config: &TuiConfig, store_address: String, route: &str) -> Result<Self> {
        let client = StoreClient::new(&store_address, config.request_timeout())?;
        let store_address = client.address().to_string();
        let mut app = Self::with_gateway(Box::new(client), store_address, config.form_defaults());

        let (view, params) = View::from_route(route);
        tracing::info!("Starting at {view:?} ({route})");
        app.state.current_view = view;
        app.state.view_params = params;
        app.activate_current_view().await;

        Ok(app)
    }

    /// Create an App around any gateway; nothing is loaded yet
    pub fn with_gateway(
        store: Box<dyn EmployeeGateway>,
        store_address: String,
        defaults: FormDefaults,
    ) -> Self {
        Self {
            state: AppState::default(),
            store,
            store_address,
            defaults,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        // Track view before handling key to detect navigation
        let before = (
            self.state.current_view.clone(),
            self.state.view_params.clone(),
        );

        match self.state.current_view {
            View::EmployeeList => self.handle_list_key(key).await?,
            View::EmployeeCreate | View::EmployeeEdit => self.handle_form_key(key).await?,
        }

        if before != (self.state.current_view.clone(), self.state.view_params.clone()) {
            self.activate_current_view().await;
        }

        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View, params: ViewParams) {
        // Save current view to history
        self.state.view_history.push((
            self.state.current_view.clone(),
            self.state.view_params.clone(),
        ));
        self.state.current_view = view;
        self.state.view_params = params;
    }

    /// Go back to the last non-form view, or the list if there is none
    pub fn go_back(&mut self) {
        while let Some((view, params)) = self.state.view_history.pop() {
            if view.is_form_view() {
                continue;
            }
            self.state.current_view = view;
            self.state.view_params = params;
            return;
        }
        self.state.current_view = View::EmployeeList;
        self.state.view_params = ViewParams::default();
    }

    /// Load whatever the current view needs
    pub async fn activate_current_view(&mut self) {
        match self.state.current_view {
            View::EmployeeList => {
                self.state.clear_form();
                self.load_employees().await;
            }
            View::EmployeeCreate => self.open_create_form(),
            View::EmployeeEdit => match self.state.view_params.employee_id {
                Some(id) => self.open_edit_form(id).await,
                None => self.open_create_form(),
            },
        }
    }

    /// Fetch every employee into the list; on failure the list stays empty
    pub async fn load_employees(&mut self) {
        match self.store.fetch_all().await {
            Ok(employees) => {
                tracing::info!("Loaded {} employees", employees.len());
                self.state.employees = employees;
                self.state.clamp_selection();
            }
            Err(err) => {
                tracing::warn!("Failed to load employees: {err}");
                self.state.employees.clear();
                self.state.reset_selection();
                self.push_error(format!("Failed to load employees: {err}"));
            }
        }
    }

    fn open_create_form(&mut self) {
        self.state.clear_form();
        self.state.form = FormState::Create(EmployeeForm::initialize(&self.defaults));
    }

    async fn open_edit_form(&mut self, id: u32) {
        match self.store.fetch_one(id).await {
            Ok(employee) => {
                tracing::info!("Editing employee {id}");
                let form = EmployeeForm::from_employee(&employee);
                self.state.clear_form();
                self.state.form = FormState::Edit { id, form };
            }
            Err(err) => {
                if err.is_not_found() {
                    tracing::info!("Employee {id} does not exist");
                } else {
                    tracing::warn!("Failed to load employee {id}: {err}");
                }
                self.push_error(format!("Failed to load employee {id}: {err}"));
                // Nothing to edit: fall back to a blank form
                self.state.current_view = View::EmployeeCreate;
                self.state.view_params = ViewParams::default();
                self.open_create_form();
            }
        }
    }

    /// Handle keys in the employee list
    async fn handle_list_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.state.employees.len();
                self.state.move_selection_down(len);
            }
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Char('n') => self.navigate(View::EmployeeCreate, ViewParams::default()),
            KeyCode::Enter | KeyCode::Char('e') => {
                match self.state.selected_employee().and_then(|e| e.id) {
                    Some(id) => self.navigate(
                        View::EmployeeEdit,
                        ViewParams {
                            employee_id: Some(id),
                        },
                    ),
                    None => self.status_message = Some("No employee selected".to_string()),
                }
            }
            KeyCode::Char('r') => self.load_employees().await,
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the create/edit form
    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_action_panel = self.state.is_action_panel_active();
        let shortcut = is_shortcut(key.modifiers);

        match key.code {
            KeyCode::Tab => self.state.next_form_field(),
            KeyCode::BackTab => self.state.prev_form_field(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if shortcut => self.submit_form().await,
            KeyCode::Char('a') if shortcut => self.add_skill(),
            KeyCode::Char('r') if shortcut => self.remove_active_skill(),
            KeyCode::Esc => self.cancel_form(),
            // Action panel navigation
            KeyCode::Up | KeyCode::Char('k') if on_action_panel => {
                if self.state.form_selected_button == 0 {
                    self.state.form_selected_button = FORM_BUTTONS.len() - 1;
                } else {
                    self.state.form_selected_button -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') if on_action_panel => {
                self.state.form_selected_button =
                    (self.state.form_selected_button + 1) % FORM_BUTTONS.len();
            }
            KeyCode::Enter if on_action_panel => match self.state.form_selected_button {
                0 => self.submit_form().await,
                1 => self.add_skill(),
                _ => self.cancel_form(),
            },
            KeyCode::Enter => self.state.next_form_field(),
            // Field editing
            KeyCode::Left => self.edit_active_field(|form, path| form.cycle_choice(path, false)),
            KeyCode::Right => self.edit_active_field(|form, path| form.cycle_choice(path, true)),
            KeyCode::Char(' ') if self.active_field_is_choice() => {
                self.edit_active_field(|form, path| form.cycle_choice(path, true))
            }
            KeyCode::Char(c) if !on_action_panel && !shortcut => {
                self.edit_active_field(|form, path| form.input_char(path, c))
            }
            KeyCode::Backspace if !on_action_panel => {
                self.edit_active_field(|form, path| form.backspace(path))
            }
            _ => {}
        }
        Ok(())
    }

    fn active_field_is_choice(&self) -> bool {
        let path = self.state.active_field_path();
        match (self.state.form.form(), path) {
            (Some(form), Some(path)) => form
                .field(&path)
                .is_some_and(|f| matches!(f.kind, FieldKind::Choice(_))),
            _ => false,
        }
    }

    fn edit_active_field(
        &mut self,
        edit: impl FnOnce(&mut EmployeeForm, &str) -> Result<(), FormError>,
    ) {
        let Some(path) = self.state.active_field_path() else {
            return;
        };
        if let Some(form) = self.state.form.form_mut() {
            if let Err(err) = edit(form, &path) {
                tracing::debug!("Ignored edit of {path}: {err}");
            }
        }
    }

    /// Append a skill and move focus to its first field
    fn add_skill(&mut self) {
        let Some(form) = self.state.form.form_mut() else {
            return;
        };
        form.add_skill();
        let target = paths::skill(form.skill_count() - 1, paths::SKILL_NAME);
        if let Some(index) = form.field_paths().iter().position(|p| *p == target) {
            self.state.active_form_field = index;
        }
    }

    /// Remove the skill containing the focused field
    fn remove_active_skill(&mut self) {
        let index = self
            .state
            .active_field_path()
            .and_then(|path| paths::skill_index(&path));
        let (Some(index), Some(form)) = (index, self.state.form.form_mut()) else {
            self.status_message = Some("Move to a skill to remove it".to_string());
            return;
        };

        match form.remove_skill(index) {
            Ok(()) => {
                self.state.clamp_form_focus();
                self.status_message = Some(format!("Removed skill {}", index + 1));
            }
            Err(err) => tracing::debug!("Skill not removed: {err}"),
        }
    }

    fn cancel_form(&mut self) {
        self.state.clear_form();
        self.go_back();
    }

    /// Validate the whole form and, if valid, persist it through the store
    async fn submit_form(&mut self) {
        let id = self.state.form.employee_id();
        let converted = match self.state.form.form_mut() {
            Some(form) => {
                form.mark_all_touched();
                form.to_employee(id)
            }
            None => return,
        };

        let employee = match converted {
            Ok(employee) => employee,
            Err(err) => {
                tracing::info!("Form not submitted: {err}");
                self.status_message = Some(format!("Not saved: {err}"));
                return;
            }
        };

        match self.store.save(&employee).await {
            Ok(saved) => {
                tracing::info!("Saved employee {:?}", saved.id);
                self.status_message = Some(format!("Saved {}", saved.full_name));
                self.state.clear_form();
                self.go_back();
            }
            Err(err) => {
                tracing::warn!("Failed to save employee: {err}");
                self.push_error(format!("Failed to save employee: {err}"));
            }
        }
    }
}
