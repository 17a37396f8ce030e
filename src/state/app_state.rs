//! Application state definitions

use super::forms::{FormError, FormState};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    EmployeeList,
    EmployeeCreate,
    EmployeeEdit,
}

impl View {
    /// Returns true for views hosting an employee form
    pub fn is_form_view(&self) -> bool {
        matches!(self, View::EmployeeCreate | View::EmployeeEdit)
    }

    /// Resolve a route path into a view and its parameters.
    ///
    /// Known routes are `/`, `/create` and `/edit/{id}`. Anything else
    /// redirects to the employee list.
    pub fn from_route(route: &str) -> (View, ViewParams) {
        let segments: Vec<&str> = route
            .trim()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            ["create"] => (View::EmployeeCreate, ViewParams::default()),
            ["edit", id] => match id.parse::<u32>() {
                Ok(id) => (
                    View::EmployeeEdit,
                    ViewParams {
                        employee_id: Some(id),
                    },
                ),
                Err(_) => (View::EmployeeList, ViewParams::default()),
            },
            _ => (View::EmployeeList, ViewParams::default()),
        }
    }
}

/// View parameters for navigation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    pub employee_id: Option<u32>,
}

/// Which contact channel is required for an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactPreference {
    #[default]
    Email,
    Phone,
}

impl ContactPreference {
    pub const OPTIONS: &'static [&'static str] = &["email", "phone"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for ContactPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactPreference {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            other => Err(FormError::UnknownContactPreference(other.to_string())),
        }
    }
}

/// Proficiency level of a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl Proficiency {
    pub const OPTIONS: &'static [&'static str] = &["beginner", "intermediate", "expert"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Proficiency {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "expert" => Ok(Self::Expert),
            other => Err(FormError::UnknownProficiency(other.to_string())),
        }
    }
}

/// A single skill entry owned by an employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub skill_name: String,
    pub experience_in_years: u32,
    #[serde(default)]
    pub proficiency: Proficiency,
}

/// Employee record as exchanged with the store
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(
        default,
        deserialize_with = "phone_from_wire",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
    #[serde(default)]
    pub contact_preference: ContactPreference,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// Stores may send the phone as a JSON number or as a string
fn phone_from_wire<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WirePhone {
        Number(u64),
        Text(String),
    }

    Ok(
        Option::<WirePhone>::deserialize(deserializer)?.map(|phone| match phone {
            WirePhone::Number(n) => n.to_string(),
            WirePhone::Text(s) => s,
        }),
    )
}

impl Employee {
    /// Contact detail matching the preferred channel
    pub fn preferred_contact(&self) -> &str {
        match self.contact_preference {
            ContactPreference::Email => &self.email,
            ContactPreference::Phone => self.phone.as_deref().unwrap_or(""),
        }
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_params: ViewParams,
    pub view_history: Vec<(View, ViewParams)>,

    // Data
    pub employees: Vec<Employee>,

    // Selection
    pub selected_index: usize,

    // Form state
    pub form: FormState,
    pub active_form_field: usize,
    pub form_selected_button: usize,

    // Error queue shown as modal dialogs
    pub errors: Vec<String>,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    /// Employee under the list cursor
    pub fn selected_employee(&self) -> Option<&Employee> {
        self.employees.get(self.selected_index)
    }

    /// Keep the selection inside the list after it was reloaded
    pub fn clamp_selection(&mut self) {
        if self.employees.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.employees.len() {
            self.selected_index = self.employees.len() - 1;
        }
    }

    pub fn push_error(&mut self, message: String) {
        self.errors.push(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        if !self.errors.is_empty() {
            self.errors.remove(0);
        }
    }

    /// Number of focusable rows on the form screen (fields + action panel)
    pub fn form_field_count(&self) -> usize {
        self.form
            .form()
            .map(|f| f.field_paths().len() + 1)
            .unwrap_or(1)
    }

    /// Whether focus is on the action panel below the fields
    pub fn is_action_panel_active(&self) -> bool {
        self.active_form_field + 1 == self.form_field_count()
    }

    /// Path of the field that currently has focus
    pub fn active_field_path(&self) -> Option<String> {
        self.form
            .form()
            .and_then(|f| f.field_paths().into_iter().nth(self.active_form_field))
    }

    /// Move to next form field, marking the one being left as touched
    pub fn next_form_field(&mut self) {
        self.touch_active_field();
        self.active_form_field = (self.active_form_field + 1) % self.form_field_count();
    }

    /// Move to previous form field, marking the one being left as touched
    pub fn prev_form_field(&mut self) {
        self.touch_active_field();
        if self.active_form_field == 0 {
            self.active_form_field = self.form_field_count() - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    fn touch_active_field(&mut self) {
        if let Some(path) = self.active_field_path() {
            if let Some(form) = self.form.form_mut() {
                form.mark_touched(&path);
            }
        }
    }

    /// Keep focus on a valid row after the field list changed shape
    pub fn clamp_form_focus(&mut self) {
        let count = self.form_field_count();
        if self.active_form_field >= count {
            self.active_form_field = count - 1;
        }
    }

    /// Clear form state
    pub fn clear_form(&mut self) {
        self.form = FormState::None;
        self.active_form_field = 0;
        self.form_selected_button = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EmployeeForm;

    mod routes {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_root_is_list() {
            assert_eq!(
                View::from_route("/"),
                (View::EmployeeList, ViewParams::default())
            );
            assert_eq!(
                View::from_route(""),
                (View::EmployeeList, ViewParams::default())
            );
        }

        #[test]
        fn test_create_route() {
            assert_eq!(View::from_route("/create").0, View::EmployeeCreate);
        }

        #[test]
        fn test_edit_route_carries_id() {
            let (view, params) = View::from_route("/edit/42");
            assert_eq!(view, View::EmployeeEdit);
            assert_eq!(params.employee_id, Some(42));
        }

        #[test]
        fn test_unmatched_routes_redirect_to_list() {
            for route in ["/nope", "/edit", "/edit/abc", "/create/1", "/edit/1/extra"] {
                assert_eq!(
                    View::from_route(route),
                    (View::EmployeeList, ViewParams::default()),
                    "route {route}"
                );
            }
        }

        #[test]
        fn test_form_views() {
            assert!(!View::EmployeeList.is_form_view());
            assert!(View::EmployeeCreate.is_form_view());
            assert!(View::EmployeeEdit.is_form_view());
        }
    }

    mod wire_format {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_employee_uses_camel_case() {
            let employee = Employee {
                id: Some(3),
                full_name: "Ada".to_string(),
                email: "ada@gmail.com".to_string(),
                phone: None,
                contact_preference: ContactPreference::Email,
                skills: vec![Skill {
                    skill_name: "Rust".to_string(),
                    experience_in_years: 4,
                    proficiency: Proficiency::Expert,
                }],
            };

            let json = serde_json::to_value(&employee).unwrap();
            assert_eq!(
                json,
                serde_json::json!({
                    "id": 3,
                    "fullName": "Ada",
                    "email": "ada@gmail.com",
                    "contactPreference": "email",
                    "skills": [
                        { "skillName": "Rust", "experienceInYears": 4, "proficiency": "expert" }
                    ]
                })
            );
        }

        #[test]
        fn test_missing_optional_fields_use_defaults() {
            let json = r#"{"fullName": "Bob", "skills": [{"skillName": "Go", "experienceInYears": 1}]}"#;
            let parsed: Employee = serde_json::from_str(json).unwrap();
            assert_eq!(parsed.id, None);
            assert_eq!(parsed.email, "");
            assert_eq!(parsed.contact_preference, ContactPreference::Email);
            assert_eq!(parsed.skills[0].proficiency, Proficiency::Beginner);
        }

        #[test]
        fn test_phone_accepts_number_or_string() {
            let number: Employee =
                serde_json::from_str(r#"{"fullName": "Ann", "phone": 5551234}"#).unwrap();
            assert_eq!(number.phone.as_deref(), Some("5551234"));

            let text: Employee =
                serde_json::from_str(r#"{"fullName": "Ann", "phone": "555-1234"}"#).unwrap();
            assert_eq!(text.phone.as_deref(), Some("555-1234"));

            let null: Employee =
                serde_json::from_str(r#"{"fullName": "Ann", "phone": null}"#).unwrap();
            assert_eq!(null.phone, None);
        }

        #[test]
        fn test_unsaved_employee_omits_id() {
            let json = serde_json::to_string(&Employee::default()).unwrap();
            assert!(!json.contains("\"id\""));
        }
    }

    mod choices {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_contact_preference_parse() {
            assert_eq!("phone".parse::<ContactPreference>().unwrap(), ContactPreference::Phone);
            assert!(matches!(
                "fax".parse::<ContactPreference>(),
                Err(FormError::UnknownContactPreference(v)) if v == "fax"
            ));
        }

        #[test]
        fn test_proficiency_round_trips_through_options() {
            for option in Proficiency::OPTIONS {
                assert_eq!(option.parse::<Proficiency>().unwrap().as_str(), *option);
            }
        }

        #[test]
        fn test_preferred_contact() {
            let employee = Employee {
                phone: Some("555".to_string()),
                contact_preference: ContactPreference::Phone,
                ..Default::default()
            };
            assert_eq!(employee.preferred_contact(), "555");
        }
    }

    mod app_state {
        use super::*;
        use pretty_assertions::assert_eq;

        fn employee(name: &str) -> Employee {
            Employee {
                full_name: name.to_string(),
                ..Default::default()
            }
        }

        #[test]
        fn test_selection_bounds() {
            let mut state = AppState::default();
            state.move_selection_up();
            assert_eq!(state.selected_index, 0);
            state.move_selection_down(2);
            state.move_selection_down(2);
            assert_eq!(state.selected_index, 1);
        }

        #[test]
        fn test_clamp_selection_after_reload() {
            let mut state = AppState {
                selected_index: 5,
                employees: vec![employee("Ann"), employee("Ben")],
                ..Default::default()
            };
            state.clamp_selection();
            assert_eq!(state.selected_index, 1);
            assert_eq!(state.selected_employee().unwrap().full_name, "Ben");
        }

        #[test]
        fn test_error_queue_is_fifo() {
            let mut state = AppState::default();
            state.push_error("first".to_string());
            state.push_error("second".to_string());
            assert_eq!(state.current_error(), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
        }

        #[test]
        fn test_form_focus_cycles_through_action_panel() {
            let mut state = AppState {
                form: FormState::Create(EmployeeForm::new()),
                ..Default::default()
            };
            let count = state.form_field_count();
            // fullName, email, phone, contactPreference, one skill (3) + actions
            assert_eq!(count, 8);
            state.prev_form_field();
            assert!(state.is_action_panel_active());
            state.next_form_field();
            assert_eq!(state.active_field_path().as_deref(), Some("fullName"));
        }

        #[test]
        fn test_leaving_a_field_marks_it_touched() {
            let mut state = AppState {
                form: FormState::Create(EmployeeForm::new()),
                ..Default::default()
            };
            state.next_form_field();
            let form = state.form.form().unwrap();
            assert!(form.field("fullName").unwrap().touched);
            assert_eq!(
                form.error_for("fullName"),
                "Full Name is required. "
            );
        }

        #[test]
        fn test_clear_form() {
            let mut state = AppState {
                form: FormState::Create(EmployeeForm::new()),
                active_form_field: 3,
                ..Default::default()
            };
            state.clear_form();
            assert!(state.form.form().is_none());
            assert_eq!(state.active_form_field, 0);
        }
    }
}
