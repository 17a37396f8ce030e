//! Form state owned by the create/edit screen

use super::employee_form::EmployeeForm;

/// Enum representing all possible form states
#[derive(Debug, Clone, Default)]
pub enum FormState {
    #[default]
    None,
    Create(EmployeeForm),
    Edit { id: u32, form: EmployeeForm },
}

impl FormState {
    pub fn form(&self) -> Option<&EmployeeForm> {
        match self {
            FormState::None => None,
            FormState::Create(form) | FormState::Edit { form, .. } => Some(form),
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut EmployeeForm> {
        match self {
            FormState::None => None,
            FormState::Create(form) | FormState::Edit { form, .. } => Some(form),
        }
    }

    /// Identifier of the employee being edited
    pub fn employee_id(&self) -> Option<u32> {
        match self {
            FormState::Edit { id, .. } => Some(*id),
            _ => None,
        }
    }

    pub fn title(&self) -> String {
        match self {
            FormState::None => String::new(),
            FormState::Create(_) => "New Employee".to_string(),
            FormState::Edit { id, .. } => format!("Edit Employee #{id}"),
        }
    }
}
