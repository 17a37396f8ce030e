//! Form domain layer
//!
//! The employee form is a tree of named nodes: scalar fields, groups and one
//! variable-length array of skill groups. Every field carries an ordered,
//! mutable rule set; the validation engine walks the tree after each write
//! and produces per-path error strings and failure reasons.

mod employee_form;
mod error;
mod field;
mod form_state;
mod node;
mod rules;
mod validation;

pub use employee_form::{paths, EmployeeForm, FormDefaults};
pub use error::FormError;
pub use field::{FieldKind, FormField};
pub use form_state::FormState;
pub use rules::Rule;
