//! Errors raised by the form API

use thiserror::Error;

/// Misuse of the form API. Failing validation rules are not errors; they
/// live in the validation report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("skill index {index} is out of range ({count} skills)")]
    SkillIndexOutOfRange { index: usize, count: usize },

    #[error("unknown contact preference: {0}")]
    UnknownContactPreference(String),

    #[error("unknown proficiency: {0}")]
    UnknownProficiency(String),

    #[error("'{value}' is not an option for {path}")]
    InvalidChoice { path: String, value: String },

    #[error("'{value}' is not a valid number for {path}")]
    InvalidNumber { path: String, value: String },

    #[error("form has {0} invalid field(s)")]
    Invalid(usize),
}
