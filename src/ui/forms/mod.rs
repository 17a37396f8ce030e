//! Form rendering module
//!
//! - `field_renderer`: a single field box with its error line
//! - `employee_form`: the create/edit screen

mod employee_form;
mod field_renderer;

pub use employee_form::draw_employee_form;
