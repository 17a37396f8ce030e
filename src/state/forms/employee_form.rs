//! The employee form: field declarations, skill collection and the
//! contact-preference protocol

use super::error::FormError;
use super::field::{FieldKind, FormField};
use super::node::{FormArray, FormGroup, FormNode};
use super::rules::{Reason, Rule, RuleSpec};
use super::validation::{evaluate, ValidationReport};
use crate::state::{ContactPreference, Employee, Proficiency, Skill};
use std::collections::BTreeMap;

/// Field names and path helpers
pub mod paths {
    pub const FULL_NAME: &str = "fullName";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const CONTACT_PREFERENCE: &str = "contactPreference";
    pub const SKILLS: &str = "skills";
    pub const SKILL_NAME: &str = "skillName";
    pub const EXPERIENCE: &str = "experienceInYears";
    pub const PROFICIENCY: &str = "proficiency";

    /// Path of a field inside the skill at `index`
    pub fn skill(index: usize, field: &str) -> String {
        format!("{SKILLS}.{index}.{field}")
    }

    /// Index of the skill a path points into, if any
    pub fn skill_index(path: &str) -> Option<usize> {
        let mut segments = path.split('.');
        match (segments.next(), segments.next()) {
            (Some(SKILLS), Some(index)) => index.parse().ok(),
            _ => None,
        }
    }
}

// Bounds kept as authored: more than 2 and fewer than 10 characters.
const FULL_NAME_RULES: &[RuleSpec] = &[
    RuleSpec::new(Rule::Required, "Full Name is required."),
    RuleSpec::new(Rule::MinLength(3), "Full Name must be greater than 2 characters."),
    RuleSpec::new(Rule::MaxLength(9), "Full Name must be less than 10 characters."),
];
const EMAIL_REQUIRED: RuleSpec = RuleSpec::new(Rule::Required, "Email is required.");
const EMAIL_BASE_RULES: &[RuleSpec] =
    &[RuleSpec::new(Rule::EmailDomain, "only gmail domain is required.")];
const PHONE_REQUIRED: RuleSpec = RuleSpec::new(Rule::Required, "Phone is required.");
const PHONE_BASE_RULES: &[RuleSpec] = &[];
const SKILL_NAME_RULES: &[RuleSpec] = &[RuleSpec::new(Rule::Required, "Skill Name is required.")];
// Nine digits always fit in a u32
const EXPERIENCE_RULES: &[RuleSpec] = &[
    RuleSpec::new(Rule::Required, "Experience is required."),
    RuleSpec::new(Rule::MaxLength(9), "Experience must be less than 10 digits."),
];
const PROFICIENCY_RULES: &[RuleSpec] = &[RuleSpec::new(Rule::Required, "Proficiency is required.")];

/// Starting values for a new employee form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDefaults {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub contact_preference: ContactPreference,
}

/// Editable draft of one employee
#[derive(Debug, Clone)]
pub struct EmployeeForm {
    root: FormGroup,
    report: ValidationReport,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeForm {
    /// Empty form with a single blank skill entry
    pub fn new() -> Self {
        Self::initialize(&FormDefaults::default())
    }

    /// Form populated from `defaults` with a single blank skill entry
    pub fn initialize(defaults: &FormDefaults) -> Self {
        let root = FormGroup::new()
            .with_field(
                FormField::text(paths::FULL_NAME, "Full Name")
                    .with_rules(FULL_NAME_RULES)
                    .with_value(defaults.full_name.as_str()),
            )
            .with_field(FormField::text(paths::EMAIL, "Email").with_value(defaults.email.as_str()))
            .with_field(FormField::numeric(paths::PHONE, "Phone").with_value(defaults.phone.as_str()))
            .with_field(
                FormField::choice(
                    paths::CONTACT_PREFERENCE,
                    "Contact Preference",
                    ContactPreference::OPTIONS,
                )
                .with_value(defaults.contact_preference.as_str()),
            )
            .with(
                paths::SKILLS,
                FormNode::Array(FormArray::new(vec![skill_group(None)])),
            );

        let mut form = Self {
            root,
            report: ValidationReport::default(),
        };
        form.apply_contact_rules(defaults.contact_preference);
        form.refresh();
        form
    }

    /// Overwrite every field from `employee`; the skill collection is
    /// replaced by one entry per skill, in order.
    pub fn hydrate(&mut self, employee: &Employee) {
        let scalars = [
            (paths::FULL_NAME, employee.full_name.as_str()),
            (paths::EMAIL, employee.email.as_str()),
            (paths::PHONE, employee.phone.as_deref().unwrap_or("")),
            (
                paths::CONTACT_PREFERENCE,
                employee.contact_preference.as_str(),
            ),
        ];
        for (path, value) in scalars {
            if let Some(field) = self.root.field_mut(path) {
                field.reset_value(value.to_string());
            }
        }

        if let Some(skills) = self.root.array_mut(paths::SKILLS) {
            skills.replace(employee.skills.iter().map(|s| skill_group(Some(s))).collect());
        }

        self.apply_contact_rules(employee.contact_preference);
        self.refresh();
    }

    /// Form hydrated from an existing employee
    pub fn from_employee(employee: &Employee) -> Self {
        let mut form = Self::new();
        form.hydrate(employee);
        form
    }

    pub fn skill_count(&self) -> usize {
        self.root.array(paths::SKILLS).map_or(0, FormArray::len)
    }

    /// Append a blank skill entry
    pub fn add_skill(&mut self) {
        if let Some(skills) = self.root.array_mut(paths::SKILLS) {
            skills.push(skill_group(None));
        }
        self.refresh();
    }

    /// Remove the skill at `index`, shifting later entries down
    pub fn remove_skill(&mut self, index: usize) -> Result<(), FormError> {
        let count = self.skill_count();
        let skills = self
            .root
            .array_mut(paths::SKILLS)
            .ok_or_else(|| FormError::UnknownField(paths::SKILLS.to_string()))?;

        skills
            .remove(index)
            .ok_or(FormError::SkillIndexOutOfRange { index, count })?;
        skills.touched = true;
        skills.dirty = true;

        self.refresh();
        Ok(())
    }

    /// Whether the skill collection was touched by a structural change
    #[cfg(test)]
    pub fn skills_touched(&self) -> bool {
        self.root.array(paths::SKILLS).is_some_and(|a| a.touched)
    }

    /// Whether the skill collection was modified by a structural change
    pub fn skills_dirty(&self) -> bool {
        self.root.array(paths::SKILLS).is_some_and(|a| a.dirty)
    }

    pub fn contact_preference(&self) -> ContactPreference {
        self.value(paths::CONTACT_PREFERENCE)
            .parse()
            .unwrap_or_default()
    }

    /// Switch the required contact channel
    pub fn set_contact_preference(&mut self, value: &str) -> Result<(), FormError> {
        let preference: ContactPreference = value.parse()?;
        if let Some(field) = self.root.field_mut(paths::CONTACT_PREFERENCE) {
            field.set_value(preference.as_str().to_string());
        }
        self.apply_contact_rules(preference);
        self.refresh();
        Ok(())
    }

    /// Require the selected channel and strip every rule from the other
    fn apply_contact_rules(&mut self, preference: ContactPreference) {
        let (selected, required, base, other) = match preference {
            ContactPreference::Email => {
                (paths::EMAIL, EMAIL_REQUIRED, EMAIL_BASE_RULES, paths::PHONE)
            }
            ContactPreference::Phone => {
                (paths::PHONE, PHONE_REQUIRED, PHONE_BASE_RULES, paths::EMAIL)
            }
        };

        if let Some(field) = self.root.field_mut(selected) {
            field.add_rule(required);
            for spec in base {
                field.add_rule(*spec);
            }
        }
        if let Some(field) = self.root.field_mut(other) {
            field.clear_rules();
        }
    }

    /// User write to a field by path; the whole value must suit the field
    pub fn set_value(&mut self, path: &str, value: &str) -> Result<(), FormError> {
        if path == paths::CONTACT_PREFERENCE {
            return self.set_contact_preference(value);
        }

        match self.require_field(path)?.kind {
            FieldKind::Choice(options) if !options.contains(&value) => {
                Err(FormError::InvalidChoice {
                    path: path.to_string(),
                    value: value.to_string(),
                })
            }
            FieldKind::Numeric if !value.chars().all(|c| c.is_ascii_digit()) => {
                Err(FormError::InvalidNumber {
                    path: path.to_string(),
                    value: value.to_string(),
                })
            }
            _ => self.write(path, value),
        }
    }

    /// Type a character into a field; ignored if the field rejects it.
    /// Only the new character is checked, so stored values that predate
    /// the digits-only rule stay editable.
    pub fn input_char(&mut self, path: &str, c: char) -> Result<(), FormError> {
        match self.require_field(path)?.with_char(c) {
            Some(value) => self.write(path, &value),
            None => Ok(()),
        }
    }

    /// Delete the last character of a field
    pub fn backspace(&mut self, path: &str) -> Result<(), FormError> {
        match self.require_field(path)?.without_last_char() {
            Some(value) => self.write(path, &value),
            None => Ok(()),
        }
    }

    /// Move a choice field to its next or previous option
    pub fn cycle_choice(&mut self, path: &str, forward: bool) -> Result<(), FormError> {
        match self.require_field(path)?.cycled(forward) {
            Some(value) => self.write(path, &value),
            None => Ok(()),
        }
    }

    fn write(&mut self, path: &str, value: &str) -> Result<(), FormError> {
        if path == paths::CONTACT_PREFERENCE {
            return self.set_contact_preference(value);
        }

        let field = self
            .root
            .field_mut(path)
            .ok_or_else(|| FormError::UnknownField(path.to_string()))?;
        field.set_value(value.to_string());
        self.refresh();
        Ok(())
    }

    /// Record that the user visited and left a field
    pub fn mark_touched(&mut self, path: &str) {
        if let Some(field) = self.root.field_mut(path) {
            field.touched = true;
            self.refresh();
        }
    }

    /// Mark every field touched so all errors surface
    pub fn mark_all_touched(&mut self) {
        self.root.for_each_field_mut(&mut |field| field.touched = true);
        if let Some(skills) = self.root.array_mut(paths::SKILLS) {
            skills.touched = true;
        }
        self.refresh();
    }

    pub fn field(&self, path: &str) -> Option<&FormField> {
        self.root.field(path)
    }

    fn require_field(&self, path: &str) -> Result<&FormField, FormError> {
        self.root
            .field(path)
            .ok_or_else(|| FormError::UnknownField(path.to_string()))
    }

    fn value(&self, path: &str) -> &str {
        self.root.field(path).map(FormField::value).unwrap_or("")
    }

    /// Every field path in display order
    pub fn field_paths(&self) -> Vec<String> {
        self.root.field_paths()
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        self.report.errors()
    }

    pub fn reasons(&self) -> &BTreeMap<String, Vec<Reason>> {
        self.report.reasons()
    }

    pub fn error_for(&self, path: &str) -> &str {
        self.report.error(path)
    }

    pub fn reasons_for(&self, path: &str) -> &[Reason] {
        self.report.reasons_for(path)
    }

    pub fn is_valid(&self) -> bool {
        self.report.is_valid()
    }

    /// Whether the user changed anything since the form was populated
    pub fn is_dirty(&self) -> bool {
        let mut dirty = self.skills_dirty();
        self.root.for_each_field(&mut |field| dirty |= field.dirty);
        dirty
    }

    /// Convert a valid form into an employee record carrying `id`
    pub fn to_employee(&self, id: Option<u32>) -> Result<Employee, FormError> {
        if !self.is_valid() {
            return Err(FormError::Invalid(self.report.invalid_count()));
        }

        let skills = (0..self.skill_count())
            .map(|index| {
                let experience_path = paths::skill(index, paths::EXPERIENCE);
                let experience = self.value(&experience_path);
                Ok(Skill {
                    skill_name: self.value(&paths::skill(index, paths::SKILL_NAME)).to_string(),
                    experience_in_years: experience.parse().map_err(|_| {
                        FormError::InvalidNumber {
                            path: experience_path.clone(),
                            value: experience.to_string(),
                        }
                    })?,
                    proficiency: self
                        .value(&paths::skill(index, paths::PROFICIENCY))
                        .parse()?,
                })
            })
            .collect::<Result<Vec<_>, FormError>>()?;

        let phone = self.value(paths::PHONE);
        Ok(Employee {
            id,
            full_name: self.value(paths::FULL_NAME).to_string(),
            email: self.value(paths::EMAIL).to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            contact_preference: self.contact_preference(),
            skills,
        })
    }

    fn refresh(&mut self) {
        self.report = evaluate(&self.root);
    }
}

/// Build one skill sub-form, blank or populated from `skill`
fn skill_group(skill: Option<&Skill>) -> FormGroup {
    let (name, years, proficiency) = match skill {
        Some(s) => (
            s.skill_name.clone(),
            s.experience_in_years.to_string(),
            s.proficiency,
        ),
        None => (String::new(), String::new(), Proficiency::default()),
    };

    FormGroup::new()
        .with_field(
            FormField::text(paths::SKILL_NAME, "Skill Name")
                .with_rules(SKILL_NAME_RULES)
                .with_value(name),
        )
        .with_field(
            FormField::numeric(paths::EXPERIENCE, "Experience (years)")
                .with_rules(EXPERIENCE_RULES)
                .with_value(years),
        )
        .with_field(
            FormField::choice(paths::PROFICIENCY, "Proficiency", Proficiency::OPTIONS)
                .with_rules(PROFICIENCY_RULES)
                .with_value(proficiency.as_str()),
        )
}
