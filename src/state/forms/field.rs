//! Form field value objects

use super::rules::{Reason, Rule, RuleSpec};
use super::validation::aggregate_messages;

/// How a field accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Digits only
    Numeric,
    /// One of a fixed option list
    Choice(&'static [&'static str]),
}

/// A single scalar form field with its rule set and interaction flags
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    value: String,
    rules: Vec<RuleSpec>,
    failing: Vec<Reason>,
    /// Field has been visited and left
    pub touched: bool,
    /// Field has been written by the user
    pub dirty: bool,
}

impl FormField {
    fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            value: String::new(),
            rules: Vec::new(),
            failing: Vec::new(),
            touched: false,
            dirty: false,
        }
    }

    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    /// Create a new digits-only field
    pub fn numeric(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Numeric)
    }

    /// Create a new choice field, preset to the first option
    pub fn choice(name: &str, label: &str, options: &'static [&'static str]) -> Self {
        let mut field = Self::new(name, label, FieldKind::Choice(options));
        if let Some(first) = options.first() {
            field.reset_value(first.to_string());
        }
        field
    }

    /// Builder: declare the field's rules
    pub fn with_rules(mut self, rules: &[RuleSpec]) -> Self {
        for spec in rules {
            self.add_rule(*spec);
        }
        self
    }

    /// Builder: set the initial value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.reset_value(value.into());
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub fn rules(&self) -> &[RuleSpec] {
        &self.rules
    }

    pub fn has_rule(&self, rule: Rule) -> bool {
        self.rules.iter().any(|spec| spec.rule == rule)
    }

    /// Reasons of every currently failing rule, in declaration order
    pub fn failing(&self) -> &[Reason] {
        &self.failing
    }

    pub fn is_valid(&self) -> bool {
        self.failing.is_empty()
    }

    /// Whether errors for this field should be surfaced
    pub fn is_interacted(&self) -> bool {
        self.touched || self.dirty
    }

    /// Error text shown under the field; empty until the user interacted
    pub fn error_text(&self) -> String {
        if self.is_valid() || !self.is_interacted() {
            return String::new();
        }
        aggregate_messages(&self.rules, &self.failing)
    }

    /// User write: marks the field dirty and re-runs its rules
    pub fn set_value(&mut self, value: String) {
        self.value = value;
        self.dirty = true;
        self.revalidate();
    }

    /// Programmatic write: replaces the value and clears flags
    pub fn reset_value(&mut self, value: String) {
        self.value = value;
        self.touched = false;
        self.dirty = false;
        self.revalidate();
    }

    /// Add a rule unless one of the same kind is already present.
    /// Returns true if the rule set changed.
    pub fn add_rule(&mut self, spec: RuleSpec) -> bool {
        if self.has_rule(spec.rule) {
            return false;
        }
        self.rules.push(spec);
        self.revalidate();
        true
    }

    /// Strip every rule from the field
    pub fn clear_rules(&mut self) {
        self.rules.clear();
        self.revalidate();
    }

    /// Re-run all rules against the current value
    pub fn revalidate(&mut self) {
        self.failing = self
            .rules
            .iter()
            .filter_map(|spec| spec.rule.check(&self.value).err())
            .collect();
    }

    /// Value after typing `c`, or None if the field does not accept it
    pub fn with_char(&self, c: char) -> Option<String> {
        match self.kind {
            FieldKind::Text => Some(format!("{}{}", self.value, c)),
            FieldKind::Numeric if c.is_ascii_digit() => Some(format!("{}{}", self.value, c)),
            FieldKind::Numeric | FieldKind::Choice(_) => None,
        }
    }

    /// Value after a backspace, or None if there is nothing to remove
    pub fn without_last_char(&self) -> Option<String> {
        match self.kind {
            FieldKind::Choice(_) => None,
            _ if self.value.is_empty() => None,
            _ => {
                let mut value = self.value.clone();
                value.pop();
                Some(value)
            }
        }
    }

    /// Next (or previous) option of a choice field, wrapping around
    pub fn cycled(&self, forward: bool) -> Option<String> {
        let FieldKind::Choice(options) = self.kind else {
            return None;
        };
        if options.is_empty() {
            return None;
        }
        let current = options.iter().position(|o| *o == self.value);
        let next = match (current, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(0), false) => options.len() - 1,
            (Some(i), false) => i - 1,
        };
        Some(options[next].to_string())
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Choice(_) => format!("◂ {} ▸", self.value),
            _ => self.value.clone(),
        }
    }
}
