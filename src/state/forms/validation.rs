//! Validation engine: walks the form tree and aggregates errors per path

use super::node::{join_path, FormGroup, FormNode};
use super::rules::{Reason, RuleSpec};
use std::collections::BTreeMap;

/// Per-path error strings and failure reasons for a whole form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<String, String>,
    reasons: BTreeMap<String, Vec<Reason>>,
}

impl ValidationReport {
    /// Path -> error text (empty when valid or not yet interacted with)
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Path -> failing reasons, whether or not they are surfaced
    pub fn reasons(&self) -> &BTreeMap<String, Vec<Reason>> {
        &self.reasons
    }

    pub fn error(&self, path: &str) -> &str {
        self.errors.get(path).map(String::as_str).unwrap_or("")
    }

    pub fn reasons_for(&self, path: &str) -> &[Reason] {
        self.reasons.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_valid(&self) -> bool {
        self.reasons.values().all(Vec::is_empty)
    }

    /// Number of fields with at least one failing rule
    pub fn invalid_count(&self) -> usize {
        self.reasons.values().filter(|r| !r.is_empty()).count()
    }
}

/// Join the message of every failing rule in declaration order, each
/// followed by a single space.
pub fn aggregate_messages(rules: &[RuleSpec], failing: &[Reason]) -> String {
    rules
        .iter()
        .filter(|spec| failing.contains(&spec.rule.reason()))
        .map(|spec| format!("{} ", spec.message))
        .collect()
}

/// Evaluate every field of the form, recursing into groups and arrays
pub fn evaluate(root: &FormGroup) -> ValidationReport {
    let mut report = ValidationReport::default();
    walk_group(root, "", &mut report);
    report
}

fn walk_group(group: &FormGroup, prefix: &str, report: &mut ValidationReport) {
    for (name, node) in group.children() {
        let path = join_path(prefix, name);
        match node {
            FormNode::Field(field) => {
                report.errors.insert(path.clone(), field.error_text());
                report.reasons.insert(path, field.failing().to_vec());
            }
            FormNode::Group(child) => walk_group(child, &path, report),
            FormNode::Array(array) => {
                for (index, item) in array.items().iter().enumerate() {
                    walk_group(item, &join_path(&path, &index.to_string()), report);
                }
            }
        }
    }
}
