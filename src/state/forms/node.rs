//! Tagged form tree: scalar fields, named groups and arrays of groups
//!
//! Paths are dot separated; a numeric segment indexes into an array, so
//! `skills.1.skillName` names the skill name of the second skill group.

use super::field::FormField;

#[derive(Debug, Clone)]
pub enum FormNode {
    Field(FormField),
    Group(FormGroup),
    Array(FormArray),
}

/// Ordered list of named child nodes
#[derive(Debug, Clone, Default)]
pub struct FormGroup {
    children: Vec<(String, FormNode)>,
}

impl FormGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append a named child
    pub fn with(mut self, name: &str, node: FormNode) -> Self {
        self.children.push((name.to_string(), node));
        self
    }

    /// Builder: append a field under its own name
    pub fn with_field(self, field: FormField) -> Self {
        let name = field.name.clone();
        self.with(&name, FormNode::Field(field))
    }

    pub fn children(&self) -> impl Iterator<Item = (&str, &FormNode)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn child(&self, name: &str) -> Option<&FormNode> {
        self.children
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut FormNode> {
        self.children
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    pub fn array(&self, name: &str) -> Option<&FormArray> {
        match self.child(name) {
            Some(FormNode::Array(array)) => Some(array),
            _ => None,
        }
    }

    pub fn array_mut(&mut self, name: &str) -> Option<&mut FormArray> {
        match self.child_mut(name) {
            Some(FormNode::Array(array)) => Some(array),
            _ => None,
        }
    }

    /// Resolve a dotted path to a field
    pub fn field(&self, path: &str) -> Option<&FormField> {
        let segments: Vec<&str> = path.split('.').collect();
        self.field_at(&segments)
    }

    /// Resolve a dotted path to a mutable field
    pub fn field_mut(&mut self, path: &str) -> Option<&mut FormField> {
        let segments: Vec<&str> = path.split('.').collect();
        self.field_at_mut(&segments)
    }

    fn field_at(&self, segments: &[&str]) -> Option<&FormField> {
        let (head, rest) = segments.split_first()?;
        match (self.child(head)?, rest) {
            (FormNode::Field(field), []) => Some(field),
            (FormNode::Group(group), rest) if !rest.is_empty() => group.field_at(rest),
            (FormNode::Array(array), [index, rest @ ..]) if !rest.is_empty() => {
                array.get(index.parse().ok()?)?.field_at(rest)
            }
            _ => None,
        }
    }

    fn field_at_mut(&mut self, segments: &[&str]) -> Option<&mut FormField> {
        let (head, rest) = segments.split_first()?;
        match (self.child_mut(head)?, rest) {
            (FormNode::Field(field), []) => Some(field),
            (FormNode::Group(group), rest) if !rest.is_empty() => group.field_at_mut(rest),
            (FormNode::Array(array), [index, rest @ ..]) if !rest.is_empty() => {
                array.get_mut(index.parse().ok()?)?.field_at_mut(rest)
            }
            _ => None,
        }
    }

    /// Full paths of every field, depth first in declaration order
    pub fn field_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_paths("", &mut paths);
        paths
    }

    fn collect_paths(&self, prefix: &str, paths: &mut Vec<String>) {
        for (name, node) in self.children() {
            let path = join_path(prefix, name);
            match node {
                FormNode::Field(_) => paths.push(path),
                FormNode::Group(group) => group.collect_paths(&path, paths),
                FormNode::Array(array) => {
                    for (index, item) in array.items().iter().enumerate() {
                        item.collect_paths(&join_path(&path, &index.to_string()), paths);
                    }
                }
            }
        }
    }

    /// Visit every field in the tree
    pub fn for_each_field(&self, f: &mut impl FnMut(&FormField)) {
        for (_, node) in self.children() {
            match node {
                FormNode::Field(field) => f(field),
                FormNode::Group(group) => group.for_each_field(f),
                FormNode::Array(array) => {
                    for item in array.items() {
                        item.for_each_field(f);
                    }
                }
            }
        }
    }

    /// Apply `f` to every field in the tree
    pub fn for_each_field_mut(&mut self, f: &mut impl FnMut(&mut FormField)) {
        for (_, node) in self.children.iter_mut() {
            match node {
                FormNode::Field(field) => f(field),
                FormNode::Group(group) => group.for_each_field_mut(f),
                FormNode::Array(array) => {
                    for item in array.items_mut() {
                        item.for_each_field_mut(f);
                    }
                }
            }
        }
    }
}

/// Variable-length list of groups sharing one shape
#[derive(Debug, Clone, Default)]
pub struct FormArray {
    items: Vec<FormGroup>,
    pub touched: bool,
    pub dirty: bool,
}

impl FormArray {
    pub fn new(items: Vec<FormGroup>) -> Self {
        Self {
            items,
            touched: false,
            dirty: false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[FormGroup] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [FormGroup] {
        &mut self.items
    }

    pub fn get(&self, index: usize) -> Option<&FormGroup> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut FormGroup> {
        self.items.get_mut(index)
    }

    pub fn push(&mut self, item: FormGroup) {
        self.items.push(item);
    }

    /// Remove the group at `index`; later groups shift down
    pub fn remove(&mut self, index: usize) -> Option<FormGroup> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Replace every group and reset the interaction flags
    pub fn replace(&mut self, items: Vec<FormGroup>) {
        self.items = items;
        self.touched = false;
        self.dirty = false;
    }
}

pub(crate) fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}
