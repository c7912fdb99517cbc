//! Expand/collapse bookkeeping for the result tree

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::path::NodePath;

/// How expand entries are keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpandKeying {
    /// Full path from the root. Branches never share state.
    #[default]
    Path,
    /// Field name only. Every field with the same name opens and closes
    /// together, wherever it sits in the tree.
    FieldName,
}

impl ExpandKeying {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "path" => Some(ExpandKeying::Path),
            "field-name" | "field_name" | "name" => Some(ExpandKeying::FieldName),
            _ => None,
        }
    }
}

/// Which tree nodes currently show their children.
///
/// Entries are created on first toggle and live as long as the state does;
/// a new search does not reset them.
#[derive(Debug, Clone, Default)]
pub struct ExpandState {
    keying: ExpandKeying,
    entries: HashMap<NodePath, bool>,
}

impl ExpandState {
    pub fn new(keying: ExpandKeying) -> Self {
        Self {
            keying,
            entries: HashMap::new(),
        }
    }

    pub fn keying(&self) -> ExpandKeying {
        self.keying
    }

    /// Flip the entry for `path`. Absent entries count as collapsed, so the
    /// first toggle expands. Returns the new state.
    pub fn toggle(&mut self, path: &NodePath) -> bool {
        let key = self.key_for(path);
        let entry = self.entries.entry(key).or_insert(false);
        *entry = !*entry;
        *entry
    }

    pub fn is_expanded(&self, path: &NodePath) -> bool {
        self.entries
            .get(&self.key_for(path))
            .copied()
            .unwrap_or(false)
    }

    pub fn set(&mut self, path: &NodePath, expanded: bool) {
        let key = self.key_for(path);
        self.entries.insert(key, expanded);
    }

    /// Mark every field of `value` expanded.
    pub fn expand_all(&mut self, value: &Value) {
        let mut stack = vec![(NodePath::root(), value)];
        while let Some((path, value)) = stack.pop() {
            for (key, child) in fields(value) {
                let child_path = path.child(&key);
                self.set(&child_path, true);
                stack.push((child_path, child));
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn key_for(&self, path: &NodePath) -> NodePath {
        match self.keying {
            ExpandKeying::Path => path.clone(),
            ExpandKeying::FieldName => path.key().into_iter().collect(),
        }
    }
}

/// Named children of a composite value, in iteration order. Array elements
/// are named by index. Scalars have none.
pub(crate) fn fields(value: &Value) -> Vec<(String, &Value)> {
    match value {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(segments: &[&str]) -> NodePath {
        segments.iter().copied().collect()
    }

    #[test]
    fn test_first_toggle_expands() {
        let mut state = ExpandState::default();
        let a = path(&["a"]);
        assert!(!state.is_expanded(&a));
        assert!(state.is_empty());
        assert!(state.toggle(&a));
        assert!(state.is_expanded(&a));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_double_toggle_restores() {
        let mut state = ExpandState::default();
        let a = path(&["a", "b"]);
        state.toggle(&a);
        state.toggle(&a);
        assert!(!state.is_expanded(&a));
        // The entry stays around, just collapsed.
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_path_keying_isolates_branches() {
        let mut state = ExpandState::new(ExpandKeying::Path);
        state.toggle(&path(&["p", "x"]));
        assert!(state.is_expanded(&path(&["p", "x"])));
        assert!(!state.is_expanded(&path(&["q", "x"])));
    }

    #[test]
    fn test_field_name_keying_shares_state() {
        let mut state = ExpandState::new(ExpandKeying::FieldName);
        state.toggle(&path(&["p", "x"]));
        assert!(state.is_expanded(&path(&["q", "x"])));
        assert!(state.is_expanded(&path(&["x"])));
        state.toggle(&path(&["q", "x"]));
        assert!(!state.is_expanded(&path(&["p", "x"])));
    }

    #[test]
    fn test_expand_all_marks_every_field() {
        let mut state = ExpandState::default();
        state.expand_all(&json!({"a": {"b": [1, {"c": null}]}, "d": 2}));
        for p in [
            path(&["a"]),
            path(&["a", "b"]),
            path(&["a", "b", "0"]),
            path(&["a", "b", "1"]),
            path(&["a", "b", "1", "c"]),
            path(&["d"]),
        ] {
            assert!(state.is_expanded(&p), "{p} should be expanded");
        }
        state.clear();
        assert!(state.is_empty());
    }

    #[test]
    fn test_keying_parse() {
        assert_eq!(ExpandKeying::parse("Path"), Some(ExpandKeying::Path));
        assert_eq!(ExpandKeying::parse("field-name"), Some(ExpandKeying::FieldName));
        assert_eq!(ExpandKeying::parse("depth"), None);
    }
}
