//! Node addressing
//!
//! A [`NodePath`] is the ordered list of field names from the root down to
//! a node. Array elements use their decimal index as the field name.

use std::fmt;

/// Path from the root of a result to one of its fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(Vec<String>);

impl NodePath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of the child `key` below `self`.
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(key.to_string());
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Last segment, i.e. the field name of the node.
    pub fn key(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// RFC 6901 JSON Pointer, usable with `serde_json::Value::pointer`.
    pub fn to_pointer(&self) -> String {
        self.0
            .iter()
            .map(|segment| format!("/{}", escape_pointer_token(segment)))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for NodePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("$");
        }
        f.write_str(&self.0.join("."))
    }
}

// JSON Pointer token escape (~0, ~1)
fn escape_pointer_token(raw: &str) -> String {
    raw.replace('~', "~0").replace('/', "~1")
}
