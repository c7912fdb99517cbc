//! Flattening a result into the rows currently visible
//!
//! The walk is iterative so arbitrarily deep results never grow the call
//! stack; `max_depth` bounds how much of them is shown.

use serde_json::Value;

use super::expand::{fields, ExpandState};
use super::path::NodePath;

/// Default nesting limit before content is replaced by a [`TreeRow::Truncated`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// One visible line of the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeRow {
    /// A named field with a toggle.
    Field {
        depth: usize,
        path: NodePath,
        expanded: bool,
    },
    /// A scalar, as compact JSON. No toggle.
    Literal { depth: usize, text: String },
    /// A composite nested past the depth limit; `hidden` children not shown.
    Truncated { depth: usize, hidden: usize },
}

impl TreeRow {
    pub fn depth(&self) -> usize {
        match self {
            TreeRow::Field { depth, .. }
            | TreeRow::Literal { depth, .. }
            | TreeRow::Truncated { depth, .. } => *depth,
        }
    }

    /// Field name for `Field` rows.
    pub fn key(&self) -> Option<&str> {
        match self {
            TreeRow::Field { path, .. } => path.key(),
            _ => None,
        }
    }
}

enum Work<'a> {
    Node {
        value: &'a Value,
        path: NodePath,
        depth: usize,
    },
    Field {
        value: &'a Value,
        path: NodePath,
        depth: usize,
    },
}

/// Rows of `value` that are visible under `expanded`, in display order.
pub fn visible_rows(value: &Value, expanded: &ExpandState, max_depth: usize) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    let mut stack = vec![Work::Node {
        value,
        path: NodePath::root(),
        depth: 0,
    }];

    while let Some(work) = stack.pop() {
        match work {
            Work::Node { value, path, depth } => {
                let children = fields(value);
                if !is_composite(value) {
                    rows.push(TreeRow::Literal {
                        depth,
                        text: value.to_string(),
                    });
                } else if depth >= max_depth {
                    rows.push(TreeRow::Truncated {
                        depth,
                        hidden: children.len(),
                    });
                } else {
                    // Reversed so the first field is popped first.
                    for (key, child) in children.into_iter().rev() {
                        stack.push(Work::Field {
                            value: child,
                            path: path.child(&key),
                            depth,
                        });
                    }
                }
            }
            Work::Field { value, path, depth } => {
                let is_open = expanded.is_expanded(&path);
                rows.push(TreeRow::Field {
                    depth,
                    path: path.clone(),
                    expanded: is_open,
                });
                if is_open {
                    stack.push(Work::Node {
                        value,
                        path,
                        depth: depth + 1,
                    });
                }
            }
        }
    }

    rows
}

fn is_composite(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}
