//! Collapsible tree over an arbitrary JSON result

mod expand;
mod path;
mod rows;
pub mod text;

pub use expand::{ExpandKeying, ExpandState};
pub use path::NodePath;
pub use rows::{visible_rows, TreeRow, DEFAULT_MAX_DEPTH};
