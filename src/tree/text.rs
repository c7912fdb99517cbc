//! Plain-text rendering of tree rows, used by the `query` command

use super::rows::TreeRow;

pub const EXPANDED_GLYPH: &str = "▾";
pub const COLLAPSED_GLYPH: &str = "▸";

const INDENT: &str = "  ";

pub fn glyph(expanded: bool) -> &'static str {
    if expanded {
        EXPANDED_GLYPH
    } else {
        COLLAPSED_GLYPH
    }
}

/// One line per row, indented by depth.
pub fn render_text(rows: &[TreeRow]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&INDENT.repeat(row.depth()));
        match row {
            TreeRow::Field { path, expanded, .. } => {
                out.push_str(glyph(*expanded));
                out.push(' ');
                out.push_str(path.key().unwrap_or_default());
                out.push(':');
            }
            TreeRow::Literal { text, .. } => out.push_str(text),
            TreeRow::Truncated { hidden, .. } => {
                out.push_str(&format!("… {hidden} more"));
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{visible_rows, ExpandState};
    use serde_json::json;

    #[test]
    fn test_render_expanded_tree() {
        let value = json!({"a": {"b": 1}, "c": [true, null]});
        let mut state = ExpandState::default();
        state.expand_all(&value);
        let text = render_text(&visible_rows(&value, &state, 8));
        assert_eq!(
            text,
            "▾ a:\n  ▾ b:\n    1\n▾ c:\n  ▾ 0:\n    true\n  ▾ 1:\n    null\n"
        );
    }

    #[test]
    fn test_render_collapsed_and_truncated() {
        let value = json!({"a": {"b": {"c": 1}}});
        let mut state = ExpandState::default();
        assert_eq!(render_text(&visible_rows(&value, &state, 8)), "▸ a:\n");

        state.expand_all(&value);
        assert_eq!(
            render_text(&visible_rows(&value, &state, 1)),
            "▾ a:\n  … 1 more\n"
        );
    }
}
