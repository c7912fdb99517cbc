//! Collapsible result tree

use iced::widget::{button, column, row, text, Space};
use iced::{Background, Color, Element, Font, Padding};

use super::theme::DarkTheme;
use crate::tree::text::glyph;
use crate::tree::{NodePath, TreeRow};

const INDENT: f32 = 16.0;

/// Draw `rows`; clicking a field emits `on_toggle` with its path.
pub fn view<'a, Message: Clone + 'a>(
    rows: Vec<TreeRow>,
    on_toggle: impl Fn(NodePath) -> Message + 'a,
) -> Element<'a, Message> {
    let items: Vec<Element<'a, Message>> = rows
        .into_iter()
        .map(|tree_row| {
            let indent = Space::with_width(INDENT * tree_row.depth() as f32);
            let line: Element<'a, Message> = match tree_row {
                TreeRow::Field { path, expanded, .. } => {
                    let label = format!("{}:", path.key().unwrap_or_default());
                    button(
                        row![
                            text(glyph(expanded)).size(14).color(DarkTheme::TEXT_MUTED),
                            text(label).size(14).color(DarkTheme::TEXT),
                        ]
                        .spacing(6),
                    )
                    .padding(Padding::from([2.0, 0.0]))
                    .on_press(on_toggle(path))
                    .style(|_theme, status| button::Style {
                        background: match status {
                            button::Status::Hovered => {
                                Some(Background::Color(DarkTheme::SURFACE_HIGHLIGHT))
                            }
                            _ => Some(Background::Color(Color::TRANSPARENT)),
                        },
                        text_color: DarkTheme::TEXT,
                        ..button::Style::default()
                    })
                    .into()
                }
                TreeRow::Literal { text: literal, .. } => text(literal)
                    .size(14)
                    .font(Font::MONOSPACE)
                    .color(DarkTheme::PRIMARY)
                    .into(),
                TreeRow::Truncated { hidden, .. } => text(format!("… {hidden} more"))
                    .size(13)
                    .color(DarkTheme::TEXT_MUTED)
                    .into(),
            };
            row![indent, line].into()
        })
        .collect();

    column(items).spacing(2).into()
}
