//! Query input plus the Search button

use iced::widget::{button, row, text, text_input};
use iced::{Background, Border, Color, Element, Length, Padding};

use super::theme::DarkTheme;

pub const PLACEHOLDER: &str = "Enter your search query";

/// Search bar component
///
/// Enter in the input and the button both emit `on_submit`. Only the
/// button is disabled while `loading`.
pub fn view<'a, Message: Clone + 'a>(
    value: &str,
    loading: bool,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    let input = text_input(PLACEHOLDER, value)
        .on_input(on_input)
        .on_submit(on_submit.clone())
        .padding(Padding::new(12.0))
        .size(16)
        .width(Length::Fill)
        .style(|_theme, _status| text_input::Style {
            background: Background::Color(DarkTheme::SURFACE),
            border: Border {
                color: DarkTheme::BORDER,
                width: 1.0,
                radius: 8.0.into(),
            },
            icon: DarkTheme::TEXT_MUTED,
            placeholder: DarkTheme::TEXT_PLACEHOLDER,
            value: DarkTheme::TEXT,
            selection: DarkTheme::SELECTION,
        });

    let label = if loading { "Searching…" } else { "Search" };
    let submit = button(text(label).size(15))
        .padding(Padding::from([12.0, 18.0]))
        .on_press_maybe((!loading).then_some(on_submit))
        .style(move |_theme, _status| button::Style {
            background: Some(Background::Color(if loading {
                DarkTheme::SURFACE_HIGHLIGHT
            } else {
                DarkTheme::PRIMARY
            })),
            text_color: if loading { DarkTheme::TEXT_MUTED } else { Color::WHITE },
            border: Border::default().rounded(8),
            ..button::Style::default()
        });

    row![input, submit].spacing(8).into()
}
