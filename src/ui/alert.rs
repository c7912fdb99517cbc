//! Error banner

use iced::widget::{column, container, text};
use iced::{Background, Border, Element, Length, Padding};

use super::theme::DarkTheme;

pub fn view<'a, Message: 'a>(title: &'a str, message: &'a str) -> Element<'a, Message> {
    container(
        column![
            text(title).size(15).color(DarkTheme::DANGER),
            text(message).size(14).color(DarkTheme::TEXT),
        ]
        .spacing(4),
    )
    .padding(Padding::from([10.0, 14.0]))
    .width(Length::Fill)
    .style(|_theme| container::Style {
        background: Some(Background::Color(DarkTheme::DANGER_SURFACE)),
        border: Border {
            color: DarkTheme::DANGER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    })
    .into()
}
