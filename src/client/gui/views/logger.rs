use iced::widget::{Container, Row, Space, Text};
use iced::{Color, Element, Length};

use crate::client::gui::style::{self, EMOJI_FONT};
use crate::client::models::messages::Message;
use crate::client::models::ui_state::{LogLevel, LogMessage};

fn emoji(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Success => "✅",
        LogLevel::Error => "❌",
        LogLevel::Info => "ℹ️",
        LogLevel::Warning => "⚠️",
    }
}

fn color(level: LogLevel) -> Color {
    match level {
        LogLevel::Success => style::SUCCESS,
        LogLevel::Error => style::DANGER,
        LogLevel::Info => Color::from_rgb(0.2, 0.6, 1.0),
        LogLevel::Warning => Color::from_rgb(1.0, 0.8, 0.0),
    }
}

/// Alert bar showing the latest message only.
pub fn logger_view(messages: &[LogMessage]) -> Element<'_, Message> {
    let Some(log) = messages.last() else {
        return Space::new(Length::Fill, Length::Fixed(0.0)).into();
    };
    let bg_color = color(log.level);
    Container::new(
        Row::new()
            .spacing(12)
            .push(Text::new(emoji(log.level)).font(EMOJI_FONT).size(20).style(Color::WHITE))
            .push(Text::new(&log.message).size(16).style(Color::WHITE)),
    )
    .padding([12, 16])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| {
        iced::widget::container::Appearance {
            background: Some(iced::Background::Color(bg_color)),
            text_color: Some(Color::WHITE),
            border: iced::Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            shadow: iced::Shadow {
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            },
        }
    })))
    .into()
}
