use iced::widget::{Button, Column, Container, Row, Text};
use iced::{Alignment, Element, Length};

use crate::client::gui::style::{self, ACCENT_COLOR, BOLD_FONT, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::client::models::app_state::BookifyState;
use crate::client::models::messages::Message;
use crate::client::render::pages::render_profile;

fn stat_card<'a>(value: String, label: &'a str) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(6)
            .align_items(Alignment::Center)
            .push(Text::new(value).font(BOLD_FONT).size(28).style(ACCENT_COLOR))
            .push(Text::new(label).size(13).style(TEXT_SECONDARY)),
    )
    .padding(20)
    .width(Length::Fill)
    .center_x()
    .style(iced::theme::Container::Custom(Box::new(style::card_appearance)))
    .into()
}

pub fn view(state: &BookifyState) -> Element<'_, Message> {
    let app = state.store.state();
    let Some(user) = app.current_user.as_ref() else {
        return Text::new("Loading profile...").size(14).style(TEXT_SECONDARY).into();
    };
    let profile = render_profile(user, app.stats.as_ref(), &app.joined_groups);

    let identity = Row::new()
        .spacing(20)
        .align_items(Alignment::Center)
        .push(
            Container::new(Text::new(profile.initial).font(BOLD_FONT).size(36))
                .width(Length::Fixed(80.0))
                .height(Length::Fixed(80.0))
                .center_x()
                .center_y()
                .style(iced::theme::Container::Custom(Box::new(style::avatar_appearance))),
        )
        .push(
            Column::new()
                .spacing(4)
                .push(Text::new(profile.name).font(BOLD_FONT).size(24).style(TEXT_PRIMARY))
                .push(Text::new(profile.email).size(14).style(TEXT_SECONDARY)),
        );

    let stats = Row::new()
        .spacing(16)
        .push(stat_card(profile.books_read, "Books Read"))
        .push(stat_card(profile.pages_read, "Pages Read"))
        .push(stat_card(profile.genres_explored, "Genres Explored"))
        .push(stat_card(profile.groups_joined, "Groups Joined"));

    let actions = Row::new()
        .spacing(12)
        .push(
            Button::new(Text::new("Refresh").size(14))
                .style(iced::theme::Button::Secondary)
                .on_press(Message::RefreshProfile)
                .padding([8, 16]),
        )
        .push(
            Button::new(Text::new("Logout").size(14))
                .style(iced::theme::Button::Destructive)
                .on_press(Message::Logout)
                .padding([8, 16]),
        );

    Column::new().spacing(28).push(identity).push(stats).push(actions).into()
}
