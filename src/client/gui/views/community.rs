use iced::widget::{Button, Column, Container, Row, Space, Text};
use iced::{Alignment, Element, Length};

use crate::client::gui::style::{self, BOLD_FONT, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::client::models::app_state::BookifyState;
use crate::client::models::messages::Message;
use crate::client::render::pages::render_groups;

pub fn view(state: &BookifyState) -> Element<'_, Message> {
    let mut list = Column::new().spacing(16);
    for group in render_groups(&state.store.state().joined_groups) {
        let button_style = if group.joined { iced::theme::Button::Secondary } else { iced::theme::Button::Primary };
        list = list.push(
            Container::new(
                Row::new()
                    .spacing(16)
                    .align_items(Alignment::Center)
                    .push(
                        Column::new()
                            .spacing(4)
                            .push(Text::new(group.name).font(BOLD_FONT).size(18).style(TEXT_PRIMARY))
                            .push(Text::new(group.members).size(13).style(TEXT_SECONDARY)),
                    )
                    .push(Space::new(Length::Fill, Length::Fixed(0.0)))
                    .push(
                        Button::new(Text::new(group.button_label).font(BOLD_FONT).size(14))
                            .style(button_style)
                            .on_press(Message::GroupToggled(group.id.to_string()))
                            .padding([8, 18]),
                    ),
            )
            .padding(20)
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(style::card_appearance))),
        );
    }

    Column::new()
        .spacing(20)
        .push(Text::new("Community").font(BOLD_FONT).size(24).style(TEXT_PRIMARY))
        .push(Text::new("Join reading groups and discuss books with other readers.").size(14).style(TEXT_SECONDARY))
        .push(list)
        .into()
}
