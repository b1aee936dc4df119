use iced::widget::{Button, Column, Container, Row, Space, Text};
use iced::{Alignment, Element, Length};

use crate::client::gui::style::{self, BOLD_FONT, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::client::models::app_state::BookifyState;
use crate::client::models::book::ShelfKind;
use crate::client::models::messages::Message;

pub fn view(state: &BookifyState) -> Element<'_, Message> {
    let title = state.modals.shelf_target().map(|b| b.display_title().to_string()).unwrap_or_default();

    let mut options = Column::new().spacing(10);
    for kind in ShelfKind::ALL {
        options = options.push(
            Button::new(Container::new(Text::new(kind.action_label()).font(BOLD_FONT).size(14)).width(Length::Fill).center_x())
                .style(iced::theme::Button::Primary)
                .on_press(Message::ShelfChosen(kind))
                .width(Length::Fill)
                .padding(12),
        );
    }

    Container::new(
        Column::new()
            .spacing(16)
            .push(
                Row::new()
                    .align_items(Alignment::Center)
                    .push(Text::new("Add to Shelf").font(BOLD_FONT).size(22).style(TEXT_PRIMARY))
                    .push(Space::new(Length::Fill, Length::Fixed(0.0)))
                    .push(
                        Button::new(Text::new("✕").size(16))
                            .style(iced::theme::Button::Text)
                            .on_press(Message::CloseModals),
                    ),
            )
            .push(Text::new(title).size(14).style(TEXT_SECONDARY))
            .push(options),
    )
    .padding(28)
    .width(Length::Fixed(380.0))
    .style(iced::theme::Container::Custom(Box::new(style::card_appearance)))
    .into()
}
