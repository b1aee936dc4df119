// Widgets for book cards and card collections
use iced::widget::{scrollable, tooltip, Button, Column, Container, Row, Scrollable, Space, Text};
use iced::{Alignment, Element, Length};

use crate::client::gui::style::{self, BOLD_FONT, EMOJI_FONT, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::client::models::messages::Message;
use crate::client::render::cards::{BookCard, CardAction, CollectionView, Cover, Layout};

const GRID_COLUMNS: usize = 5;

pub fn card_view<'a>(card: &BookCard) -> Element<'a, Message> {
    let (cover_w, cover_h, width) = if card.compact { (110.0, 160.0, 150.0) } else { (140.0, 200.0, 180.0) };
    let tile: Element<'a, Message> = match &card.cover {
        Cover::Placeholder { initial } => Text::new(initial.clone()).font(BOLD_FONT).size(42).style(TEXT_PRIMARY).into(),
        // Artwork is not decoded here; the tile links to it instead.
        Cover::Artwork(url) => tooltip(
            Text::new("📖").font(EMOJI_FONT).size(42),
            Text::new(url.clone()).size(11).style(TEXT_SECONDARY),
            tooltip::Position::Bottom,
        )
        .style(iced::theme::Container::Box)
        .into(),
    };

    let cover = Container::new(tile)
        .width(Length::Fixed(cover_w))
        .height(Length::Fixed(cover_h))
        .center_x()
        .center_y()
        .style(iced::theme::Container::Custom(Box::new(style::cover_appearance)));

    let mut buttons = Column::new().spacing(6);
    for action in &card.actions {
        let button_style = match action {
            CardAction::ReadNow => iced::theme::Button::Secondary,
            _ => iced::theme::Button::Primary,
        };
        buttons = buttons.push(
            Button::new(Text::new(action.label()).size(12))
                .style(button_style)
                .on_press(card.intent(*action))
                .width(Length::Fill)
                .padding([6, 8]),
        );
    }

    Container::new(
        Column::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(cover)
            .push(Text::new(card.title.clone()).font(BOLD_FONT).size(14).style(TEXT_PRIMARY))
            .push(Text::new(card.author_line.clone()).size(12).style(TEXT_SECONDARY))
            .push(buttons),
    )
    .padding(12)
    .width(Length::Fixed(width))
    .style(iced::theme::Container::Custom(Box::new(style::card_appearance)))
    .into()
}

pub fn collection_view<'a>(view: &CollectionView) -> Element<'a, Message> {
    match view {
        CollectionView::Empty(text) => Container::new(Text::new(*text).size(14).style(TEXT_SECONDARY))
            .padding([16, 0])
            .into(),
        CollectionView::Cards { layout: Layout::Carousel, .. } => {
            let strip = view
                .visual_cards()
                .into_iter()
                .fold(Row::new().spacing(16).padding([0, 0, 12, 0]), |row, (card, _)| row.push(card_view(card)));
            Scrollable::new(strip)
                .direction(scrollable::Direction::Horizontal(scrollable::Properties::default()))
                .width(Length::Fill)
                .into()
        }
        CollectionView::Cards { cards, .. } => {
            let mut grid = Column::new().spacing(16);
            for chunk in cards.chunks(GRID_COLUMNS) {
                let row = chunk.iter().fold(Row::new().spacing(16), |row, card| row.push(card_view(card)));
                grid = grid.push(row);
            }
            grid.push(Space::new(Length::Fill, Length::Fixed(8.0))).into()
        }
    }
}
