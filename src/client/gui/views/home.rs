use iced::widget::{Button, Column, Container, Text};
use iced::{Element, Length};

use crate::client::gui::style::{self, BOLD_FONT, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::client::gui::widgets::book_card::collection_view;
use crate::client::models::app_state::{BookifyState, HomeFeed};
use crate::client::models::book::ShelfKind;
use crate::client::models::messages::Message;
use crate::client::models::navigation::Tab;
use crate::client::render::cards::{render_collection, CardVariant, EmptyContext, Layout};

fn section<'a>(title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(12)
        .push(Text::new(title).font(BOLD_FONT).size(22).style(TEXT_PRIMARY))
        .push(body)
        .into()
}

fn feed_body<'a>(feed: &HomeFeed) -> Element<'a, Message> {
    match feed {
        HomeFeed::Loading => Text::new("Loading...").size(14).style(TEXT_SECONDARY).into(),
        HomeFeed::Failed(message) => Text::new(message.clone()).size(14).style(style::DANGER).into(),
        HomeFeed::Ready(books) => {
            collection_view(&render_collection(books, CardVariant::Standard, Layout::Carousel, EmptyContext::Shelf))
        }
    }
}

pub fn view(state: &BookifyState) -> Element<'_, Message> {
    let hero = Container::new(
        Column::new()
            .spacing(14)
            .push(Text::new("Discover Your Next Favorite Book").font(BOLD_FONT).size(30).style(TEXT_PRIMARY))
            .push(Text::new("Explore millions of titles, track your reading and join fellow readers.").size(15))
            .push(
                Button::new(Text::new("Explore Now").font(BOLD_FONT).size(14))
                    .style(iced::theme::Button::Secondary)
                    .on_press(Message::TabSelected(Tab::Browse))
                    .padding([10, 18]),
            ),
    )
    .padding(28)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(style::hero_appearance)));

    let mut content = Column::new().spacing(28).push(hero);

    let reading = state.store.state().shelves.get(ShelfKind::Reading);
    if state.is_signed_in() && !reading.is_empty() {
        let view = render_collection(reading, CardVariant::InProgress, Layout::Carousel, EmptyContext::Shelf);
        content = content.push(section("Continue Reading", collection_view(&view)));
    }

    content
        .push(section("Trending Now", feed_body(&state.trending)))
        .push(section("New Releases", feed_body(&state.new_releases)))
        .into()
}
