use iced::widget::{Column, Text};
use iced::Element;

use crate::client::gui::style::{BOLD_FONT, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::client::gui::widgets::book_card::collection_view;
use crate::client::models::app_state::BookifyState;
use crate::client::models::book::ShelfKind;
use crate::client::models::messages::Message;
use crate::client::render::cards::{render_collection, CardVariant, EmptyContext, Layout};

pub fn view(state: &BookifyState) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(24)
        .push(Text::new("My Books").font(BOLD_FONT).size(24).style(TEXT_PRIMARY));

    if !state.shelves_loaded {
        content = content.push(Text::new("Loading your shelves...").size(14).style(TEXT_SECONDARY));
    }

    let shelves = &state.store.state().shelves;
    for kind in ShelfKind::ALL {
        let variant = match kind {
            ShelfKind::Reading => CardVariant::InProgress,
            ShelfKind::WantToRead | ShelfKind::History => CardVariant::Compact,
        };
        let view = render_collection(shelves.get(kind), variant, Layout::Grid, EmptyContext::Shelf);
        content = content.push(
            Column::new()
                .spacing(12)
                .push(Text::new(kind.label()).font(BOLD_FONT).size(20).style(TEXT_PRIMARY))
                .push(collection_view(&view)),
        );
    }
    content.into()
}
