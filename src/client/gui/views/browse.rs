use iced::widget::{Column, PickList, Row, Text};
use iced::{Alignment, Element};

use crate::client::gui::style::{self, BOLD_FONT, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::client::gui::widgets::book_card::collection_view;
use crate::client::models::app_state::BookifyState;
use crate::client::models::messages::Message;
use crate::client::models::search_state::{Language, OrderBy, PrintType, SearchOutcome};
use crate::client::render::cards::{render_collection, CardVariant, EmptyContext, Layout};

pub fn view(state: &BookifyState) -> Element<'_, Message> {
    let options = state.search.options();
    let filters = Row::new()
        .spacing(16)
        .align_items(Alignment::Center)
        .push(Text::new("Sort by").size(13).style(TEXT_SECONDARY))
        .push(PickList::new(OrderBy::ALL, Some(options.order_by), Message::OrderByChanged))
        .push(Text::new("Type").size(13).style(TEXT_SECONDARY))
        .push(PickList::new(PrintType::ALL, Some(options.print_type), Message::PrintTypeChanged))
        .push(Text::new("Language").size(13).style(TEXT_SECONDARY))
        .push(PickList::new(Language::ALL, Some(options.language), Message::LanguageChanged));

    let results: Element<Message> = match state.search.outcome() {
        SearchOutcome::Idle => Text::new("Type a title, author or topic and press Enter.").size(14).style(TEXT_SECONDARY).into(),
        SearchOutcome::Searching => Text::new("Searching...").size(14).style(TEXT_SECONDARY).into(),
        SearchOutcome::Failed(message) => Text::new(message.clone()).size(14).style(style::DANGER).into(),
        SearchOutcome::Empty => collection_view(&render_collection(&[], CardVariant::Standard, Layout::Grid, EmptyContext::Search)),
        SearchOutcome::Results(books) => {
            collection_view(&render_collection(books, CardVariant::Standard, Layout::Grid, EmptyContext::Search))
        }
    };

    let query = &state.store.state().current_query;
    let title = if query.is_empty() { "Browse Books".to_string() } else { format!("Results for {}", query) };

    Column::new()
        .spacing(20)
        .push(Text::new(title).font(BOLD_FONT).size(24).style(TEXT_PRIMARY))
        .push(filters)
        .push(results)
        .into()
}
