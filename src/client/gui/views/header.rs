use iced::widget::{Button, Column, Container, Row, Space, Text, TextInput};
use iced::{Alignment, Element, Length};

use crate::client::gui::style::{self, BOLD_FONT, EMOJI_FONT, SUCCESS, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::client::models::app_state::BookifyState;
use crate::client::models::messages::Message;
use crate::client::models::navigation::Tab;
use crate::client::render::cards::author_line;
use crate::client::render::pages::{render_header, render_nav, HeaderView};

fn tab_icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Home => "🏠",
        Tab::Browse => "🔎",
        Tab::Categories => "🗂",
        Tab::Community => "👥",
        Tab::MyBooks => "📚",
        Tab::Profile => "👤",
    }
}

fn user_card<'a>(header: HeaderView) -> Element<'a, Message> {
    match header {
        HeaderView::SignedOut { label } => Button::new(Text::new(label).font(BOLD_FONT).size(14))
            .style(iced::theme::Button::Primary)
            .on_press(Message::OpenAuth)
            .padding([10, 16])
            .into(),
        HeaderView::SignedIn { initial, name, status } => Row::new()
            .spacing(10)
            .align_items(Alignment::Center)
            .push(
                Container::new(Text::new(initial).font(BOLD_FONT).size(16))
                    .width(Length::Fixed(36.0))
                    .height(Length::Fixed(36.0))
                    .center_x()
                    .center_y()
                    .style(iced::theme::Container::Custom(Box::new(style::avatar_appearance))),
            )
            .push(
                Column::new()
                    .push(Text::new(name).font(BOLD_FONT).size(14).style(TEXT_PRIMARY))
                    .push(Text::new(status).size(12).style(SUCCESS)),
            )
            .push(
                Button::new(Text::new("Logout").size(13))
                    .style(iced::theme::Button::Destructive)
                    .on_press(Message::Logout)
                    .padding([6, 10]),
            )
            .into(),
    }
}

fn search_box(state: &BookifyState) -> Element<'_, Message> {
    let input = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(
            Container::new(
                TextInput::new("Search books, authors...", state.search.input())
                    .on_input(Message::SearchInputChanged)
                    .on_submit(Message::SubmitSearch)
                    .padding(10)
                    .size(14),
            )
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(style::input_appearance))),
        )
        .push(
            Button::new(Text::new("🔍").font(EMOJI_FONT).size(16))
                .style(iced::theme::Button::Primary)
                .on_press(Message::SubmitSearch)
                .padding([8, 12]),
        );

    let suggestions = state.search.suggestions();
    if suggestions.is_empty() {
        return input.into();
    }
    let mut list = Column::new().spacing(2);
    for book in suggestions {
        let title = book.display_title().to_string();
        list = list.push(
            Button::new(
                Column::new()
                    .push(Text::new(title.clone()).font(BOLD_FONT).size(13))
                    .push(Text::new(author_line(&book.authors)).size(11).style(TEXT_SECONDARY)),
            )
            .style(iced::theme::Button::Text)
            .on_press(Message::SuggestionPicked(title))
            .width(Length::Fill)
            .padding([6, 10]),
        );
    }
    list = list.push(
        Button::new(Text::new("Close").size(11).style(TEXT_SECONDARY))
            .style(iced::theme::Button::Text)
            .on_press(Message::DismissSuggestions),
    );

    Column::new()
        .spacing(4)
        .push(input)
        .push(Container::new(list).padding(6).width(Length::Fill).style(iced::theme::Container::Custom(Box::new(style::suggestions_appearance))))
        .into()
}

pub fn header_view(state: &BookifyState) -> Element<'_, Message> {
    let nav_buttons = Row::new()
        .spacing(4)
        .push(
            Button::new(Text::new("☰").size(18))
                .style(iced::theme::Button::Text)
                .on_press(Message::ToggleSidebar)
                .padding([6, 10]),
        )
        .push(
            Button::new(Text::new("◀").size(14))
                .style(iced::theme::Button::Text)
                .on_press_maybe(state.nav.can_go_back().then_some(Message::HistoryBack))
                .padding([6, 8]),
        )
        .push(
            Button::new(Text::new("▶").size(14))
                .style(iced::theme::Button::Text)
                .on_press_maybe(state.nav.can_go_forward().then_some(Message::HistoryForward))
                .padding([6, 8]),
        );

    let logo = Button::new(
        Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(Text::new("📚").font(EMOJI_FONT).size(22))
            .push(Text::new("Bookify").font(BOLD_FONT).size(24).style(TEXT_PRIMARY)),
    )
    .style(iced::theme::Button::Text)
    .on_press(Message::TabSelected(Tab::Home));

    let row = Row::new()
        .spacing(16)
        .align_items(Alignment::Start)
        .push(nav_buttons)
        .push(logo)
        .push(Container::new(search_box(state)).width(Length::FillPortion(3)))
        .push(Space::new(Length::FillPortion(1), Length::Fixed(0.0)))
        .push(user_card(render_header(state.store.state().current_user.as_ref())));

    Container::new(row)
        .padding([14, 20])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(style::header_appearance)))
        .into()
}

/// Side navigation. Collapsed to icons unless the sidebar is open.
pub fn sidebar_view(state: &BookifyState) -> Element<'_, Message> {
    let expanded = state.nav.sidebar_open();
    let mut column = Column::new().spacing(6).padding([16, 10]);
    for item in render_nav(&state.nav) {
        let mut content = Row::new()
            .spacing(10)
            .align_items(Alignment::Center)
            .push(Text::new(tab_icon(item.tab)).font(EMOJI_FONT).size(18));
        if expanded {
            content = content.push(Text::new(item.label).size(14));
        }
        let button_style = if item.active { iced::theme::Button::Primary } else { iced::theme::Button::Text };
        column = column.push(
            Button::new(content)
                .style(button_style)
                .on_press(Message::TabSelected(item.tab))
                .width(Length::Fill)
                .padding([10, 12]),
        );
    }
    Container::new(column)
        .width(Length::Fixed(if expanded { 200.0 } else { 64.0 }))
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(style::sidebar_appearance)))
        .into()
}
