use iced::keyboard::{self, key::Named, Key};
use iced::widget::{Column, Container, Row, Scrollable, Text, TextInput};
use iced::{Alignment, Application, Command, Element, Length, Subscription, Theme};

use crate::client::config::ClientConfig;
use crate::client::gui::style::{self, TEXT_SECONDARY};
use crate::client::gui::views::{auth_modal, browse, categories, community, header, home, logger, profile, shelf_modal, shelves};
use crate::client::models::app_state::{BookifyState, Effect};
use crate::client::models::messages::Message;
use crate::client::models::navigation::Tab;
use crate::client::models::ui_state::ModalKind;
use crate::client::services::api_client::BookifyApi;
use crate::client::services::effects;
use crate::client::utils::session_store::SessionStore;

pub struct BootFlags {
    pub config: ClientConfig,
    pub api: BookifyApi,
    pub session: SessionStore,
    pub initial_tab: Tab,
}

pub struct BookifyApp {
    pub state: BookifyState,
    pub api: BookifyApi,
}

impl BookifyApp {
    fn perform(&self, batch: Vec<Effect>) -> Command<Message> {
        Command::batch(batch.into_iter().map(|effect| {
            let api = self.api.clone();
            Command::perform(effects::run(api, effect), |msg| msg)
        }))
    }

    fn page(&self) -> Element<'_, Message> {
        match self.state.nav.active() {
            Tab::Home => home::view(&self.state),
            Tab::Browse => browse::view(&self.state),
            Tab::Categories => categories::view(),
            Tab::Community => community::view(&self.state),
            Tab::MyBooks => shelves::view(&self.state),
            Tab::Profile => profile::view(&self.state),
        }
    }

    fn modal(&self) -> Option<Element<'_, Message>> {
        if self.state.modals.is_open(ModalKind::Auth) {
            Some(auth_modal::view(&self.state))
        } else if self.state.modals.is_open(ModalKind::Shelf) {
            Some(shelf_modal::view(&self.state))
        } else {
            None
        }
    }
}

fn escape_closes_modals(key: Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        Key::Named(Named::Escape) => Some(Message::CloseModals),
        _ => None,
    }
}

impl Application for BookifyApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = BootFlags;

    fn new(flags: BootFlags) -> (Self, Command<Message>) {
        let mut state = BookifyState::new(flags.session, &flags.config);
        let startup = state.boot(flags.initial_tab);
        let app = BookifyApp { state, api: flags.api };
        let cmd = app.perform(startup);
        (app, cmd)
    }

    fn title(&self) -> String {
        format!("Bookify - {}", self.state.nav.active().label())
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        let effects = self.state.update(message);
        self.perform(effects)
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(escape_closes_modals)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn view(&self) -> Element<Message> {
        let logger_bar: Element<Message> = if self.state.logger.is_empty() {
            Column::new().into()
        } else {
            Container::new(logger::logger_view(&self.state.logger))
                .width(Length::Fill)
                .padding([8, 12, 0, 12])
                .into()
        };

        let mut body = Column::new().spacing(16);
        if let Some(link) = &self.state.reader_link {
            body = body.push(
                Row::new()
                    .spacing(10)
                    .align_items(Alignment::Center)
                    .push(Text::new("Reader link").size(13).style(TEXT_SECONDARY))
                    .push(TextInput::new("", link).size(13).padding(6)),
            );
        }

        // A modal takes over the content area until it is closed.
        let content: Element<Message> = match self.modal() {
            Some(modal) => Container::new(modal)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x()
                .center_y()
                .style(iced::theme::Container::Custom(Box::new(style::backdrop_appearance)))
                .into(),
            None => Scrollable::new(Container::new(body.push(self.page())).padding(28).width(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        };

        let main = Column::new()
            .push(logger_bar)
            .push(header::header_view(&self.state))
            .push(Row::new().push(header::sidebar_view(&self.state)).push(content).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill);

        Container::new(main)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(style::bg_main_appearance)))
            .into()
    }
}
