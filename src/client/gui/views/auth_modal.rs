use iced::widget::{Button, Column, Container, Row, Space, Text, TextInput};
use iced::{Alignment, Element, Length};

use crate::client::gui::style::{self, BOLD_FONT, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::client::models::app_state::BookifyState;
use crate::client::models::messages::Message;
use crate::client::models::ui_state::AuthForm;

fn field<'a>(label: &'a str, input: TextInput<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(6)
        .push(Text::new(label).size(13).style(TEXT_SECONDARY))
        .push(
            Container::new(input.padding(10).size(14).width(Length::Fill))
                .style(iced::theme::Container::Custom(Box::new(style::input_appearance))),
        )
        .into()
}

fn form_tab<'a>(form: AuthForm, active: AuthForm) -> Element<'a, Message> {
    let label = match form {
        AuthForm::Login => "Login",
        AuthForm::Register => "Sign Up",
    };
    let button_style = if form == active { iced::theme::Button::Primary } else { iced::theme::Button::Text };
    Button::new(Text::new(label).font(BOLD_FONT).size(14))
        .style(button_style)
        .on_press(Message::AuthFormSelected(form))
        .width(Length::Fill)
        .padding([8, 12])
        .into()
}

pub fn view(state: &BookifyState) -> Element<'_, Message> {
    let form = state.modals.auth_form;
    let submit = match form {
        AuthForm::Login => Message::SubmitLogin,
        AuthForm::Register => Message::SubmitRegister,
    };

    let fields: Element<Message> = match form {
        AuthForm::Login => Column::new()
            .spacing(14)
            .push(field(
                "Email",
                TextInput::new("you@example.com", &state.login.email)
                    .on_input(Message::LoginEmailChanged)
                    .on_submit(submit.clone()),
            ))
            .push(field(
                "Password",
                TextInput::new("Password", &state.login.password)
                    .on_input(Message::LoginPasswordChanged)
                    .on_submit(submit.clone())
                    .secure(true),
            ))
            .into(),
        AuthForm::Register => Column::new()
            .spacing(14)
            .push(field(
                "Name",
                TextInput::new("Your name", &state.register.name)
                    .on_input(Message::RegisterNameChanged)
                    .on_submit(submit.clone()),
            ))
            .push(field(
                "Email",
                TextInput::new("you@example.com", &state.register.email)
                    .on_input(Message::RegisterEmailChanged)
                    .on_submit(submit.clone()),
            ))
            .push(field(
                "Password",
                TextInput::new("Password", &state.register.password)
                    .on_input(Message::RegisterPasswordChanged)
                    .on_submit(submit.clone())
                    .secure(true),
            ))
            .into(),
    };

    let submit_label = if state.auth_pending { "Please wait..." } else { form.title() };
    let title_row = Row::new()
        .align_items(Alignment::Center)
        .push(Text::new(form.title()).font(BOLD_FONT).size(22).style(TEXT_PRIMARY))
        .push(Space::new(Length::Fill, Length::Fixed(0.0)))
        .push(
            Button::new(Text::new("✕").size(16))
                .style(iced::theme::Button::Text)
                .on_press(Message::CloseModals),
        );

    Container::new(
        Column::new()
            .spacing(18)
            .push(title_row)
            .push(Row::new().spacing(8).push(form_tab(AuthForm::Login, form)).push(form_tab(AuthForm::Register, form)))
            .push(fields)
            .push(
                Button::new(Container::new(Text::new(submit_label).font(BOLD_FONT).size(15)).width(Length::Fill).center_x())
                    .style(iced::theme::Button::Primary)
                    .on_press_maybe((!state.auth_pending).then_some(submit))
                    .width(Length::Fill)
                    .padding(12),
            ),
    )
    .padding(28)
    .width(Length::Fixed(420.0))
    .style(iced::theme::Container::Custom(Box::new(style::card_appearance)))
    .into()
}
