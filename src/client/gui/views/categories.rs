use iced::widget::{Button, Column, Row, Text};
use iced::{Alignment, Element, Length};

use crate::client::gui::style::{BOLD_FONT, EMOJI_FONT, TEXT_PRIMARY};
use crate::client::models::messages::Message;
use crate::client::render::pages::render_categories;

pub fn view<'a>() -> Element<'a, Message> {
    let mut grid = Column::new().spacing(16);
    for chunk in render_categories().chunks(4) {
        let row = chunk.iter().fold(Row::new().spacing(16), |row, category| {
            row.push(
                Button::new(
                    Column::new()
                        .spacing(8)
                        .align_items(Alignment::Center)
                        .push(Text::new(category.icon).font(EMOJI_FONT).size(32))
                        .push(Text::new(category.name).font(BOLD_FONT).size(15)),
                )
                .style(iced::theme::Button::Secondary)
                .on_press(Message::CategoryPicked(category.name.to_string()))
                .width(Length::Fixed(180.0))
                .padding(20),
            )
        });
        grid = grid.push(row);
    }

    Column::new()
        .spacing(20)
        .push(Text::new("Categories").font(BOLD_FONT).size(24).style(TEXT_PRIMARY))
        .push(grid)
        .into()
}
