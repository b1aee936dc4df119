// Shared palette and container styles for every view
use iced::widget::container::Appearance;
use iced::{Background, Border, Color, Font, Shadow, Theme, Vector};

pub const BG_MAIN: Color = Color::from_rgb(0.07, 0.06, 0.16); // Deep violet
pub const CARD_BG: Color = Color::from_rgb(0.16, 0.14, 0.30);
pub const INPUT_BG: Color = Color::from_rgb(0.11, 0.10, 0.24);
pub const ACCENT_COLOR: Color = Color::from_rgb(0.42, 0.07, 0.80); // #6a11cb
pub const HIGHLIGHT: Color = Color::from_rgb(0.15, 0.46, 0.99); // #2575fc
pub const TEXT_PRIMARY: Color = Color::WHITE;
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.72, 0.72, 0.78);
pub const SUCCESS: Color = Color::from_rgb(0.2, 0.8, 0.4);
pub const DANGER: Color = Color::from_rgb(1.0, 0.3, 0.3);

pub const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");
pub const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn plain(background: Color, radius: f32, shadow: bool) -> Appearance {
    Appearance {
        background: Some(Background::Color(background)),
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: radius.into(),
        },
        shadow: if shadow {
            Shadow {
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            }
        } else {
            Shadow::default()
        },
    }
}

pub fn bg_main_appearance(_: &Theme) -> Appearance {
    plain(BG_MAIN, 0.0, false)
}

pub fn header_appearance(_: &Theme) -> Appearance {
    plain(INPUT_BG, 0.0, true)
}

pub fn sidebar_appearance(_: &Theme) -> Appearance {
    plain(INPUT_BG, 0.0, false)
}

pub fn card_appearance(_: &Theme) -> Appearance {
    plain(CARD_BG, 16.0, true)
}

pub fn input_appearance(_: &Theme) -> Appearance {
    Appearance {
        border: Border {
            width: 1.0,
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.12),
            radius: 10.0.into(),
        },
        ..plain(INPUT_BG, 10.0, false)
    }
}

pub fn hero_appearance(_: &Theme) -> Appearance {
    plain(ACCENT_COLOR, 20.0, true)
}

pub fn cover_appearance(_: &Theme) -> Appearance {
    plain(Color::from_rgb(0.32, 0.12, 0.62), 8.0, false)
}

pub fn avatar_appearance(_: &Theme) -> Appearance {
    plain(HIGHLIGHT, 40.0, false)
}

pub fn backdrop_appearance(_: &Theme) -> Appearance {
    plain(Color::from_rgba(0.0, 0.0, 0.0, 0.65), 0.0, false)
}

pub fn suggestions_appearance(_: &Theme) -> Appearance {
    Appearance {
        border: Border {
            width: 1.0,
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.08),
            radius: 10.0.into(),
        },
        ..plain(CARD_BG, 10.0, true)
    }
}
