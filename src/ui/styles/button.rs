// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Style for the primary call-to-action (visit link, open blog).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::ACCENT_500)),
            text_color: WHITE,
            border: Border {
                color: palette::ACCENT_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::ACCENT_400)),
            text_color: WHITE,
            border: Border {
                color: palette::ACCENT_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Style for a plain text button (navigation entries, post titles).
pub fn text_link(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();

    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT_500,
        button::Status::Disabled => extended.background.weak.text,
        _ => extended.background.base.text,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for the active navigation entry.
pub fn selected(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: palette::ACCENT_500,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for a disabled button (grayed out, non-interactive). Used while a
/// transition is in flight.
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, _status: button::Status| {
        let extended = theme.extended_palette();
        button::Style {
            background: None,
            text_color: extended.background.weak.text,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
