// SPDX-License-Identifier: MPL-2.0
//! Gallery button styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::button;
use iced::{Background, Border, Shadow, Theme};

/// Style for a gallery thumbnail tile.
pub fn thumbnail(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
        button::Status::Active | button::Status::Disabled => palette::GRAY_700,
    };
    button::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: palette::GRAY_200,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}
