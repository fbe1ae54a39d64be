// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay styles.

use crate::lightbox::Phase;
use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Backdrop opacity for an overlay in `phase`.
///
/// A closing overlay fades to transparent; every other phase dims the
/// gallery.
#[must_use]
pub fn backdrop_alpha(phase: Phase) -> f32 {
    match phase {
        Phase::Closing => opacity::TRANSPARENT,
        Phase::Loading | Phase::Active | Phase::Error => opacity::BACKDROP,
    }
}

/// Full-window dimmed backdrop behind the overlay content.
pub fn backdrop(phase: Phase) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: backdrop_alpha(phase),
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Box around a load error message.
#[must_use]
pub fn message_box(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::WHITE),
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Caption strip under a video's first frame.
#[must_use]
pub fn video_caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::GRAY_200),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
