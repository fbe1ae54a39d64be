// SPDX-License-Identifier: MPL-2.0
//! Renders lightbox overlay nodes on top of the gallery.
//!
//! Each node is a full-window backdrop with the content centered inside it.
//! Presses on the content are captured by an inner mouse area so only presses
//! on the surrounding backdrop report [`ClickTarget::Backdrop`].

use crate::i18n::fluent::I18n;
use crate::lightbox::{ClickTarget, Content, OverlayId, OverlayNode, Phase};
use crate::media::{MediaHandle, VideoData};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{mouse_area, Column, Container, Image, Text};
use iced::{Alignment, ContentFit, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Click {
        overlay: OverlayId,
        target: ClickTarget,
    },
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub spinner_rotation: f32,
}

/// Builds the element for one overlay node.
pub fn view<'a>(node: &'a OverlayNode, ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let overlay = node.id;

    let content = mouse_area(content(node, ctx)).on_press(Message::Click {
        overlay,
        target: ClickTarget::Content,
    });

    let backdrop = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .center(Length::Fill)
        .style(styles::overlay::backdrop(node.phase));

    mouse_area(backdrop)
        .on_press(Message::Click {
            overlay,
            target: ClickTarget::Backdrop,
        })
        .into()
}

fn content<'a>(node: &'a OverlayNode, ctx: &ViewContext<'_>) -> Element<'a, Message> {
    match (&node.content, node.phase) {
        // A closing overlay keeps nothing interactive on screen.
        (_, Phase::Closing) => Container::new(Text::new("")).into(),
        (Content::Spinner, _) => {
            AnimatedSpinner::new(palette::WHITE, ctx.spinner_rotation).into_element()
        }
        (Content::Media(MediaHandle::Image(image)), _) => Image::new(image.handle.clone())
            .content_fit(ContentFit::Contain)
            .into(),
        (Content::Media(MediaHandle::Video(video)), _) => video_poster(node, video, ctx.i18n),
        (Content::Message(message), _) => Container::new(
            Text::new(message.as_str())
                .size(typography::BODY)
                .color(palette::WHITE),
        )
        .padding(spacing::MD)
        .max_width(sizing::MESSAGE_MAX_WIDTH)
        .style(styles::overlay::message_box)
        .into(),
    }
}

fn video_poster<'a>(node: &OverlayNode, video: &VideoData, i18n: &I18n) -> Element<'a, Message> {
    let size = format_byte_size(video.byte_len);
    let label = i18n.tr_with_args(
        "lightbox-video-poster",
        &[("name", node.source.file_name()), ("size", size.as_str())],
    );
    let hint = i18n.tr("lightbox-hint");

    let frame = Image::new(video.poster.handle.clone())
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill);

    let caption = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(format!("▶ {label}")).size(typography::TITLE_MD))
            .push(Text::new(hint).size(typography::CAPTION)),
    )
    .padding([spacing::SM, spacing::LG])
    .style(styles::overlay::video_caption);

    Column::new()
        .spacing(spacing::XS)
        .align_x(Alignment::Center)
        .push(frame)
        .push(caption)
        .into()
}

/// Formats a byte count in human-readable binary units.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_byte_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}
