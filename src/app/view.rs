// SPDX-License-Identifier: MPL-2.0
//! View composition: the gallery grid with overlay nodes stacked on top.

use super::Message;
use crate::gallery::{GalleryList, WarmupSummary};
use crate::i18n::fluent::I18n;
use crate::lightbox::Document;
use crate::media::PreloadCache;
use crate::ui::{gallery, overlay};
use iced::widget::Stack;
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a GalleryList,
    pub cache: &'a PreloadCache,
    pub warmup: Option<WarmupSummary>,
    pub document: &'a Document,
    pub spinner_rotation: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let grid = gallery::view(&gallery::ViewContext {
        i18n: ctx.i18n,
        gallery: ctx.gallery,
        cache: ctx.cache,
        warmup: ctx.warmup,
    })
    .map(Message::Gallery);

    let overlay_ctx = overlay::ViewContext {
        i18n: ctx.i18n,
        spinner_rotation: ctx.spinner_rotation,
    };

    ctx.document
        .nodes()
        .iter()
        .fold(
            Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(grid),
            |stack, node| stack.push(overlay::view(node, &overlay_ctx).map(Message::Overlay)),
        )
        .into()
}
