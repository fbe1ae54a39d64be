// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid of the gallery.

use crate::gallery::{GalleryList, WarmupSummary};
use crate::i18n::fluent::I18n;
use crate::media::{MediaHandle, MediaKind, PreloadCache, SourceId};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Image, Row, Scrollable, Stack, Text};
use iced::{ContentFit, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ThumbnailPressed(usize),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a GalleryList,
    pub cache: &'a PreloadCache,
    /// `None` until the visible prefix has settled.
    pub warmup: Option<WarmupSummary>,
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if ctx.gallery.is_empty() {
        return Container::new(Text::new(ctx.i18n.tr("gallery-empty")).size(typography::TITLE_MD))
            .center(Length::Fill)
            .into();
    }

    let mut grid = Column::new().spacing(spacing::SM);
    let items: Vec<(usize, &SourceId)> = ctx.gallery.iter().enumerate().collect();
    for chunk in items.chunks(sizing::THUMBNAILS_PER_ROW) {
        let row = chunk.iter().fold(Row::new().spacing(spacing::SM), |row, (index, source)| {
            row.push(thumbnail(*index, source, ctx))
        });
        grid = grid.push(row);
    }

    Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(Text::new(status_line(ctx)).size(typography::CAPTION))
        .push(Scrollable::new(grid).width(Length::Fill).height(Length::Fill))
        .into()
}

fn status_line(ctx: &ViewContext<'_>) -> String {
    match ctx.warmup {
        Some(summary) => ctx.i18n.tr_with_args(
            "gallery-warmup-done",
            &[
                ("loaded", summary.loaded.to_string().as_str()),
                ("failed", summary.failed.to_string().as_str()),
            ],
        ),
        None => ctx.i18n.tr("gallery-warmup-progress"),
    }
}

fn thumbnail<'a>(index: usize, source: &SourceId, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let face: Element<'a, Message> = match ctx.cache.get(source) {
        Some(handle) => {
            let image = Image::new(handle.preview().handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill);
            match handle {
                MediaHandle::Image(_) => image.into(),
                MediaHandle::Video(_) => Stack::new()
                    .push(image)
                    .push(caption("▶".to_string()))
                    .into(),
            }
        }
        None if source.kind() == MediaKind::Video => {
            caption(format!("▶ {}", source.file_name()))
        }
        None => caption(ctx.i18n.tr("gallery-item-loading")),
    };

    button(face)
        .width(Length::Fixed(sizing::THUMBNAIL))
        .height(Length::Fixed(sizing::THUMBNAIL))
        .padding(spacing::XXS)
        .style(styles::button::thumbnail)
        .on_press(Message::ThumbnailPressed(index))
        .into()
}

fn caption<'a>(label: String) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::CAPTION)
            .color(palette::GRAY_200),
    )
    .center(Length::Fill)
    .into()
}
