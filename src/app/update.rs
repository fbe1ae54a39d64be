// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The lightbox controller answers every message with a list of
//! [`Effect`]s; [`run_effects`] turns them into Iced tasks whose results come
//! back as new messages.

use super::Message;
use crate::gallery::WarmupSummary;
use crate::i18n::fluent::I18n;
use crate::lightbox::{Effect, KeyOutcome, Lightbox};
use crate::media::PreloadCache;
use crate::ui::widgets::animated_spinner;
use crate::ui::{gallery, overlay};
use iced::Task;

/// Mutable view of the application state needed by [`update`].
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub cache: &'a PreloadCache,
    pub lightbox: &'a mut Lightbox,
    pub warmup: &'a mut Option<WarmupSummary>,
    pub spinner_rotation: &'a mut f32,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(gallery::Message::ThumbnailPressed(index)) => {
            let effects = ctx.lightbox.navigate_to(index);
            run_effects(ctx.cache, effects)
        }
        Message::Overlay(overlay::Message::Click { overlay, target }) => {
            let effects = ctx.lightbox.click(overlay, target);
            run_effects(ctx.cache, effects)
        }
        Message::GalleryWarmed(summary) => {
            let stats = ctx.cache.stats();
            tracing::info!(
                loaded = summary.loaded,
                failed = summary.failed,
                background = summary.background_started,
                hit_rate = stats.hit_rate(),
                "gallery warm-up settled"
            );
            *ctx.warmup = Some(summary);
            Task::none()
        }
        Message::ContentLoaded { overlay, result } => match result {
            Ok(handle) => {
                ctx.lightbox.content_loaded(overlay, handle);
                Task::none()
            }
            Err(err) => {
                let effects = ctx.lightbox.content_failed(overlay, &err, ctx.i18n);
                run_effects(ctx.cache, effects)
            }
        },
        Message::Prefetched { source, result } => {
            match result {
                Ok(()) => tracing::debug!(source = %source, "neighbour preloaded"),
                Err(err) => {
                    tracing::warn!(source = %source, reason = %err.reason, "neighbour preload failed");
                }
            }
            Task::none()
        }
        Message::TimerFired(timer) => {
            let effects = ctx.lightbox.timer_fired(timer);
            run_effects(ctx.cache, effects)
        }
        Message::KeyPressed(key) => match ctx.lightbox.key_pressed(key) {
            KeyOutcome::Ignored => Task::none(),
            KeyOutcome::Consumed(effects) => run_effects(ctx.cache, effects),
        },
        Message::SpinnerTick(_) => {
            *ctx.spinner_rotation = animated_spinner::advance(*ctx.spinner_rotation);
            Task::none()
        }
    }
}

/// Turns controller effects into one batched task.
pub fn run_effects(cache: &PreloadCache, effects: Vec<Effect>) -> Task<Message> {
    Task::batch(effects.into_iter().map(|effect| run_effect(cache, effect)))
}

fn run_effect(cache: &PreloadCache, effect: Effect) -> Task<Message> {
    match effect {
        Effect::LoadContent { overlay, source } => {
            let cache = cache.clone();
            Task::perform(async move { cache.preload(source).await }, move |result| {
                Message::ContentLoaded { overlay, result }
            })
        }
        // The sleep is created on first poll, inside the runtime driving the task.
        Effect::Schedule { delay, timer } => Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| Message::TimerFired(timer),
        ),
        Effect::Preload { source } => {
            let cache = cache.clone();
            let requested = source.clone();
            Task::perform(
                async move { cache.preload(requested).await.map(|_| ()) },
                move |result| Message::Prefetched { source, result },
            )
        }
    }
}
