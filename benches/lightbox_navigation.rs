// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for lightbox navigation and cache lookups.
//!
//! Measures the performance of:
//! - Opening an overlay and browsing with the arrow keys (state machine only)
//! - Wrapping index steps over a large gallery
//! - Serving an already-cached source

use criterion::{criterion_group, criterion_main, Criterion};
use futures_util::future::{BoxFuture, FutureExt};
use iced_gallery::error::LoadError;
use iced_gallery::gallery::{Direction, GalleryList};
use iced_gallery::lightbox::{Effect, KeyOutcome, Lightbox, LightboxKey, LightboxTimings};
use iced_gallery::media::{ImageData, MediaHandle, MediaKind, MediaLoader, PreloadCache, SourceId};
use std::hint::black_box;
use std::sync::Arc;

const GALLERY_SIZE: usize = 1_000;

fn gallery() -> GalleryList {
    (0..GALLERY_SIZE)
        .map(|i| SourceId::new(format!("img/{i:04}.jpg")))
        .collect()
}

struct PixelLoader;

impl MediaLoader for PixelLoader {
    fn load(
        &self,
        _source: SourceId,
        _kind: MediaKind,
    ) -> BoxFuture<'static, Result<MediaHandle, LoadError>> {
        async { Ok(MediaHandle::Image(ImageData::from_rgba(1, 1, vec![0; 4]))) }.boxed()
    }
}

/// Fires the timers of `effects` immediately, like an instant clock.
fn settle(lightbox: &mut Lightbox, effects: Vec<Effect>) {
    let mut queue = effects;
    while let Some(effect) = queue.pop() {
        if let Effect::Schedule { timer, .. } = effect {
            queue.extend(lightbox.timer_fired(timer));
        }
    }
}

fn bench_browse(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox_navigation");

    group.bench_function("open_and_browse_10", |b| {
        b.iter(|| {
            let mut lightbox = Lightbox::new(gallery(), LightboxTimings::default());
            let effects = lightbox.navigate_to(0);
            settle(&mut lightbox, effects);
            for _ in 0..10 {
                if let KeyOutcome::Consumed(effects) = lightbox.key_pressed(LightboxKey::ArrowRight)
                {
                    settle(&mut lightbox, effects);
                }
            }
            black_box(lightbox.document().overlay_count());
        });
    });

    group.bench_function("step_wrapping", |b| {
        let gallery = gallery();
        b.iter(|| {
            let mut index = 0;
            for _ in 0..GALLERY_SIZE {
                index = gallery.step(index, Direction::Previous).unwrap_or(0);
            }
            black_box(index);
        });
    });

    group.finish();
}

fn bench_cache_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("preload_cache");

    let cache = PreloadCache::new(Arc::new(PixelLoader));
    let source = SourceId::from("img/0001.jpg");
    let _ = cache.preload(source.clone()).now_or_never();

    group.bench_function("cached_preload", |b| {
        b.iter(|| {
            let handle = cache.preload(black_box(source.clone())).now_or_never();
            black_box(handle);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_browse, bench_cache_hit);
criterion_main!(benches);
