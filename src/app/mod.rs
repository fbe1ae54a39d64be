// SPDX-License-Identifier: MPL-2.0
//! Application root state: the gallery grid, the preload cache and the
//! lightbox.
//!
//! The `App` struct wires the domains together and translates lightbox
//! effects into Iced tasks. Startup warms the cache for the gallery and, when
//! requested, opens one item right away.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::gallery::{self, scanner, GalleryList, WarmupSummary};
use crate::i18n::fluent::I18n;
use crate::lightbox::Lightbox;
use crate::media::{FileLoader, PreloadCache};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    cache: PreloadCache,
    lightbox: Lightbox,
    /// Set once the visible prefix of the gallery has settled.
    warmup: Option<WarmupSummary>,
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery_len", &self.lightbox.gallery().len())
            .field("cached", &self.cache.len())
            .field("overlays", &self.lightbox.document().overlay_count())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Where the gallery comes from and how its sources resolve to files.
fn gallery_source(directory: Option<PathBuf>, config: &Config) -> (GalleryList, FileLoader) {
    match directory {
        Some(dir) => {
            let gallery = scanner::scan_directory(&dir).unwrap_or_else(|err| {
                tracing::warn!(directory = %dir.display(), error = %err, "cannot scan gallery directory");
                GalleryList::default()
            });
            (gallery, FileLoader::new(dir))
        }
        None => {
            let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            (GalleryList::from_config(&config.gallery), FileLoader::new(root))
        }
    }
}

impl App {
    /// Builds the initial state and starts the cache warm-up.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }
        let i18n = I18n::new(flags.lang.clone(), &config);
        tracing::info!(locale = %i18n.current_locale(), "localization ready");

        let (gallery, loader) = gallery_source(flags.directory, &config);
        tracing::info!(items = gallery.len(), root = %loader.root().display(), "gallery loaded");

        Self::with_gallery(i18n, &config, gallery, Arc::new(loader), flags.open_index)
    }

    fn with_gallery(
        i18n: I18n,
        config: &Config,
        gallery: GalleryList,
        loader: Arc<dyn crate::media::MediaLoader>,
        open_index: Option<usize>,
    ) -> (Self, Task<Message>) {
        let cache = PreloadCache::new(loader);
        let mut app = App {
            i18n,
            cache: cache.clone(),
            lightbox: Lightbox::new(gallery.clone(), config.lightbox.timings()),
            warmup: None,
            spinner_rotation: 0.0,
        };

        let warmup = Task::perform(
            gallery::initialize(cache, gallery, config.gallery.visible_prefix()),
            |warmup| Message::GalleryWarmed(warmup.summary()),
        );

        let open = match open_index {
            Some(index) => {
                let effects = app.lightbox.navigate_to(index);
                update::run_effects(&app.cache, effects)
            }
            None => Task::none(),
        };

        (app, Task::batch([warmup, open]))
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.lightbox.session() {
            Some(session) => format!("{} - {app_name}", session.source().file_name()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.lightbox.is_loading()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            cache: &self.cache,
            lightbox: &mut self.lightbox,
            warmup: &mut self.warmup,
            spinner_rotation: &mut self.spinner_rotation,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: self.lightbox.gallery(),
            cache: &self.cache,
            warmup: self.warmup,
            document: self.lightbox.document(),
            spinner_rotation: self.spinner_rotation,
        })
    }
}
