// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::LoadError;
use crate::gallery::WarmupSummary;
use crate::lightbox::{LightboxKey, OverlayId, Timer};
use crate::media::{MediaHandle, SourceId};
use crate::ui::{gallery, overlay};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Overlay(overlay::Message),
    /// The visible prefix of the gallery has settled.
    GalleryWarmed(WarmupSummary),
    /// Content requested for an overlay resolved.
    ContentLoaded {
        overlay: OverlayId,
        result: Result<MediaHandle, LoadError>,
    },
    /// A fire-and-forget neighbour preload settled.
    Prefetched {
        source: SourceId,
        result: Result<(), LoadError>,
    },
    TimerFired(Timer),
    /// A lightbox key reached the window without being captured by a widget.
    KeyPressed(LightboxKey),
    /// Periodic tick for the loading spinner.
    SpinnerTick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Directory to scan for the gallery instead of the configured sources.
    pub directory: Option<PathBuf>,
    /// Gallery index to open in the lightbox once the app is up.
    pub open_index: Option<usize>,
}
