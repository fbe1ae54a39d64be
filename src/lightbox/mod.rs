// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay: a single full-window preview of one gallery item.
//!
//! The controller is a plain state machine. It never sleeps or loads anything
//! itself; instead every operation returns [`Effect`]s that the application
//! turns into asynchronous tasks, and the results come back as calls to
//! [`Lightbox::content_loaded`], [`Lightbox::content_failed`] and
//! [`Lightbox::timer_fired`].
//!
//! Per overlay: `Loading -> Active -> Closing -> removed`, or
//! `Loading -> Error -> removed`.

mod controller;
pub mod document;
pub mod listeners;
pub mod session;

pub use controller::Lightbox;
pub use document::{Content, Document, OverlayNode, Phase};
pub use listeners::{KeyListeners, ListenerGuard, ListenerRole};
pub use session::OverlaySession;

use crate::config::{DEFAULT_CLOSE_DELAY_MS, DEFAULT_ERROR_DISPLAY_MS};
use crate::gallery::Direction;
use crate::media::SourceId;
use std::time::Duration;

/// Identifies one overlay instance. Never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(pub u64);

/// Keys the overlay listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl LightboxKey {
    /// Navigation direction for arrow keys.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            LightboxKey::ArrowLeft => Some(Direction::Previous),
            LightboxKey::ArrowRight => Some(Direction::Next),
            LightboxKey::Escape => None,
        }
    }
}

/// Where a pointer press landed on an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the content.
    Backdrop,
    /// The media or message itself.
    Content,
}

/// Deferred work scheduled by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Exit transition over: drop the node.
    RemoveNode(OverlayId),
    /// Error message shown long enough: dispose the overlay.
    ErrorExpired(OverlayId),
    /// Previous overlay has closed: open the item at this gallery index.
    Open(usize),
}

/// Side effects requested by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Load the content for an overlay; report back with
    /// [`Lightbox::content_loaded`] or [`Lightbox::content_failed`].
    LoadContent { overlay: OverlayId, source: SourceId },
    /// Call [`Lightbox::timer_fired`] with `timer` after `delay`.
    Schedule { delay: Duration, timer: Timer },
    /// Warm the cache for a source; failures are only logged.
    Preload { source: SourceId },
}

/// Result of offering a key press to the lightbox.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    /// No overlay listens for this key; let it through.
    Ignored,
    /// An overlay handled the key; it must not reach the gallery.
    Consumed(Vec<Effect>),
}

/// Fixed delays of the overlay lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxTimings {
    /// Time between dismissal and node removal.
    pub close_delay: Duration,
    /// How long a load error stays on screen.
    pub error_display: Duration,
}

impl Default for LightboxTimings {
    fn default() -> Self {
        Self {
            close_delay: Duration::from_millis(DEFAULT_CLOSE_DELAY_MS),
            error_display: Duration::from_millis(DEFAULT_ERROR_DISPLAY_MS),
        }
    }
}
