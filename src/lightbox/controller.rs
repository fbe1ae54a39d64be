// SPDX-License-Identifier: MPL-2.0
//! Overlay lifecycle controller.

use super::document::{Content, Document, OverlayNode, Phase};
use super::listeners::ListenerRole;
use super::session::OverlaySession;
use super::{ClickTarget, Effect, KeyOutcome, LightboxKey, LightboxTimings, OverlayId, Timer};
use crate::error::LoadError;
use crate::gallery::{Direction, GalleryList};
use crate::i18n::fluent::I18n;
use crate::media::{MediaHandle, SourceId};

/// Fluent key of the bilingual load-failure message.
pub const LOAD_ERROR_KEY: &str = "lightbox-load-error";

/// Owns the document overlay and the session of the overlay currently open.
///
/// At most one overlay node exists at any time: opening a new overlay first
/// tears down whatever is shown, including a node still in its exit transition.
#[derive(Debug)]
pub struct Lightbox {
    gallery: GalleryList,
    document: Document,
    session: Option<OverlaySession>,
    next_id: u64,
    timings: LightboxTimings,
}

impl Lightbox {
    #[must_use]
    pub fn new(gallery: GalleryList, timings: LightboxTimings) -> Self {
        Self {
            gallery,
            document: Document::new(),
            session: None,
            next_id: 1,
            timings,
        }
    }

    #[must_use]
    pub fn gallery(&self) -> &GalleryList {
        &self.gallery
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn timings(&self) -> LightboxTimings {
        self.timings
    }

    /// The overlay that currently owns the key listeners, if any.
    #[must_use]
    pub fn session(&self) -> Option<&OverlaySession> {
        self.session.as_ref()
    }

    /// Whether an overlay is waiting for its content.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.document
            .nodes()
            .iter()
            .any(|node| node.phase == Phase::Loading)
    }

    /// Opens the overlay for the gallery item at `index` and warms the cache
    /// for the item after it.
    ///
    /// Out-of-range indices are ignored.
    pub fn navigate_to(&mut self, index: usize) -> Vec<Effect> {
        let Some(source) = self.gallery.get(index).cloned() else {
            tracing::warn!(index, len = self.gallery.len(), "gallery index out of range");
            return Vec::new();
        };

        let mut effects = self.show(source);
        if let Some(next) = self
            .gallery
            .step(index, Direction::Next)
            .and_then(|next| self.gallery.get(next))
        {
            effects.push(Effect::Preload {
                source: next.clone(),
            });
        }
        effects
    }

    /// Replaces whatever is shown with a new overlay for `source`.
    pub fn show(&mut self, source: SourceId) -> Vec<Effect> {
        self.teardown();

        let id = OverlayId(self.next_id);
        self.next_id += 1;

        let session = OverlaySession::open(id, source.clone(), self.document.listeners());
        let node = OverlayNode::loading(id, source.clone());
        tracing::debug!(overlay = id.0, source = %source, kind = ?node.kind, "overlay opened");
        self.session = Some(session);

        // Listeners are wired before the source is assigned.
        let effects = vec![Effect::LoadContent {
            overlay: id,
            source,
        }];
        self.document.attach(node);
        effects
    }

    /// The content of overlay `id` finished loading.
    ///
    /// Ignored unless that overlay is still loading.
    pub fn content_loaded(&mut self, id: OverlayId, handle: MediaHandle) {
        match self.document.node_mut(id) {
            Some(node) if node.phase == Phase::Loading => {
                node.phase = Phase::Active;
                node.content = Content::Media(handle);
            }
            _ => tracing::debug!(overlay = id.0, "ignoring load result for stale overlay"),
        }
    }

    /// The content of overlay `id` failed to load: show the bilingual error
    /// message and schedule the overlay's removal.
    pub fn content_failed(&mut self, id: OverlayId, error: &LoadError, i18n: &I18n) -> Vec<Effect> {
        let Some(node) = self.document.node_mut(id) else {
            tracing::debug!(overlay = id.0, "ignoring load error for stale overlay");
            return Vec::new();
        };
        if node.phase != Phase::Loading {
            return Vec::new();
        }

        tracing::warn!(source = %node.source, reason = %error.reason, "overlay content failed to load");
        node.phase = Phase::Error;
        node.content = Content::Message(
            i18n.bilingual(LOAD_ERROR_KEY, &[("source", node.source.as_str())]),
        );
        vec![Effect::Schedule {
            delay: self.timings.error_display,
            timer: Timer::ErrorExpired(id),
        }]
    }

    /// A pointer press landed on overlay `id`. Only presses on the backdrop
    /// of the open overlay dismiss it.
    pub fn click(&mut self, id: OverlayId, target: ClickTarget) -> Vec<Effect> {
        let is_current = self.session.as_ref().is_some_and(|s| s.id() == id);
        if is_current && target == ClickTarget::Backdrop {
            self.close()
        } else {
            Vec::new()
        }
    }

    /// Offers a key press to the registered overlay listeners.
    pub fn key_pressed(&mut self, key: LightboxKey) -> KeyOutcome {
        let listeners = self.document.listeners().dispatch(key);
        if listeners.is_empty() {
            return KeyOutcome::Ignored;
        }

        let mut effects = Vec::new();
        for (owner, role) in listeners {
            if self.session.as_ref().map(OverlaySession::id) != Some(owner) {
                continue;
            }
            match (role, key.direction()) {
                (ListenerRole::Dismiss, _) => effects.extend(self.close()),
                (ListenerRole::Navigate, Some(direction)) => {
                    effects.extend(self.navigate(direction));
                }
                (ListenerRole::Navigate, None) => {}
            }
        }
        KeyOutcome::Consumed(effects)
    }

    /// Dismisses the open overlay: listeners detach and the node enters its
    /// exit transition, to be removed once the close delay has passed.
    pub fn close(&mut self) -> Vec<Effect> {
        let Some(session) = self.session.take() else {
            return Vec::new();
        };
        let id = session.id();
        session.dispose();

        if let Some(node) = self.document.node_mut(id) {
            node.phase = Phase::Closing;
        }
        vec![Effect::Schedule {
            delay: self.timings.close_delay,
            timer: Timer::RemoveNode(id),
        }]
    }

    /// A timer scheduled through [`Effect::Schedule`] has elapsed.
    pub fn timer_fired(&mut self, timer: Timer) -> Vec<Effect> {
        match timer {
            Timer::RemoveNode(id) => {
                self.document.remove(id);
                Vec::new()
            }
            Timer::ErrorExpired(id) => {
                let showing_error = self
                    .document
                    .node(id)
                    .is_some_and(|node| node.phase == Phase::Error);
                if showing_error {
                    if self.session.as_ref().is_some_and(|s| s.id() == id) {
                        if let Some(session) = self.session.take() {
                            session.dispose();
                        }
                    }
                    self.document.remove(id);
                }
                Vec::new()
            }
            Timer::Open(index) => self.navigate_to(index),
        }
    }

    /// Closes the current overlay and schedules the neighbour to open after
    /// the close delay.
    ///
    /// Ignored when the shown source is not part of the gallery.
    fn navigate(&mut self, direction: Direction) -> Vec<Effect> {
        let Some(session) = self.session.as_ref() else {
            return Vec::new();
        };
        let Some(current) = self.gallery.position(session.source()) else {
            tracing::debug!(source = %session.source(), "shown source is not in the gallery; ignoring navigation");
            return Vec::new();
        };
        let Some(target) = self.gallery.step(current, direction) else {
            return Vec::new();
        };

        let mut effects = self.close();
        effects.push(Effect::Schedule {
            delay: self.timings.close_delay,
            timer: Timer::Open(target),
        });
        effects
    }

    /// Disposes the open session and removes every overlay node.
    fn teardown(&mut self) {
        if let Some(session) = self.session.take() {
            session.dispose();
        }
        let ids: Vec<OverlayId> = self.document.nodes().iter().map(|node| node.id).collect();
        for id in ids {
            self.document.remove(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadFailure;
    use crate::media::ImageData;
    use std::time::Duration;

    fn gallery(names: &[&str]) -> GalleryList {
        names.iter().map(|n| SourceId::from(*n)).collect()
    }

    fn lightbox(names: &[&str]) -> Lightbox {
        Lightbox::new(gallery(names), LightboxTimings::default())
    }

    fn pixel() -> MediaHandle {
        MediaHandle::Image(ImageData::from_rgba(1, 1, vec![0; 4]))
    }

    fn opened_id(effects: &[Effect]) -> OverlayId {
        effects
            .iter()
            .find_map(|e| match e {
                Effect::LoadContent { overlay, .. } => Some(*overlay),
                _ => None,
            })
            .expect("expected a LoadContent effect")
    }

    #[test]
    fn show_builds_a_loading_node_and_requests_content() {
        let mut lb = lightbox(&["a.jpg"]);
        let effects = lb.show(SourceId::from("a.jpg"));
        let id = opened_id(&effects);

        let node = lb.document().node(id).expect("node attached");
        assert_eq!(node.phase, Phase::Loading);
        assert!(matches!(node.content, Content::Spinner));
        assert_eq!(lb.document().listeners().len(), 2);
        assert!(lb.is_loading());
    }

    #[test]
    fn load_completion_activates_the_overlay() {
        let mut lb = lightbox(&["a.jpg"]);
        let id = opened_id(&lb.show(SourceId::from("a.jpg")));

        lb.content_loaded(id, pixel());

        let node = lb.document().node(id).unwrap();
        assert_eq!(node.phase, Phase::Active);
        assert!(matches!(node.content, Content::Media(_)));
    }

    #[test]
    fn navigate_to_preloads_the_next_item_with_wrap() {
        let mut lb = lightbox(&["a.jpg", "b.jpg", "c.jpg"]);
        let effects = lb.navigate_to(2);

        assert!(effects.contains(&Effect::Preload {
            source: SourceId::from("a.jpg")
        }));
        assert_eq!(lb.session().unwrap().source().as_str(), "c.jpg");
    }

    #[test]
    fn navigate_to_out_of_range_does_nothing() {
        let mut lb = lightbox(&["a.jpg"]);
        assert!(lb.navigate_to(5).is_empty());
        assert_eq!(lb.document().overlay_count(), 0);
    }

    #[test]
    fn showing_a_second_overlay_replaces_the_first() {
        let mut lb = lightbox(&["a.jpg", "b.jpg"]);
        let first = opened_id(&lb.show(SourceId::from("a.jpg")));
        let second = opened_id(&lb.show(SourceId::from("b.jpg")));

        assert_eq!(lb.document().overlay_count(), 1);
        assert!(lb.document().node(second).is_some());
        assert!(lb.document().listeners().registered_for(first).is_empty());
        assert_eq!(lb.document().listeners().len(), 2);
    }

    #[test]
    fn stale_load_result_is_ignored() {
        let mut lb = lightbox(&["a.jpg", "b.jpg"]);
        let first = opened_id(&lb.show(SourceId::from("a.jpg")));
        let second = opened_id(&lb.show(SourceId::from("b.jpg")));

        lb.content_loaded(first, pixel());

        assert_eq!(lb.document().node(second).unwrap().phase, Phase::Loading);
    }

    #[test]
    fn escape_closes_then_removes_after_delay() {
        let mut lb = lightbox(&["a.jpg"]);
        let id = opened_id(&lb.show(SourceId::from("a.jpg")));
        lb.content_loaded(id, pixel());

        let KeyOutcome::Consumed(effects) = lb.key_pressed(LightboxKey::Escape) else {
            panic!("escape should be consumed");
        };
        assert_eq!(
            effects,
            vec![Effect::Schedule {
                delay: Duration::from_millis(300),
                timer: Timer::RemoveNode(id),
            }]
        );
        assert_eq!(lb.document().node(id).unwrap().phase, Phase::Closing);
        assert!(lb.document().listeners().is_empty());

        lb.timer_fired(Timer::RemoveNode(id));
        assert_eq!(lb.document().overlay_count(), 0);
    }

    #[test]
    fn keys_without_overlay_are_ignored() {
        let mut lb = lightbox(&["a.jpg"]);
        assert_eq!(lb.key_pressed(LightboxKey::ArrowRight), KeyOutcome::Ignored);
    }

    #[test]
    fn only_backdrop_clicks_dismiss() {
        let mut lb = lightbox(&["a.jpg"]);
        let id = opened_id(&lb.show(SourceId::from("a.jpg")));

        assert!(lb.click(id, ClickTarget::Content).is_empty());
        assert!(lb.session().is_some());

        assert_eq!(lb.click(id, ClickTarget::Backdrop).len(), 1);
        assert!(lb.session().is_none());
    }

    #[test]
    fn arrow_right_on_last_item_schedules_first() {
        let mut lb = lightbox(&["a.jpg", "b.jpg", "c.jpg"]);
        lb.navigate_to(2);

        let KeyOutcome::Consumed(effects) = lb.key_pressed(LightboxKey::ArrowRight) else {
            panic!("arrow should be consumed");
        };
        assert!(effects.contains(&Effect::Schedule {
            delay: Duration::from_millis(300),
            timer: Timer::Open(0),
        }));
    }

    #[test]
    fn arrow_left_on_first_item_schedules_last() {
        let mut lb = lightbox(&["a.jpg", "b.jpg", "c.jpg"]);
        lb.navigate_to(0);

        let KeyOutcome::Consumed(effects) = lb.key_pressed(LightboxKey::ArrowLeft) else {
            panic!("arrow should be consumed");
        };
        assert!(effects.contains(&Effect::Schedule {
            delay: Duration::from_millis(300),
            timer: Timer::Open(2),
        }));
    }

    #[test]
    fn arrow_on_source_outside_gallery_is_consumed_but_does_nothing() {
        let mut lb = lightbox(&["a.jpg"]);
        lb.show(SourceId::from("elsewhere.jpg"));

        assert_eq!(
            lb.key_pressed(LightboxKey::ArrowRight),
            KeyOutcome::Consumed(Vec::new())
        );
        assert!(lb.session().is_some());
    }

    #[test]
    fn load_error_shows_message_then_expires() {
        let i18n = I18n::default();
        let mut lb = lightbox(&["broken.png"]);
        let id = opened_id(&lb.show(SourceId::from("broken.png")));
        let error = LoadError::new(SourceId::from("broken.png"), LoadFailure::Io("404".into()));

        let effects = lb.content_failed(id, &error, &i18n);
        assert_eq!(
            effects,
            vec![Effect::Schedule {
                delay: Duration::from_millis(2000),
                timer: Timer::ErrorExpired(id),
            }]
        );
        let node = lb.document().node(id).unwrap();
        assert_eq!(node.phase, Phase::Error);
        match &node.content {
            Content::Message(text) => assert!(text.contains("broken.png")),
            other => panic!("expected a message, got {other:?}"),
        }

        lb.timer_fired(Timer::ErrorExpired(id));
        assert_eq!(lb.document().overlay_count(), 0);
        assert!(lb.document().listeners().is_empty());
    }

    #[test]
    fn error_expiry_after_escape_leaves_the_closing_node_to_its_own_timer() {
        let i18n = I18n::default();
        let mut lb = lightbox(&["broken.png"]);
        let id = opened_id(&lb.show(SourceId::from("broken.png")));
        let error = LoadError::new(SourceId::from("broken.png"), LoadFailure::Io("404".into()));
        lb.content_failed(id, &error, &i18n);

        lb.key_pressed(LightboxKey::Escape);
        lb.timer_fired(Timer::ErrorExpired(id));
        assert_eq!(lb.document().node(id).unwrap().phase, Phase::Closing);

        lb.timer_fired(Timer::RemoveNode(id));
        assert_eq!(lb.document().overlay_count(), 0);
    }
}
