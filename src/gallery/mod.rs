// SPDX-License-Identifier: MPL-2.0
//! The gallery list and its construction.
//!
//! A [`GalleryList`] is the ordered, fixed sequence of sources the lightbox
//! navigates over. It is built once at startup, either from the configured
//! source list or from a directory scan, and shared read-only afterwards.

pub mod scanner;
pub mod warmup;

pub use warmup::{initialize, Warmup, WarmupSummary};

use crate::config::GalleryConfig;
use crate::media::SourceId;
use std::sync::Arc;

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Ordered, immutable list of gallery sources.
///
/// Cloning shares the underlying storage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryList {
    items: Arc<[SourceId]>,
}

impl GalleryList {
    #[must_use]
    pub fn new(items: Vec<SourceId>) -> Self {
        Self {
            items: Arc::from(items),
        }
    }

    /// Builds the list from the `[gallery]` settings section.
    ///
    /// Each configured source is joined under `asset_prefix` when one is set.
    #[must_use]
    pub fn from_config(config: &GalleryConfig) -> Self {
        let prefix = config
            .asset_prefix
            .as_deref()
            .map(|p| p.trim_end_matches('/'))
            .filter(|p| !p.is_empty());
        let items = config
            .sources
            .iter()
            .map(|source| match prefix {
                Some(prefix) => SourceId::new(format!("{prefix}/{}", source.trim_start_matches('/'))),
                None => SourceId::new(source),
            })
            .collect();
        Self::new(items)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SourceId> {
        self.items.get(index)
    }

    /// Position of the first occurrence of `source`.
    #[must_use]
    pub fn position(&self, source: &SourceId) -> Option<usize> {
        self.items.iter().position(|s| s == source)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceId> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[SourceId] {
        &self.items
    }

    /// Splits into the first `count` items and the rest.
    #[must_use]
    pub fn split_prefix(&self, count: usize) -> (&[SourceId], &[SourceId]) {
        self.items.split_at(count.min(self.items.len()))
    }

    /// Index one step away from `index`, wrapping at both ends.
    ///
    /// Returns `None` for an empty list.
    #[must_use]
    pub fn step(&self, index: usize, direction: Direction) -> Option<usize> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        let index = index % len;
        Some(match direction {
            Direction::Next => (index + 1) % len,
            Direction::Previous => (index + len - 1) % len,
        })
    }
}

impl FromIterator<SourceId> for GalleryList {
    fn from_iter<T: IntoIterator<Item = SourceId>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(names: &[&str]) -> GalleryList {
        names.iter().map(|n| SourceId::from(*n)).collect()
    }

    #[test]
    fn step_wraps_forward_at_the_end() {
        let gallery = list(&["a.jpg", "b.jpg", "c.jpg"]);
        assert_eq!(gallery.step(0, Direction::Next), Some(1));
        assert_eq!(gallery.step(2, Direction::Next), Some(0));
    }

    #[test]
    fn step_wraps_backward_at_the_start() {
        let gallery = list(&["a.jpg", "b.jpg", "c.jpg"]);
        assert_eq!(gallery.step(0, Direction::Previous), Some(2));
        assert_eq!(gallery.step(1, Direction::Previous), Some(0));
    }

    #[test]
    fn step_on_single_item_stays_put() {
        let gallery = list(&["only.png"]);
        assert_eq!(gallery.step(0, Direction::Next), Some(0));
        assert_eq!(gallery.step(0, Direction::Previous), Some(0));
    }

    #[test]
    fn step_on_empty_list_is_none() {
        assert_eq!(GalleryList::default().step(0, Direction::Next), None);
    }

    #[test]
    fn position_finds_sources() {
        let gallery = list(&["a.jpg", "b.jpg"]);
        assert_eq!(gallery.position(&SourceId::from("b.jpg")), Some(1));
        assert_eq!(gallery.position(&SourceId::from("z.jpg")), None);
    }

    #[test]
    fn split_prefix_clamps_to_length() {
        let gallery = list(&["a.jpg", "b.jpg", "c.jpg"]);
        let (head, tail) = gallery.split_prefix(2);
        assert_eq!(head.len(), 2);
        assert_eq!(tail, &[SourceId::from("c.jpg")]);

        let (head, tail) = gallery.split_prefix(10);
        assert_eq!(head.len(), 3);
        assert!(tail.is_empty());
    }

    #[test]
    fn from_config_applies_asset_prefix() {
        let config = GalleryConfig {
            asset_prefix: Some("assets/projects/".into()),
            sources: vec!["01.jpg".into(), "/02.webm".into()],
            visible_prefix: None,
        };
        let gallery = GalleryList::from_config(&config);
        assert_eq!(gallery.get(0).unwrap().as_str(), "assets/projects/01.jpg");
        assert_eq!(gallery.get(1).unwrap().as_str(), "assets/projects/02.webm");
    }

    #[test]
    fn from_config_without_prefix_keeps_sources() {
        let config = GalleryConfig {
            asset_prefix: None,
            sources: vec!["x/01.jpg".into()],
            visible_prefix: None,
        };
        assert_eq!(
            GalleryList::from_config(&config).get(0).unwrap().as_str(),
            "x/01.jpg"
        );
    }
}
