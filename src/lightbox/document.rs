// SPDX-License-Identifier: MPL-2.0
//! The surface overlays are attached to.
//!
//! [`Document`] holds the overlay nodes currently shown on top of the gallery
//! and the key listener table. The view renders its nodes; the keyboard
//! subscription dispatches through its listeners.

use super::listeners::KeyListeners;
use super::OverlayId;
use crate::media::{MediaHandle, MediaKind, SourceId};

/// Visual lifecycle phase of an overlay node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Spinner shown while the content loads.
    Loading,
    /// Content shown.
    Active,
    /// Dismissed, waiting out the exit transition before removal.
    Closing,
    /// Load failed; message shown until it expires.
    Error,
}

/// What the overlay currently displays.
#[derive(Debug, Clone)]
pub enum Content {
    Spinner,
    Media(MediaHandle),
    Message(String),
}

/// One overlay node: a full-window backdrop around a single media item.
#[derive(Debug, Clone)]
pub struct OverlayNode {
    pub id: OverlayId,
    pub source: SourceId,
    pub kind: MediaKind,
    pub phase: Phase,
    pub content: Content,
}

impl OverlayNode {
    /// A node in the loading phase with a spinner placeholder.
    #[must_use]
    pub fn loading(id: OverlayId, source: SourceId) -> Self {
        let kind = source.kind();
        Self {
            id,
            source,
            kind,
            phase: Phase::Loading,
            content: Content::Spinner,
        }
    }
}

#[derive(Debug, Default)]
pub struct Document {
    nodes: Vec<OverlayNode>,
    listeners: KeyListeners,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, node: OverlayNode) {
        self.nodes.push(node);
    }

    /// Removes the node with `id`. Removing an absent node is a no-op.
    pub fn remove(&mut self, id: OverlayId) -> Option<OverlayNode> {
        let index = self.nodes.iter().position(|node| node.id == id)?;
        Some(self.nodes.remove(index))
    }

    #[must_use]
    pub fn node(&self, id: OverlayId) -> Option<&OverlayNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn node_mut(&mut self, id: OverlayId) -> Option<&mut OverlayNode> {
        self.nodes.iter_mut().find(|node| node.id == id)
    }

    #[must_use]
    pub fn nodes(&self) -> &[OverlayNode] {
        &self.nodes
    }

    #[must_use]
    pub fn overlay_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn listeners(&self) -> &KeyListeners {
        &self.listeners
    }
}
