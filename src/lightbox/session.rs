// SPDX-License-Identifier: MPL-2.0
//! One open overlay and the key listeners it owns.

use super::listeners::{KeyListeners, ListenerGuard, ListenerRole};
use super::OverlayId;
use crate::media::SourceId;

/// An overlay's ownership of its two document-level key listeners.
///
/// Opening the session attaches the Escape and arrow listeners; dropping it
/// (directly or through [`OverlaySession::dispose`]) detaches both.
#[derive(Debug)]
pub struct OverlaySession {
    id: OverlayId,
    source: SourceId,
    _dismiss: ListenerGuard,
    _navigate: ListenerGuard,
}

impl OverlaySession {
    #[must_use]
    pub fn open(id: OverlayId, source: SourceId, listeners: &KeyListeners) -> Self {
        Self {
            id,
            source,
            _dismiss: listeners.attach(id, ListenerRole::Dismiss),
            _navigate: listeners.attach(id, ListenerRole::Navigate),
        }
    }

    #[must_use]
    pub fn id(&self) -> OverlayId {
        self.id
    }

    #[must_use]
    pub fn source(&self) -> &SourceId {
        &self.source
    }

    /// Ends the session, detaching its listeners.
    pub fn dispose(self) {
        tracing::debug!(overlay = self.id.0, source = %self.source, "overlay session disposed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_attaches_both_listeners() {
        let listeners = KeyListeners::new();
        let session = OverlaySession::open(OverlayId(7), SourceId::from("a.mp4"), &listeners);

        assert_eq!(
            listeners.registered_for(OverlayId(7)),
            vec![ListenerRole::Dismiss, ListenerRole::Navigate]
        );
    }

    #[test]
    fn dispose_detaches_both_listeners() {
        let listeners = KeyListeners::new();
        let session = OverlaySession::open(OverlayId(7), SourceId::from("a.jpg"), &listeners);

        session.dispose();
        assert!(listeners.is_empty());
    }
}
