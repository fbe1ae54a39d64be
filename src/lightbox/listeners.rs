// SPDX-License-Identifier: MPL-2.0
//! Document-level key listener registry.
//!
//! Overlays never add or remove listeners by hand. [`KeyListeners::attach`]
//! hands back a [`ListenerGuard`] and the registration lives exactly as long
//! as the guard, so an overlay that is dropped cannot leave a listener behind.

use super::{LightboxKey, OverlayId};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// What a listener reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerRole {
    /// Escape closes the overlay.
    Dismiss,
    /// Left/Right arrows move to the neighbouring item.
    Navigate,
}

impl ListenerRole {
    #[must_use]
    pub fn accepts(self, key: LightboxKey) -> bool {
        match self {
            ListenerRole::Dismiss => key == LightboxKey::Escape,
            ListenerRole::Navigate => {
                matches!(key, LightboxKey::ArrowLeft | LightboxKey::ArrowRight)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Registration {
    id: u64,
    owner: OverlayId,
    role: ListenerRole,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Registration>,
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared table of active key listeners.
#[derive(Debug, Clone, Default)]
pub struct KeyListeners {
    registry: Arc<Mutex<Registry>>,
}

impl KeyListeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for `owner`. It stays registered until the guard drops.
    #[must_use = "dropping the guard detaches the listener immediately"]
    pub fn attach(&self, owner: OverlayId, role: ListenerRole) -> ListenerGuard {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push(Registration { id, owner, role });
        ListenerGuard {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Listeners that react to `key`, in registration order.
    #[must_use]
    pub fn dispatch(&self, key: LightboxKey) -> Vec<(OverlayId, ListenerRole)> {
        lock(&self.registry)
            .entries
            .iter()
            .filter(|entry| entry.role.accepts(key))
            .map(|entry| (entry.owner, entry.role))
            .collect()
    }

    /// Roles currently registered for `owner`.
    #[must_use]
    pub fn registered_for(&self, owner: OverlayId) -> Vec<ListenerRole> {
        lock(&self.registry)
            .entries
            .iter()
            .filter(|entry| entry.owner == owner)
            .map(|entry| entry.role)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.registry).entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keeps one listener registered. Dropping it detaches the listener.
#[derive(Debug)]
pub struct ListenerGuard {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).entries.retain(|entry| entry.id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_keeps_listener_registered_until_dropped() {
        let listeners = KeyListeners::new();
        let guard = listeners.attach(OverlayId(1), ListenerRole::Dismiss);
        assert_eq!(listeners.len(), 1);

        drop(guard);
        assert!(listeners.is_empty());
    }

    #[test]
    fn dispatch_matches_roles_to_keys() {
        let listeners = KeyListeners::new();
        let _dismiss = listeners.attach(OverlayId(1), ListenerRole::Dismiss);
        let _navigate = listeners.attach(OverlayId(1), ListenerRole::Navigate);

        assert_eq!(
            listeners.dispatch(LightboxKey::Escape),
            vec![(OverlayId(1), ListenerRole::Dismiss)]
        );
        assert_eq!(
            listeners.dispatch(LightboxKey::ArrowRight),
            vec![(OverlayId(1), ListenerRole::Navigate)]
        );
    }

    #[test]
    fn dropping_one_guard_leaves_others_in_place() {
        let listeners = KeyListeners::new();
        let first = listeners.attach(OverlayId(1), ListenerRole::Dismiss);
        let _second = listeners.attach(OverlayId(2), ListenerRole::Dismiss);

        drop(first);
        assert!(listeners.registered_for(OverlayId(1)).is_empty());
        assert_eq!(listeners.registered_for(OverlayId(2)), vec![ListenerRole::Dismiss]);
    }

    #[test]
    fn guard_outliving_the_registry_is_harmless() {
        let listeners = KeyListeners::new();
        let guard = listeners.attach(OverlayId(1), ListenerRole::Navigate);
        drop(listeners);
        drop(guard);
    }
}
