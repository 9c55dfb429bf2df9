//! # Overlay Controller
//!
//! Owns the lifecycle of the single active overlay: presenting it, listening for the three
//! dismissal gestures, and handing control back to the screen underneath.
//!
//! ## Listener lifetime
//!
//! Each dismissal listener is a [`ListenerGuard`] issued by a shared [`ListenerRegistry`].
//! Dropping the guard deregisters the listener, and the guards live inside the active overlay,
//! so every way an overlay can end releases them:
//!
//! - explicit close ([`OverlayController::close`]),
//! - navigating away or traversing history ([`OverlayController::unmount`]),
//! - opening a different record ([`OverlayController::open`] replaces the old instance),
//! - teardown (the controller itself is dropped).
//!
//! Listeners are tagged with the overlay instance that registered them, so a listener can
//! never fire for an overlay other than its own.
//!
//! ```rust
//! use intercept_router::navigation::{
//!     DismissGesture, GestureOutcome, ListenerRegistry, OverlayController, PointerTarget,
//! };
//! use record_store::ResourceId;
//!
//! let registry = ListenerRegistry::new();
//! let mut overlay = OverlayController::new(registry.clone(), "Escape");
//!
//! overlay.open(ResourceId::new("2"));
//! assert_eq!(registry.active_count(), 3);
//! assert_eq!(
//!     overlay.dispatch(&DismissGesture::Pointer(PointerTarget::Content)),
//!     GestureOutcome::Ignored
//! );
//! assert_eq!(
//!     overlay.dispatch(&DismissGesture::Key("Escape".into())),
//!     GestureOutcome::Dismiss
//! );
//!
//! overlay.unmount();
//! assert_eq!(registry.active_count(), 0);
//! ```

use crate::navigation::error::NavigationError;
use crate::navigation::history::{HistoryEntry, HistorySynchronizer};
use record_store::ResourceId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    CloseControl,
    Key,
    Backdrop,
}

/// Where a pointer press landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The dimmed area around the overlay.
    Backdrop,
    /// Anywhere inside the overlay's content box.
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DismissGesture {
    CloseControl,
    Key(String),
    Pointer(PointerTarget),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    Dismiss,
    Ignored,
}

#[derive(Debug, Default)]
struct Registrations {
    by_id: HashMap<u64, (ListenerKind, u64)>,
}

/// Shared table of live dismissal listeners.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<Mutex<Registrations>>,
    next_id: Arc<AtomicU64>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Registrations> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a listener for `instance`. It stays registered until the guard is dropped.
    pub fn register(&self, kind: ListenerKind, instance: u64) -> ListenerGuard {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock().by_id.insert(id, (kind, instance));
        ListenerGuard {
            id,
            registry: self.clone(),
        }
    }

    pub fn active_count(&self) -> usize {
        self.lock().by_id.len()
    }

    pub fn is_registered(&self, kind: ListenerKind, instance: u64) -> bool {
        self.lock()
            .by_id
            .values()
            .any(|&(k, i)| k == kind && i == instance)
    }
}

/// A registered listener. Deregisters on drop.
#[derive(Debug)]
pub struct ListenerGuard {
    id: u64,
    registry: ListenerRegistry,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.registry.lock().by_id.remove(&self.id);
    }
}

#[derive(Debug)]
struct ActiveOverlay {
    id: ResourceId,
    instance: u64,
    _listeners: Vec<ListenerGuard>,
}

#[derive(Debug)]
pub struct OverlayController {
    registry: ListenerRegistry,
    dismiss_key: String,
    active: Option<ActiveOverlay>,
    next_instance: u64,
}

impl OverlayController {
    pub fn new(registry: ListenerRegistry, dismiss_key: impl Into<String>) -> Self {
        Self {
            registry,
            dismiss_key: dismiss_key.into(),
            active: None,
            next_instance: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_id(&self) -> Option<&ResourceId> {
        self.active.as_ref().map(|overlay| &overlay.id)
    }

    /// Presents `id` and registers its dismissal listeners.
    ///
    /// Any overlay already open is replaced, and its listeners released, before the new
    /// instance registers its own.
    pub fn open(&mut self, id: ResourceId) -> u64 {
        self.unmount();
        self.next_instance += 1;
        let instance = self.next_instance;
        let listeners = [
            ListenerKind::CloseControl,
            ListenerKind::Key,
            ListenerKind::Backdrop,
        ]
        .into_iter()
        .map(|kind| self.registry.register(kind, instance))
        .collect();
        debug!(%id, instance, "Overlay open");
        self.active = Some(ActiveOverlay {
            id,
            instance,
            _listeners: listeners,
        });
        instance
    }

    /// Decide whether a gesture dismisses the active overlay.
    ///
    /// Only presses on the backdrop itself count; a press inside the content never dismisses.
    pub fn dispatch(&self, gesture: &DismissGesture) -> GestureOutcome {
        let Some(active) = &self.active else {
            return GestureOutcome::Ignored;
        };
        let kind = match gesture {
            DismissGesture::CloseControl => ListenerKind::CloseControl,
            DismissGesture::Key(key) if *key == self.dismiss_key => ListenerKind::Key,
            DismissGesture::Pointer(PointerTarget::Backdrop) => ListenerKind::Backdrop,
            DismissGesture::Key(_) | DismissGesture::Pointer(PointerTarget::Content) => {
                return GestureOutcome::Ignored
            }
        };
        if self.registry.is_registered(kind, active.instance) {
            GestureOutcome::Dismiss
        } else {
            GestureOutcome::Ignored
        }
    }

    /// Release listeners and step history back over the intercepted entry.
    ///
    /// With no overlay open there is nothing to step back over, even if the current entry is
    /// intercepted (it may be showing as a full page), so the close is a desync.
    pub fn close(
        &mut self,
        history: &mut HistorySynchronizer,
    ) -> Result<Option<HistoryEntry>, NavigationError> {
        if self.active.is_none() {
            return history.desync();
        }
        self.unmount();
        history.close()
    }

    /// Drop the active overlay without touching history.
    pub fn unmount(&mut self) {
        if let Some(overlay) = self.active.take() {
            debug!(id = %overlay.id, instance = overlay.instance, "Overlay unmount");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DesyncPolicy;
    use crate::navigation::address::AddressSpace;
    use crate::navigation::history::MemoryHistory;
    use crate::navigation::presentation::ListingState;

    fn controller() -> (OverlayController, ListenerRegistry) {
        let registry = ListenerRegistry::new();
        (OverlayController::new(registry.clone(), "Escape"), registry)
    }

    #[test]
    fn all_three_gestures_dismiss() {
        let (mut overlay, _registry) = controller();
        overlay.open(ResourceId::new("1"));

        for gesture in [
            DismissGesture::CloseControl,
            DismissGesture::Key("Escape".into()),
            DismissGesture::Pointer(PointerTarget::Backdrop),
        ] {
            assert_eq!(overlay.dispatch(&gesture), GestureOutcome::Dismiss);
        }
    }

    #[test]
    fn content_presses_and_other_keys_never_dismiss() {
        let (mut overlay, _registry) = controller();
        overlay.open(ResourceId::new("1"));

        assert_eq!(
            overlay.dispatch(&DismissGesture::Pointer(PointerTarget::Content)),
            GestureOutcome::Ignored
        );
        assert_eq!(
            overlay.dispatch(&DismissGesture::Key("Enter".into())),
            GestureOutcome::Ignored
        );
    }

    #[test]
    fn gestures_without_overlay_are_ignored() {
        let (overlay, _registry) = controller();
        assert_eq!(
            overlay.dispatch(&DismissGesture::CloseControl),
            GestureOutcome::Ignored
        );
    }

    #[test]
    fn reopening_replaces_listeners() {
        let (mut overlay, registry) = controller();
        let first = overlay.open(ResourceId::new("1"));
        let second = overlay.open(ResourceId::new("2"));

        assert_eq!(registry.active_count(), 3);
        assert!(!registry.is_registered(ListenerKind::Key, first));
        assert!(registry.is_registered(ListenerKind::Key, second));
        assert_eq!(overlay.active_id(), Some(&ResourceId::new("2")));
    }

    #[test]
    fn close_releases_listeners_and_steps_back() {
        let (mut overlay, registry) = controller();
        let mut history = HistorySynchronizer::new(
            Box::new(MemoryHistory::new()),
            AddressSpace::new("listing"),
            DesyncPolicy::Fail,
        );
        history.load("/listing", None);
        history.push_intercepted(&ResourceId::new("1"), ListingState::default());
        overlay.open(ResourceId::new("1"));

        let restored = overlay.close(&mut history).unwrap().unwrap();
        assert_eq!(restored.address, "/listing");
        assert_eq!(registry.active_count(), 0);
        assert!(!overlay.is_open());

        // A second close finds nothing to close.
        assert_eq!(
            overlay.dispatch(&DismissGesture::CloseControl),
            GestureOutcome::Ignored
        );
    }

    #[test]
    fn close_without_open_overlay_is_a_desync() {
        let (mut overlay, _registry) = controller();
        let mut history = HistorySynchronizer::new(
            Box::new(MemoryHistory::new()),
            AddressSpace::new("listing"),
            DesyncPolicy::Fail,
        );
        history.load("/listing", None);
        history.push_intercepted(&ResourceId::new("1"), ListingState::default());

        // The entry is intercepted, but nothing is presented as an overlay.
        let err = overlay.close(&mut history).unwrap_err();
        assert_eq!(
            err,
            NavigationError::HistoryDesync {
                address: "/listing/1".into()
            }
        );
        assert_eq!(history.current_address(), Some("/listing/1"));
    }

    #[test]
    fn dropping_the_controller_releases_listeners() {
        let (mut overlay, registry) = controller();
        overlay.open(ResourceId::new("1"));
        drop(overlay);
        assert_eq!(registry.active_count(), 0);
    }

    #[test]
    fn repeated_cycles_do_not_leak() {
        let (mut overlay, registry) = controller();
        for i in 0..50 {
            overlay.open(ResourceId::new(i.to_string()));
            overlay.unmount();
        }
        assert_eq!(registry.active_count(), 0);
    }
}
