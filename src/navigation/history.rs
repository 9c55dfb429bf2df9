//! # History Synchronization
//!
//! The address bar and the back/forward stack belong to the host. This module models the host
//! stack as a trait ([`HistoryBackend`]) and layers the navigation rules on top of it
//! ([`HistorySynchronizer`]).
//!
//! ## Entry kinds
//!
//! Every entry records its address **and** how it was presented:
//!
//! - [`EntryKind::Page`] - a screen in its own right (home, listing, full detail page).
//! - [`EntryKind::Intercepted`] - a record address shown as an overlay over the previous
//!   entry's listing.
//!
//! The kind is what lets a close step back exactly one entry: closing is only legal while the
//! current entry is intercepted, and stepping back from it always lands on the screen the
//! overlay was opened from. No separate counter is kept.
//!
//! ## Rules
//!
//! | Operation | Effect on the stack |
//! |-----------|---------------------|
//! | `load` | push a `Page`, drop forward entries |
//! | `push_page` | push a `Page`, drop forward entries |
//! | `push_intercepted` | push an `Intercepted` entry under the canonical record address |
//! | `replace_intercepted` | overlay-to-overlay hop: swap the current intercepted entry |
//! | `replace_current` | reload: the current entry becomes a `Page` |
//! | `close` | step back one entry, only from an `Intercepted` entry |
//! | `back` / `forward` | traverse; back from the first entry leaves the application |

use crate::config::DesyncPolicy;
use crate::navigation::address::AddressSpace;
use crate::navigation::error::NavigationError;
use crate::navigation::presentation::ListingState;
use record_store::ResourceId;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Page,
    Intercepted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub address: String,
    pub kind: EntryKind,
    /// Listing state to restore when this entry is shown again. For intercepted entries this
    /// is the background listing.
    pub listing: Option<ListingState>,
}

impl HistoryEntry {
    pub fn page(address: impl Into<String>, listing: Option<ListingState>) -> Self {
        Self {
            address: address.into(),
            kind: EntryKind::Page,
            listing,
        }
    }

    pub fn intercepted(address: impl Into<String>, background: ListingState) -> Self {
        Self {
            address: address.into(),
            kind: EntryKind::Intercepted,
            listing: Some(background),
        }
    }
}

/// Result of moving through the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Traversal {
    Moved(HistoryEntry),
    /// Went back past the first entry.
    LeftApplication,
    /// Nothing in that direction.
    Stayed,
}

/// The host's session history.
pub trait HistoryBackend: Send {
    /// Append after the current entry, discarding any forward entries.
    fn push(&mut self, entry: HistoryEntry);

    fn replace(&mut self, entry: HistoryEntry);

    fn current(&self) -> Option<&HistoryEntry>;

    fn current_mut(&mut self) -> Option<&mut HistoryEntry>;

    /// The entry `delta` steps away, without moving.
    fn peek(&self, delta: isize) -> Option<&HistoryEntry>;

    fn go(&mut self, delta: isize) -> Traversal;

    /// Zero-based index of the current entry.
    fn position(&self) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-process history stack.
///
/// Going back from the first entry marks the stack as left; going forward again re-enters at
/// that first entry.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
    index: usize,
    left: bool,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    fn target(&self, delta: isize) -> Option<usize> {
        let target = self.index.checked_add_signed(delta)?;
        (target < self.entries.len()).then_some(target)
    }
}

impl HistoryBackend for MemoryHistory {
    fn push(&mut self, entry: HistoryEntry) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(entry);
        self.index = self.entries.len() - 1;
        self.left = false;
    }

    fn replace(&mut self, entry: HistoryEntry) {
        match self.entries.get_mut(self.index) {
            Some(current) => *current = entry,
            None => self.push(entry),
        }
    }

    fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.index)
    }

    fn current_mut(&mut self) -> Option<&mut HistoryEntry> {
        self.entries.get_mut(self.index)
    }

    fn peek(&self, delta: isize) -> Option<&HistoryEntry> {
        self.target(delta).and_then(|target| self.entries.get(target))
    }

    fn go(&mut self, delta: isize) -> Traversal {
        if self.entries.is_empty() {
            return Traversal::Stayed;
        }
        if self.left {
            if delta > 0 {
                self.left = false;
                return Traversal::Moved(self.entries[self.index].clone());
            }
            return Traversal::Stayed;
        }
        match self.target(delta) {
            Some(target) => {
                self.index = target;
                Traversal::Moved(self.entries[target].clone())
            }
            None if delta < 0 => {
                self.left = true;
                Traversal::LeftApplication
            }
            None => Traversal::Stayed,
        }
    }

    fn position(&self) -> usize {
        self.index
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Keeps the shown address equal to the canonical address of what is rendered, and decides
/// what closing an overlay does to history.
pub struct HistorySynchronizer {
    backend: Box<dyn HistoryBackend>,
    addresses: AddressSpace,
    policy: DesyncPolicy,
}

impl HistorySynchronizer {
    pub fn new(
        backend: Box<dyn HistoryBackend>,
        addresses: AddressSpace,
        policy: DesyncPolicy,
    ) -> Self {
        Self {
            backend,
            addresses,
            policy,
        }
    }

    pub fn current(&self) -> Option<&HistoryEntry> {
        self.backend.current()
    }

    pub fn current_address(&self) -> Option<&str> {
        self.backend.current().map(|entry| entry.address.as_str())
    }

    pub fn current_kind(&self) -> Option<EntryKind> {
        self.backend.current().map(|entry| entry.kind)
    }

    pub fn peek(&self, delta: isize) -> Option<&HistoryEntry> {
        self.backend.peek(delta)
    }

    pub fn position(&self) -> usize {
        self.backend.position()
    }

    pub fn len(&self) -> usize {
        self.backend.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    /// Hard arrival: a fresh entry, forward history discarded.
    pub fn load(&mut self, address: &str, listing: Option<ListingState>) {
        debug!(address, "History load");
        self.backend.push(HistoryEntry::page(address, listing));
    }

    pub fn push_page(&mut self, address: &str, listing: Option<ListingState>) {
        debug!(address, "History push page");
        self.backend.push(HistoryEntry::page(address, listing));
    }

    /// Record an overlay under the record's canonical address.
    pub fn push_intercepted(&mut self, id: &ResourceId, background: ListingState) {
        let address = self.addresses.item_address(id);
        debug!(%address, "History push intercepted");
        self.backend
            .push(HistoryEntry::intercepted(address, background));
    }

    /// Swap the current intercepted entry for another record, so one close still returns to
    /// the background screen. Pushes when the current entry is not intercepted.
    pub fn replace_intercepted(&mut self, id: &ResourceId, background: ListingState) {
        if self.current_kind() != Some(EntryKind::Intercepted) {
            self.push_intercepted(id, background);
            return;
        }
        let address = self.addresses.item_address(id);
        debug!(%address, "History replace intercepted");
        self.backend
            .replace(HistoryEntry::intercepted(address, background));
    }

    pub fn replace_current(&mut self, address: &str, listing: Option<ListingState>) {
        debug!(address, "History replace current");
        self.backend.replace(HistoryEntry::page(address, listing));
    }

    /// Step back over the current intercepted entry.
    ///
    /// Returns the entry that is current afterwards. When there is no intercepted entry to
    /// close, the desync policy decides between an error and a logged no-op; the address is
    /// left untouched either way.
    pub fn close(&mut self) -> Result<Option<HistoryEntry>, NavigationError> {
        if self.current_kind() == Some(EntryKind::Intercepted) && self.backend.peek(-1).is_some()
        {
            return match self.backend.go(-1) {
                Traversal::Moved(entry) => Ok(Some(entry)),
                _ => Ok(None),
            };
        }
        self.desync()
    }

    /// Report a close that has nothing to close, per the desync policy. History is not moved.
    pub fn desync(&self) -> Result<Option<HistoryEntry>, NavigationError> {
        let address = self.current_address().unwrap_or("<empty>").to_string();
        match self.policy {
            DesyncPolicy::Fail => Err(NavigationError::HistoryDesync { address }),
            DesyncPolicy::Ignore => {
                warn!(%address, "Close with no overlay to close, ignoring");
                Ok(None)
            }
        }
    }

    pub fn back(&mut self) -> Traversal {
        self.backend.go(-1)
    }

    pub fn forward(&mut self) -> Traversal {
        self.backend.go(1)
    }

    pub fn go(&mut self, delta: isize) -> Traversal {
        self.backend.go(delta)
    }

    /// Record the listing state on the current entry.
    pub fn update_listing(&mut self, state: ListingState) {
        if let Some(entry) = self.backend.current_mut() {
            entry.listing = Some(state);
        }
    }
}
