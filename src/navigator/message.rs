//! Messages the navigator accepts.

use crate::navigation::{DismissGesture, NavigationError};
use crate::navigator::snapshot::NavigatorSnapshot;
use record_store::{ListingFilter, Record, ResourceId};
use tokio::sync::oneshot;

/// Every command answers with the state it committed, or why it did not.
pub type Response<T> = oneshot::Sender<Result<NavigatorSnapshot<T>, NavigationError>>;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Direct entry of an address (typed, bookmarked, external link).
    Load(String),
    /// Reload the current entry.
    Reload,
    /// In-app link activation.
    Navigate(String),
    /// Activate a record in the listing.
    OpenRecord(ResourceId),
    Gesture(DismissGesture),
    /// Close the overlay programmatically.
    Dismiss,
    Back,
    Forward,
    ScrollListing(u32),
    FilterListing(ListingFilter),
    Retry,
    Escape,
    Snapshot,
}

impl Command {
    /// Hard arrivals. Everything else is soft.
    pub fn is_hard(&self) -> bool {
        matches!(self, Command::Load(_) | Command::Reload)
    }
}

pub struct NavigatorRequest<T: Record> {
    pub command: Command,
    pub respond_to: Response<T>,
}
