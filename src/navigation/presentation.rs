//! # Rendered State
//!
//! The UI is described as two slots, mirroring a layout with a parallel modal slot:
//!
//! - the **main** slot always holds a screen ([`MainView`]),
//! - the **modal** slot is either empty or holds one overlay ([`ModalView`]).
//!
//! While an overlay is showing, the main slot keeps the listing it was opened from, so the
//! listing stays mounted with its filter and scroll position intact.

use crate::navigation::fallback::{FaultView, NotFoundView};
use record_store::{ListingFilter, ResourceId};
use serde::{Deserialize, Serialize};

/// Screen state of the listing that must survive an overlay round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingState {
    pub filter: ListingFilter,
    pub scroll: u32,
}

impl ListingState {
    pub fn filtered(filter: ListingFilter) -> Self {
        Self { filter, scroll: 0 }
    }
}

/// Which visual form the current address is rendered in. Exactly one holds at any time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PresentationState {
    /// No record is being presented (home, listing, or a fallback page).
    #[default]
    None,
    /// The record is shown over the retained listing.
    Overlay {
        id: ResourceId,
        background: ListingState,
    },
    /// The record is shown as a standalone page.
    Full(ResourceId),
}

impl PresentationState {
    pub fn record_id(&self) -> Option<&ResourceId> {
        match self {
            PresentationState::None => None,
            PresentationState::Overlay { id, .. } | PresentationState::Full(id) => Some(id),
        }
    }

    pub fn is_overlay(&self) -> bool {
        matches!(self, PresentationState::Overlay { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingView<T> {
    pub state: ListingState,
    pub records: Vec<T>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView<T> {
    pub heading: String,
    pub record: T,
    /// Where "view full page" leads. Same as the current address.
    pub full_page: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MainView<T> {
    /// Nothing has been loaded yet.
    Blank,
    Home,
    Listing(ListingView<T>),
    Detail(T),
    NotFound(NotFoundView),
    Fault(FaultView),
}

impl<T> MainView<T> {
    pub fn listing(&self) -> Option<&ListingView<T>> {
        match self {
            MainView::Listing(view) => Some(view),
            _ => None,
        }
    }

    pub fn listing_mut(&mut self) -> Option<&mut ListingView<T>> {
        match self {
            MainView::Listing(view) => Some(view),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&T> {
        match self {
            MainView::Detail(record) => Some(record),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalView<T> {
    Empty,
    Overlay(OverlayView<T>),
    NotFound(NotFoundView),
    Fault(FaultView),
}

impl<T> ModalView<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, ModalView::Empty)
    }

    pub fn overlay(&self) -> Option<&OverlayView<T>> {
        match self {
            ModalView::Overlay(view) => Some(view),
            _ => None,
        }
    }
}
