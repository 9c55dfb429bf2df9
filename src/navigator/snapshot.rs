//! What the rendering layer mounts after each command.

use crate::model::CurrentUser;
use crate::navigation::{
    ListingView, MainView, ModalView, NavigationError, OverlayView, PresentationState,
};

#[derive(Debug, Clone, PartialEq)]
pub struct NavigatorSnapshot<T> {
    /// Address bar contents. `None` until the first load.
    pub address: Option<String>,
    pub presentation: PresentationState,
    pub main: MainView<T>,
    pub modal: ModalView<T>,
    pub title: String,
    /// Address of a render waiting on a store lookup.
    pub pending: Option<String>,
    pub history_position: usize,
    pub history_len: usize,
    /// Dismissal listeners currently registered.
    pub listeners: usize,
    pub user: Option<CurrentUser>,
    /// The user went back past the first history entry.
    pub exited: bool,
    /// Not-found or fault currently rendered in place.
    pub fallback: Option<NavigationError>,
}

impl<T> NavigatorSnapshot<T> {
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn listing(&self) -> Option<&ListingView<T>> {
        self.main.listing()
    }

    pub fn overlay(&self) -> Option<&OverlayView<T>> {
        self.modal.overlay()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }
}
