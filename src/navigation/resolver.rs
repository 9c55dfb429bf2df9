//! # View Resolver
//!
//! Decides, from an address and how the user arrived at it, which visual form to produce and
//! what stays visible underneath. The decision is a pure function of
//! `(route, arrival, retained background)`:
//!
//! | Route | Arrival | Listing mounted? | Result |
//! |-------|---------|------------------|--------|
//! | item `X` | `Hard` | any | `Full(X)` |
//! | item `X` | `Soft` | yes | `Overlay { X, background }` |
//! | item `X` | `Soft` | no | `Full(X)` |
//! | anything else | any | any | `None` |
//!
//! A soft hop from one overlay to another resolves to a fresh overlay over the same retained
//! background, because the listing is still the mounted screen. Overlays never stack.
//!
//! Whether the record exists is not the resolver's concern: the navigator looks it up
//! afterwards and hands a miss to the fallback handler.

use crate::navigation::address::{AddressSpace, Route};
use crate::navigation::history::{EntryKind, HistoryEntry};
use crate::navigation::intent::{ArrivalMode, NavigationIntent};
use crate::navigation::presentation::{ListingState, PresentationState};
use record_store::{ListingFilter, ResourceId};

pub fn resolve(
    route: &Route,
    arrival: ArrivalMode,
    background: Option<&ListingState>,
) -> PresentationState {
    let Route::Item(id) = route else {
        return PresentationState::None;
    };
    match (arrival, background) {
        (ArrivalMode::Soft, Some(background)) => PresentationState::Overlay {
            id: id.clone(),
            background: background.clone(),
        },
        _ => PresentationState::Full(id.clone()),
    }
}

/// A store lookup a render has to wait for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Get(ResourceId),
    List(ListingFilter),
}

/// Which lookup `route` needs. A listing whose filter matches the mounted one is reused.
pub fn plan_lookup(
    route: &Route,
    wanted: &ListingFilter,
    mounted: Option<&ListingFilter>,
) -> Option<Lookup> {
    match route {
        Route::Item(id) => Some(Lookup::Get(id.clone())),
        Route::Listing if mounted == Some(wanted) => None,
        Route::Listing => Some(Lookup::List(wanted.clone())),
        Route::Home | Route::Unknown => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Normalized address the render will commit under.
    pub address: String,
    pub route: Route,
    pub presentation: PresentationState,
}

#[derive(Debug, Clone)]
pub struct ViewResolver {
    addresses: AddressSpace,
}

impl ViewResolver {
    pub fn new(addresses: AddressSpace) -> Self {
        Self { addresses }
    }

    pub fn addresses(&self) -> &AddressSpace {
        &self.addresses
    }

    pub fn resolve_intent(
        &self,
        intent: &NavigationIntent,
        background: Option<&ListingState>,
    ) -> Resolution {
        let address = self.addresses.normalize(&intent.address);
        let route = self.addresses.parse(&address);
        let presentation = resolve(&route, intent.arrival, background);
        Resolution {
            address,
            route,
            presentation,
        }
    }

    /// Resolve a history entry reached by traversal.
    ///
    /// Intercepted entries are re-entered softly, so they become an overlay again when the
    /// listing is mounted. Page entries render the way they were first committed.
    pub fn resolve_entry(
        &self,
        entry: &HistoryEntry,
        background: Option<&ListingState>,
    ) -> Resolution {
        let arrival = match entry.kind {
            EntryKind::Intercepted => ArrivalMode::Soft,
            EntryKind::Page => ArrivalMode::Hard,
        };
        self.resolve_intent(
            &NavigationIntent {
                address: entry.address.clone(),
                arrival,
            },
            background,
        )
    }
}
