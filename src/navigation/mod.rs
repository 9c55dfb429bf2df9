//! # Navigation Core
//!
//! The synchronous building blocks the navigator actor is assembled from. None of these types
//! know about channels or tasks, so each can be tested on its own.
//!
//! | Module | Role |
//! |--------|------|
//! | [`address`] | Parses addresses into routes and builds canonical addresses |
//! | [`intent`] | Navigation intents and their arrival mode |
//! | [`resolver`] | Decides overlay vs full page and which lookup a render needs |
//! | [`overlay`] | The single active overlay and its dismissal listeners |
//! | [`history`] | The host history stack and what closing an overlay does to it |
//! | [`fallback`] | Scoped not-found pages and the retry-capable fault boundary |
//! | [`presentation`] | The rendered slots handed to the UI layer |

pub mod address;
pub mod error;
pub mod fallback;
pub mod history;
pub mod intent;
pub mod overlay;
pub mod presentation;
pub mod resolver;

pub use address::{AddressSpace, Route};
pub use error::NavigationError;
pub use fallback::{
    EscapeLink, FallbackHandler, FaultBoundary, FaultView, NotFoundView, RuntimeFault, Scope,
};
pub use history::{
    EntryKind, HistoryBackend, HistoryEntry, HistorySynchronizer, MemoryHistory, Traversal,
};
pub use intent::{ArrivalMode, NavigationIntent};
pub use overlay::{
    DismissGesture, GestureOutcome, ListenerGuard, ListenerKind, ListenerRegistry,
    OverlayController, PointerTarget,
};
pub use presentation::{ListingState, ListingView, MainView, ModalView, OverlayView, PresentationState};
pub use resolver::{plan_lookup, resolve, Lookup, Resolution, ViewResolver};
