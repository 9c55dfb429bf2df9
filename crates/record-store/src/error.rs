//! # Store Errors
//!
//! Errors a lookup can fail with. A record that does not exist is **not** an error: `get`
//! answers `Ok(None)` and the caller decides what "not found" means for it.

/// Errors that can occur while talking to the store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    ActorClosed,
    #[error("Store dropped response channel")]
    ActorDropped,
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
