//! # Store Messages
//!
//! The request type sent from a [`StoreClient`](crate::StoreClient) to a
//! [`StoreActor`](crate::StoreActor). The store is read-only, so there are exactly two
//! operations: fetch one record, or list the records matching a filter.

use crate::error::StoreError;
use crate::record::{ListingFilter, Record, ResourceId};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to the store actor.
#[derive(Debug)]
pub enum StoreRequest<T: Record> {
    Get {
        id: ResourceId,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: ListingFilter,
        respond_to: Response<Vec<T>>,
    },
}
