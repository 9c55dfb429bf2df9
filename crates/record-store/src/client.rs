//! # Store Client
//!
//! The cloneable handle used to send lookups to a [`StoreActor`](crate::StoreActor).

use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::record::{ListingFilter, Record, ResourceId};
use crate::source::RecordSource;
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for the store actor.
///
/// Holds only a sender, so cloning is inexpensive and clones can be moved into spawned
/// lookup tasks.
#[derive(Clone)]
pub struct StoreClient<T: Record> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: Record> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn get(&self, id: ResourceId) -> Result<Option<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get { id, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn list(&self, filter: ListingFilter) -> Result<Vec<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::List { filter, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }
}

#[async_trait]
impl<T: Record> RecordSource<T> for StoreClient<T> {
    async fn get(&self, id: ResourceId) -> Result<Option<T>, StoreError> {
        StoreClient::get(self, id).await
    }

    async fn list(&self, filter: ListingFilter) -> Result<Vec<T>, StoreError> {
        StoreClient::list(self, filter).await
    }
}
