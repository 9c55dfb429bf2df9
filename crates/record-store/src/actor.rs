//! # Store Actor
//!
//! This module defines the `StoreActor`, the server half of the record store. It owns the
//! records and processes lookups sequentially, so the record map needs no locking.

use crate::client::StoreClient;
use crate::message::StoreRequest;
use crate::record::{Record, ResourceId};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The actor that serves a fixed collection of records.
///
/// # Architecture Note
/// The actor owns the records and the receiver end of the channel. Each request is answered
/// through the one-shot channel carried inside it. When every [`StoreClient`] clone has been
/// dropped, the channel closes and [`StoreActor::run`] returns.
///
/// Records keep their insertion order: `List` answers in the order the records were given to
/// [`StoreActor::new`], which is the order a listing screen displays them in.
///
/// # Latency
/// [`StoreActor::with_latency`] makes every lookup wait before answering. This reproduces the
/// network delay of a real data source and gives the navigation engine something to cancel.
pub struct StoreActor<T: Record> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    records: Vec<T>,
    index: HashMap<ResourceId, usize>,
    latency: Duration,
}

impl<T: Record> StoreActor<T> {
    /// Creates a new `StoreActor` seeded with `records`, and its associated client.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `records` - The records to serve. A later record with a duplicate id replaces the
    ///   earlier one for `get`, but both stay in listing order.
    pub fn new(buffer_size: usize, records: Vec<T>) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let index = records
            .iter()
            .enumerate()
            .map(|(position, record)| (record.id().clone(), position))
            .collect();
        let actor = Self {
            receiver,
            records,
            index,
            latency: Duration::ZERO,
        };
        (actor, StoreClient::new(sender))
    }

    /// Delay every answer by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Runs the actor's event loop, answering lookups until the channel closes.
    pub async fn run(mut self) {
        let record_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(record_type, size = self.records.len(), "Store started");

        while let Some(msg) = self.receiver.recv().await {
            if !self.latency.is_zero() {
                tokio::time::sleep(self.latency).await;
            }

            match msg {
                StoreRequest::Get { id, respond_to } => {
                    let item = self
                        .index
                        .get(&id)
                        .and_then(|position| self.records.get(*position))
                        .cloned();
                    debug!(record_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::List { filter, respond_to } => {
                    let items: Vec<T> = self
                        .records
                        .iter()
                        .filter(|record| record.matches(&filter))
                        .cloned()
                        .collect();
                    debug!(record_type, ?filter, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
            }
        }

        info!(record_type, "Store shutdown");
    }
}
