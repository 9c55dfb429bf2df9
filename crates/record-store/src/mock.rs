//! # Mock Store & Testing Guide
//!
//! The [`MockStore<T>`] type hands out a real [`StoreClient<T>`] whose requests are answered
//! from a queue of expectations instead of a record map. It lets you script lookups,
//! including failures, for fast deterministic tests of anything that sits on top of the store.
//!
//! ## When to use which
//!
//! | Tool | Use it for |
//! |------|------------|
//! | [`MockStore`] | Scripted answers, error injection, `verify()` that every lookup happened |
//! | [`create_mock_store`] + [`expect_get`]/[`expect_list`] | Controlling **when** each lookup completes, e.g. to race two navigations |
//! | [`StoreActor`](crate::StoreActor) | Real records, end-to-end flows |
//!
//! ## Scripted answers
//!
//! ```rust
//! use record_store::mock::MockStore;
//! use record_store::{Record, ResourceId, StoreError};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Tag { id: ResourceId }
//! impl Record for Tag {
//!     fn id(&self) -> &ResourceId { &self.id }
//!     fn title(&self) -> &str { "tag" }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Tag>::new();
//!     mock.expect_get(ResourceId::new("1"))
//!         .return_ok(Some(Tag { id: ResourceId::new("1") }));
//!     mock.expect_get(ResourceId::new("2"))
//!         .return_err(StoreError::Unavailable("timeout".into()));
//!
//!     let client = mock.client();
//!     assert!(client.get(ResourceId::new("1")).await.unwrap().is_some());
//!     assert!(client.get(ResourceId::new("2")).await.is_err());
//!     mock.verify();
//! }
//! ```
//!
//! ## Controlling completion order
//!
//! ```rust
//! use record_store::mock::{create_mock_store, expect_get};
//! use record_store::{Record, ResourceId};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Tag { id: ResourceId }
//! impl Record for Tag {
//!     fn id(&self) -> &ResourceId { &self.id }
//!     fn title(&self) -> &str { "tag" }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut requests) = create_mock_store::<Tag>(10);
//!     let lookup = tokio::spawn(async move { client.get(ResourceId::new("1")).await });
//!
//!     let (id, responder) = expect_get(&mut requests).await.unwrap();
//!     assert_eq!(id.as_str(), "1");
//!     responder.send(Ok(None)).unwrap();
//!
//!     assert_eq!(lookup.await.unwrap().unwrap(), None);
//! }
//! ```

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::record::{ListingFilter, Record, ResourceId};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the answer to give it.
enum Expectation<T: Record> {
    Get {
        id: ResourceId,
        response: Result<Option<T>, StoreError>,
    },
    List {
        response: Result<Vec<T>, StoreError>,
    },
}

/// A mock store with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were declared. A request that does not match
/// the next expectation (wrong kind or wrong id) panics the mock's background task, which
/// drops the reply channel and surfaces as [`StoreError::ActorDropped`] on the caller side.
pub struct MockStore<T: Record> {
    client: StoreClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Record> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MockStore<T> {
    /// Creates a new mock store with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Unexpected get id");
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::List { respond_to, .. }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `get` lookup for `id`.
    pub fn expect_get(&mut self, id: ResourceId) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` lookup.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Number of expectations not yet consumed.
    pub fn remaining(&self) -> usize {
        self.expectations.lock().unwrap().len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.remaining();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: Record> {
    id: ResourceId,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Record> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: Record> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Record> ListExpectationBuilder<T> {
    pub fn return_ok(self, records: Vec<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List {
                response: Ok(records),
            });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List {
                response: Err(error),
            });
    }
}

// =============================================================================
// MANUAL RESPONDERS
// =============================================================================

/// Creates a store client and the receiver its requests arrive on.
///
/// Nothing answers the requests until the test does, which makes it possible to hold one
/// lookup open while another is issued and answered.
pub fn create_mock_store<T: Record>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is a `get`.
pub async fn expect_get<T: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(ResourceId, oneshot::Sender<Result<Option<T>, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a `list`.
pub async fn expect_list<T: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(ListingFilter, oneshot::Sender<Result<Vec<T>, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::List { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}
