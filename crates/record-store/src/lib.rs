//! # Record Store
//!
//! This crate provides the read-oriented data source that the navigation engine renders from.
//! It is built on the **Actor Model**: a single [`StoreActor`] owns the records and answers
//! lookups sequentially, while any number of cheap [`StoreClient`] clones send it requests.
//!
//! ## Why an Actor for a Read-Only Store?
//!
//! Lookups in the navigation engine are **asynchronous suspension points**. Modelling the
//! store as an actor gives us exactly that shape:
//!
//! - Every lookup is a message plus a one-shot reply, so callers can be cancelled mid-flight
//!   by simply dropping the future.
//! - The store can simulate latency (a remote catalog answers after a short delay) and
//!   inject faults without any locking.
//! - Nothing about the store knows about navigation. It only hands out records.
//!
//! ## Architecture Overview
//!
//! 1. **Record Layer** ([`Record`]) - The display attributes of one item, keyed by [`ResourceId`]
//! 2. **Runtime Layer** ([`StoreActor`]) - Message processing and the in-memory record map
//! 3. **Interface Layer** ([`StoreClient`], [`RecordSource`]) - Type-safe async lookups
//!
//! ## Example
//!
//! ```rust
//! use record_store::{ListingFilter, Record, ResourceId, StoreActor};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Note { id: ResourceId, title: String }
//!
//! impl Record for Note {
//!     fn id(&self) -> &ResourceId { &self.id }
//!     fn title(&self) -> &str { &self.title }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let notes = vec![Note { id: ResourceId::new("1"), title: "First".into() }];
//!     let (actor, client) = StoreActor::new(10, notes);
//!     tokio::spawn(actor.run());
//!
//!     let note = client.get(ResourceId::new("1")).await.unwrap();
//!     assert_eq!(note.unwrap().title, "First");
//!
//!     let all = client.list(ListingFilter::default()).await.unwrap();
//!     assert_eq!(all.len(), 1);
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`MockStore`](mock::MockStore) with a fluent expectation API,
//! plus low-level helpers that hand the test the reply channel so it decides *when* (and in
//! which order) lookups complete.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod record;
pub mod source;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
pub use record::{ListingFilter, Record, ResourceId};
pub use source::RecordSource;
