//! # RecordSource Trait
//!
//! The seam between the navigation engine and wherever records come from. The engine only
//! ever needs two asynchronous, side-effect-free operations, so that is all the trait has.
//! [`StoreClient`](crate::StoreClient) implements it; so can anything else that can answer
//! the same two questions.
use crate::{ListingFilter, Record, ResourceId, StoreError};
use async_trait::async_trait;

/// Read-only asynchronous access to records.
///
/// # Example
///
/// ```rust
/// use record_store::{ListingFilter, Record, RecordSource, ResourceId, StoreError};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Tag { id: ResourceId }
///
/// impl Record for Tag {
///     fn id(&self) -> &ResourceId { &self.id }
///     fn title(&self) -> &str { "tag" }
/// }
///
/// // A source that never has anything.
/// struct Empty;
///
/// #[async_trait]
/// impl RecordSource<Tag> for Empty {
///     async fn get(&self, _: ResourceId) -> Result<Option<Tag>, StoreError> { Ok(None) }
///     async fn list(&self, _: ListingFilter) -> Result<Vec<Tag>, StoreError> { Ok(Vec::new()) }
/// }
/// ```
#[async_trait]
pub trait RecordSource<T: Record>: Send + Sync {
    /// Fetch one record. `Ok(None)` means the identifier has no backing record.
    async fn get(&self, id: ResourceId) -> Result<Option<T>, StoreError>;

    /// Fetch every record matching `filter`, in listing order.
    async fn list(&self, filter: ListingFilter) -> Result<Vec<T>, StoreError>;
}
