//! # Catalog Client
//!
//! Provides a product-specific API over a `StoreClient<Product>`, and serves as the navigator's
//! [`RecordSource`].
use crate::model::Product;
use async_trait::async_trait;
use record_store::{ListingFilter, RecordSource, ResourceId, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for reading the product catalog.
#[derive(Clone)]
pub struct CatalogClient {
    inner: StoreClient<Product>,
}

impl CatalogClient {
    pub fn new(inner: StoreClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn product(&self, id: ResourceId) -> Result<Option<Product>, StoreError> {
        debug!("Sending request");
        self.inner.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn products(&self, filter: ListingFilter) -> Result<Vec<Product>, StoreError> {
        debug!("Sending request");
        self.inner.list(filter).await
    }

    /// Products in one category, in listing order.
    #[instrument(skip(self))]
    pub async fn products_in_category(&self, category: &str) -> Result<Vec<Product>, StoreError> {
        self.products(ListingFilter::category(category)).await
    }
}

#[async_trait]
impl RecordSource<Product> for CatalogClient {
    async fn get(&self, id: ResourceId) -> Result<Option<Product>, StoreError> {
        self.product(id).await
    }

    async fn list(&self, filter: ListingFilter) -> Result<Vec<Product>, StoreError> {
        self.products(filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_catalog;
    use record_store::mock::{create_mock_store, expect_get, expect_list};

    #[tokio::test]
    async fn test_product_forwards_get() {
        let (client, mut receiver) = create_mock_store::<Product>(10);
        let catalog = CatalogClient::new(client);

        let lookup = tokio::spawn(async move { catalog.product(ResourceId::new("4")).await });

        let (id, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(id.as_str(), "4");
        responder.send(Ok(Some(sample_catalog()[3].clone()))).unwrap();

        let product = lookup.await.unwrap().unwrap().unwrap();
        assert_eq!(product.name, "Ergonomic Office Chair");
    }

    #[tokio::test]
    async fn test_products_in_category_sends_filter() {
        let (client, mut receiver) = create_mock_store::<Product>(10);
        let catalog = CatalogClient::new(client);

        let lookup =
            tokio::spawn(async move { catalog.products_in_category("Lighting").await });

        let (filter, responder) = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        assert_eq!(filter, ListingFilter::category("Lighting"));
        responder.send(Ok(vec![sample_catalog()[4].clone()])).unwrap();

        assert_eq!(lookup.await.unwrap().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_store_errors_pass_through() {
        let (client, receiver) = create_mock_store::<Product>(10);
        drop(receiver);

        let result = CatalogClient::new(client).product(ResourceId::new("1")).await;
        assert_eq!(result, Err(StoreError::ActorClosed));
    }
}
