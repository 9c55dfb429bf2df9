use crate::clients::{CatalogClient, NavigatorClient};
use crate::config::NavigatorConfig;
use crate::model::{sample_catalog, session_context, Product, SessionHandle};
use crate::navigator::{self, NavigatorContext};
use record_store::StoreActor;
use std::sync::Arc;
use tracing::{error, info};

/// The running application: a product store and the navigator in front of it.
///
/// # Example
///
/// ```ignore
/// let system = NavigationSystem::new();
///
/// system.navigator.load("/listing").await?;
/// let quick_view = system.navigator.open_record(ResourceId::new("2")).await?;
/// assert!(quick_view.presentation.is_overlay());
///
/// system.shutdown().await?;
/// ```
pub struct NavigationSystem {
    /// Drives navigation.
    pub navigator: NavigatorClient<Product>,

    /// Direct read access to the catalog, bypassing navigation.
    pub catalog: CatalogClient,

    /// Writer side of the session the navigator reports in its snapshots.
    pub session: SessionHandle,

    pub config: NavigatorConfig,

    /// Task handles, navigator first (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl NavigationSystem {
    /// Starts the system with the default configuration and the sample catalog.
    pub fn new() -> Self {
        Self::with_config(NavigatorConfig::default())
    }

    pub fn with_config(config: NavigatorConfig) -> Self {
        Self::with_catalog(config, sample_catalog())
    }

    /// Starts the system over an explicit set of products.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn with_catalog(config: NavigatorConfig, products: Vec<Product>) -> Self {
        // 1. Create actors (no dependencies)
        let (store_actor, store_client) = StoreActor::new(config.command_buffer, products);
        let store_actor = store_actor.with_latency(config.store_latency());
        let (navigator_actor, navigator) = navigator::new::<Product>(&config);
        let (session, session_reader) = session_context();
        let catalog = CatalogClient::new(store_client);

        // 2. Start actors with injected context
        let store_handle = tokio::spawn(store_actor.run());
        let navigator_handle = tokio::spawn(navigator_actor.run(NavigatorContext {
            source: Arc::new(catalog.clone()),
            session: session_reader,
        }));

        info!(
            segment = %config.listing_segment,
            environment = %config.environment,
            "Navigation system started"
        );

        Self {
            navigator,
            catalog,
            session,
            config,
            handles: vec![navigator_handle, store_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops every client, then waits for the navigator and the store to finish. Returns an
    /// error if either task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down navigation system...");

        // Closing the navigator's channel ends its loop, which releases the last catalog client.
        drop(self.navigator);
        drop(self.catalog);
        drop(self.session);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Navigation system shutdown complete.");
        Ok(())
    }
}

impl Default for NavigationSystem {
    fn default() -> Self {
        Self::new()
    }
}
