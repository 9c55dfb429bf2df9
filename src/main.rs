//! Demo walkthrough: browse the listing, open a quick view, close it, then arrive at the same
//! record directly and see the full page instead.

use intercept_router::config::NavigatorConfig;
use intercept_router::lifecycle::{setup_tracing, NavigationSystem};
use intercept_router::model::CurrentUser;
use record_store::{ListingFilter, ResourceId};
use std::path::Path;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => NavigatorConfig::from_file(Path::new(&path)),
        None => NavigatorConfig::from_env(),
    }
    .map_err(|e| e.to_string())?;

    info!(environment = %config.environment, "Starting navigation demo");
    let system = NavigationSystem::with_config(config);
    system.session.sign_in(CurrentUser {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
    });
    let navigator = &system.navigator;
    let listing = system.config.listing_segment.clone();

    // Browse the listing and open a quick view
    async {
        let snapshot = navigator.load(&format!("/{listing}")).await?;
        info!(title = %snapshot.title, records = snapshot.listing().map_or(0, |l| l.records.len()), "Listing shown");

        navigator.scroll_listing(480).await?;
        let snapshot = navigator.open_record(ResourceId::new("2")).await?;
        info!(title = %snapshot.title, address = ?snapshot.address(), listeners = snapshot.listeners, "Quick view open");

        let snapshot = navigator.press_key("Escape").await?;
        info!(
            address = ?snapshot.address(),
            scroll = snapshot.listing().map_or(0, |l| l.state.scroll),
            "Quick view closed"
        );
        Ok::<_, intercept_router::navigation::NavigationError>(())
    }
    .instrument(tracing::info_span!("quick_view"))
    .await
    .map_err(|e| e.to_string())?;

    // The same address, arrived at directly
    async {
        let snapshot = navigator.load(&format!("/{listing}/2")).await?;
        info!(title = %snapshot.title, presentation = ?snapshot.presentation, "Direct load");

        navigator.navigate(&format!("/{listing}")).await?;
        let snapshot = navigator
            .filter_listing(ListingFilter::category("Electronics"))
            .await?;
        info!(records = snapshot.listing().map_or(0, |l| l.records.len()), "Filtered listing");
        Ok::<_, intercept_router::navigation::NavigationError>(())
    }
    .instrument(tracing::info_span!("full_page"))
    .await
    .map_err(|e| e.to_string())?;

    // A record that does not exist, opened as an overlay
    async {
        let snapshot = navigator.open_record(ResourceId::new("9")).await?;
        match &snapshot.fallback {
            Some(fallback) => warn!(%fallback, title = %snapshot.title, "Fallback shown"),
            None => info!("Record 9 exists"),
        }
        let snapshot = navigator.back().await?;
        info!(address = ?snapshot.address(), "Back on the listing");

        let snapshot = navigator.reload().await?;
        info!(title = %snapshot.title, user = ?snapshot.user.map(|u| u.name), "Reloaded");
        Ok::<_, intercept_router::navigation::NavigationError>(())
    }
    .instrument(tracing::info_span!("not_found"))
    .await
    .map_err(|e| e.to_string())?;

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
