use intercept_router::lifecycle::NavigationSystem;
use intercept_router::model::CurrentUser;
use intercept_router::navigation::{
    MainView, ModalView, NavigationError, PresentationState, Scope,
};
use record_store::{ListingFilter, ResourceId};

fn id(raw: &str) -> ResourceId {
    ResourceId::new(raw)
}

/// Browse the listing, open a quick view, close it, and land back where we were.
#[tokio::test]
async fn test_quick_view_round_trip() {
    let system = NavigationSystem::new();
    let nav = &system.navigator;

    let listing = nav.load("/listing").await.expect("Failed to load listing");
    assert_eq!(listing.address(), Some("/listing"));
    assert_eq!(listing.title, "Products | Routing Titbits");
    assert_eq!(listing.listing().expect("Listing not mounted").records.len(), 6);

    nav.scroll_listing(480).await.expect("Failed to scroll");

    let open = nav.open_record(id("2")).await.expect("Failed to open overlay");
    assert_eq!(open.address(), Some("/listing/2"));
    assert!(open.presentation.is_overlay());
    assert_eq!(open.title, "Mechanical Keyboard RGB | Routing Titbits");
    assert_eq!(open.listeners, 3);
    assert_eq!(open.history_len, 2);
    let overlay = open.overlay().expect("Overlay not rendered");
    assert_eq!(overlay.heading, "Quick View");
    assert_eq!(overlay.full_page, "/listing/2");
    // The listing stays mounted underneath.
    assert_eq!(open.listing().expect("Listing unmounted").state.scroll, 480);

    let closed = nav.press_key("Escape").await.expect("Failed to close");
    assert_eq!(closed.address(), Some("/listing"));
    assert_eq!(closed.presentation, PresentationState::None);
    assert!(closed.modal.is_empty());
    assert_eq!(closed.listeners, 0);
    assert_eq!(closed.history_position, 0);
    assert_eq!(closed.title, "Products | Routing Titbits");
    assert_eq!(closed.listing().expect("Listing unmounted").state.scroll, 480);

    system.shutdown().await.expect("Shutdown failed");
}

/// The same address renders as a full page when arrived at directly.
#[tokio::test]
async fn test_direct_load_renders_full_page() {
    let system = NavigationSystem::new();

    let snapshot = system.navigator.load("/listing/2").await.unwrap();
    assert_eq!(snapshot.presentation, PresentationState::Full(id("2")));
    assert_eq!(
        snapshot.main.detail().map(|p| p.name.as_str()),
        Some("Mechanical Keyboard RGB")
    );
    assert!(snapshot.modal.is_empty());
    assert_eq!(snapshot.listeners, 0);

    // Dismissal gestures have nothing to act on.
    let after = system.navigator.press_key("Escape").await.unwrap();
    assert_eq!(after, snapshot);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reload_of_overlay_becomes_full_page() {
    let system = NavigationSystem::new();
    let nav = &system.navigator;

    nav.load("/listing").await.unwrap();
    nav.open_record(id("4")).await.unwrap();

    let full = nav.reload().await.unwrap();
    assert_eq!(full.address(), Some("/listing/4"));
    assert_eq!(full.presentation, PresentationState::Full(id("4")));
    assert_eq!(full.listeners, 0);
    assert_eq!(full.history_len, 2);

    // Back from the full page remounts the listing.
    let back = nav.back().await.unwrap();
    assert_eq!(back.address(), Some("/listing"));
    assert!(back.listing().is_some());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_view_full_page_from_overlay() {
    let system = NavigationSystem::new();
    let nav = &system.navigator;

    nav.load("/listing").await.unwrap();
    let overlay = nav.open_record(id("1")).await.unwrap();
    assert!(overlay.presentation.is_overlay());

    let full = nav.view_full_page().await.unwrap();
    assert_eq!(full.presentation, PresentationState::Full(id("1")));
    assert_eq!(full.title, "Wireless Headphones Pro | Routing Titbits");

    system.shutdown().await.unwrap();
}

/// Every dismissal gesture ends in the same state.
#[tokio::test]
async fn test_all_dismissal_gestures_are_equivalent() {
    let system = NavigationSystem::new();
    let nav = &system.navigator;
    let baseline = nav.load("/listing").await.unwrap();

    nav.open_record(id("3")).await.unwrap();
    let by_key = nav.press_key("Escape").await.unwrap();

    nav.open_record(id("3")).await.unwrap();
    let by_backdrop = nav.click_backdrop().await.unwrap();

    nav.open_record(id("3")).await.unwrap();
    let by_control = nav.click_close().await.unwrap();

    for closed in [&by_key, &by_backdrop, &by_control] {
        assert_eq!(closed.address, baseline.address);
        assert_eq!(closed.presentation, baseline.presentation);
        assert_eq!(closed.main, baseline.main);
        assert_eq!(closed.title, baseline.title);
        assert_eq!(closed.listeners, 0);
        assert_eq!(closed.history_position, 0);
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_content_click_and_other_keys_do_not_dismiss() {
    let system = NavigationSystem::new();
    let nav = &system.navigator;

    nav.load("/listing").await.unwrap();
    let open = nav.open_record(id("5")).await.unwrap();

    assert_eq!(nav.click_content().await.unwrap(), open);
    assert_eq!(nav.press_key("Enter").await.unwrap(), open);

    // A second close after the first finds nothing to act on.
    let closed = nav.click_close().await.unwrap();
    assert_eq!(nav.click_close().await.unwrap(), closed);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_browser_back_closes_overlay_and_forward_reopens() {
    let system = NavigationSystem::new();
    let nav = &system.navigator;

    nav.load("/listing").await.unwrap();
    nav.open_record(id("2")).await.unwrap();

    let back = nav.back().await.unwrap();
    assert_eq!(back.address(), Some("/listing"));
    assert_eq!(back.listeners, 0);
    assert!(back.modal.is_empty());

    let forward = nav.forward().await.unwrap();
    assert_eq!(forward.address(), Some("/listing/2"));
    assert!(forward.presentation.is_overlay());
    assert_eq!(forward.listeners, 3);

    system.shutdown().await.unwrap();
}

/// Opening a different record from an open overlay replaces it. Closing still lands on the
/// listing, not on the previous overlay.
#[tokio::test]
async fn test_overlay_hop_replaces_entry() {
    let system = NavigationSystem::new();
    let nav = &system.navigator;

    nav.load("/listing").await.unwrap();
    nav.open_record(id("1")).await.unwrap();
    let hopped = nav.open_record(id("6")).await.unwrap();
    assert_eq!(hopped.address(), Some("/listing/6"));
    assert_eq!(hopped.history_len, 2);
    assert_eq!(hopped.listeners, 3);
    assert_eq!(hopped.presentation.record_id(), Some(&id("6")));

    let closed = nav.click_close().await.unwrap();
    assert_eq!(closed.address(), Some("/listing"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_soft_arrival_without_listing_is_full_page() {
    let system = NavigationSystem::new();
    let nav = &system.navigator;

    let home = nav.load("/").await.unwrap();
    assert_eq!(home.main, MainView::Home);
    assert_eq!(home.title, "Routing Titbits");

    let detail = nav.navigate("/listing/5").await.unwrap();
    assert_eq!(detail.presentation, PresentationState::Full(id("5")));
    assert_eq!(detail.listeners, 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_record_in_overlay_is_dismissable() {
    let system = NavigationSystem::new();
    let nav = &system.navigator;

    nav.load("/listing").await.unwrap();
    let missing = nav.open_record(id("9")).await.unwrap();
    assert_eq!(missing.address(), Some("/listing/9"));
    assert_eq!(missing.title, "Product Not Found");
    assert!(matches!(missing.modal, ModalView::NotFound(_)));
    assert_eq!(
        missing.fallback,
        Some(NavigationError::RecordNotFound {
            id: id("9"),
            scope: Scope::Section("listing".into()),
        })
    );
    // The listing stays mounted behind the fallback.
    assert!(missing.listing().is_some());

    let closed = nav.press_key("Escape").await.unwrap();
    assert_eq!(closed.address(), Some("/listing"));
    assert_eq!(closed.fallback, None);
    assert_eq!(closed.listeners, 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_record_and_unknown_address() {
    let system = NavigationSystem::new();
    let nav = &system.navigator;

    let section = nav.load("/listing/42").await.unwrap();
    match &section.main {
        MainView::NotFound(view) => {
            assert_eq!(view.heading, "Product Not Found");
            assert_eq!(view.links[0].address, "/listing");
        }
        other => panic!("Expected section not-found, got {:?}", other),
    }

    let global = nav.load("/nowhere").await.unwrap();
    match &global.main {
        MainView::NotFound(view) => {
            assert_eq!(view.scope, Scope::Global);
            assert_eq!(view.links[0].address, "/");
        }
        other => panic!("Expected global not-found, got {:?}", other),
    }
    assert_eq!(global.title, "Page Not Found");

    // Extra segments under the listing are not items.
    let nested = nav.load("/listing/2/reviews").await.unwrap();
    assert_eq!(nested.title, "Page Not Found");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_filter_survives_overlay_round_trip() {
    let system = NavigationSystem::new();
    let nav = &system.navigator;

    nav.load("/listing").await.unwrap();
    let filtered = nav
        .filter_listing(ListingFilter::category("Electronics"))
        .await
        .unwrap();
    assert_eq!(filtered.listing().unwrap().records.len(), 3);
    assert_eq!(filtered.history_len, 1);

    nav.open_record(id("2")).await.unwrap();
    let closed = nav.click_backdrop().await.unwrap();
    let view = closed.listing().unwrap();
    assert_eq!(view.state.filter, ListingFilter::category("Electronics"));
    assert_eq!(view.records.len(), 3);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_back_past_first_entry_leaves_and_forward_returns() {
    let system = NavigationSystem::new();
    let nav = &system.navigator;

    nav.load("/listing").await.unwrap();
    let left = nav.back().await.unwrap();
    assert!(left.exited);

    // Nothing further back.
    assert!(nav.back().await.unwrap().exited);

    let returned = nav.forward().await.unwrap();
    assert!(!returned.exited);
    assert_eq!(returned.address(), Some("/listing"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_navigating_to_current_address_is_a_no_op() {
    let system = NavigationSystem::new();
    let nav = &system.navigator;

    let listing = nav.load("/listing").await.unwrap();
    let again = nav.navigate("/listing/").await.unwrap();
    assert_eq!(again, listing);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_snapshot_reports_signed_in_user() {
    let system = NavigationSystem::new();
    assert_eq!(system.navigator.snapshot().await.unwrap().user, None);

    let alice = CurrentUser {
        name: "Alice".into(),
        email: "alice@example.com".into(),
    };
    system.session.sign_in(alice.clone());
    assert_eq!(system.navigator.snapshot().await.unwrap().user, Some(alice));

    system.session.sign_out();
    assert_eq!(system.navigator.snapshot().await.unwrap().user, None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_listeners_return_to_zero_after_many_cycles() {
    let system = NavigationSystem::new();
    let nav = &system.navigator;

    nav.load("/listing").await.unwrap();
    for round in 1..=6 {
        let open = nav.open_record(id(&round.to_string())).await.unwrap();
        assert_eq!(open.listeners, 3);
        nav.click_close().await.unwrap();
    }

    // Navigating away from an open overlay also releases it.
    nav.open_record(id("1")).await.unwrap();
    let home = nav.navigate("/").await.unwrap();
    assert_eq!(home.listeners, 0);
    assert_eq!(home.main, MainView::Home);

    system.shutdown().await.unwrap();
}

/// Traversing back onto an intercepted entry with no listing mounted shows the full page.
/// There is no overlay to close, so a close must not move the address.
#[tokio::test]
async fn test_close_on_intercepted_entry_shown_as_full_page() {
    let system = NavigationSystem::new();
    let nav = &system.navigator;

    nav.load("/listing").await.unwrap();
    nav.open_record(id("2")).await.unwrap();
    nav.navigate("/").await.unwrap();

    let back = nav.back().await.unwrap();
    assert_eq!(back.address(), Some("/listing/2"));
    assert_eq!(back.presentation, PresentationState::Full(id("2")));
    assert_eq!(back.listeners, 0);

    let err = nav.dismiss().await.unwrap_err();
    assert_eq!(
        err,
        NavigationError::HistoryDesync {
            address: "/listing/2".into()
        }
    );

    let after = nav.snapshot().await.unwrap();
    assert_eq!(after.address(), Some("/listing/2"));
    assert_eq!(after.presentation, PresentationState::Full(id("2")));
    assert_eq!(
        after.main.detail().map(|p| p.name.as_str()),
        Some("Mechanical Keyboard RGB")
    );

    // Gestures have no listener to reach either.
    assert_eq!(nav.press_key("Escape").await.unwrap(), after);

    system.shutdown().await.unwrap();
}
