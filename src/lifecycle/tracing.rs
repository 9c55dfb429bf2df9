//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter filtered by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Navigator started`, `Store started`, shutdown of each
//! - **Transitions**: `Lookup started` with its generation, `Committed`, `Superseded`,
//!   `Discarding stale lookup`
//! - **Overlay**: open, unmount and close with the record id and instance number
//! - **Faults**: `Render faulted` with the store error and the digest shown on the fault page
//!
//! ## Workflow Trace Example
//!
//! Opening a quick view from the listing and closing it with Escape, at `RUST_LOG=info`:
//!
//! ```text
//! INFO listing: Lookup started generation=1 address=/listing arrival=hard lookup=List(..)
//! INFO listing: Committed address=/listing presentation=None fallback=false
//! INFO quick_view:open_record: Lookup started generation=2 address=/listing/2 arrival=soft
//! INFO quick_view:open_record: Committed address=/listing/2 presentation=Overlay { .. }
//! INFO quick_view:gesture: Overlay closed address=/listing
//! ```
//!
//! The client methods are instrumented, so every line carries the span of the gesture that
//! caused it.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
