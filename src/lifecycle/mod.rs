//! # System Lifecycle
//!
//! Starting, wiring and stopping the two actors the application runs:
//!
//! ```text
//!   NavigatorClient ──► NavigatorActor ──(CatalogClient)──► StoreActor<Product>
//!                           ▲
//!                    SessionReader ◄── SessionHandle
//! ```
//!
//! The store has no dependencies. The navigator receives its dependencies (a record source and
//! a session reader) through [`NavigatorContext`](crate::navigator::NavigatorContext) when it is
//! started, not when it is constructed.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the clients** held by [`NavigationSystem`]. The navigator's channel closes.
//! 2. **The navigator exits** its loop and drops its context, which holds the last
//!    `CatalogClient`. The store's channel closes.
//! 3. **The store exits.**
//! 4. **Await both tasks.**
//!
//! The dependency graph is acyclic, so channel closure alone gives a deterministic order.
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes structured logging once per process:
//!
//! ```bash
//! RUST_LOG=info cargo run      # commits, lookups, overlay open/close
//! RUST_LOG=debug cargo run     # every command, history operation and listener change
//! ```

pub mod navigation_system;
pub mod tracing;

pub use self::navigation_system::*;
pub use self::tracing::setup_tracing;
