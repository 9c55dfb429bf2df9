//! # Intercept Router
//!
//! > **Overlay-intercepting navigation over an asynchronous record store.**
//!
//! A list-and-detail application has one canonical address per record, `/listing/{id}`.
//! What the user sees at that address depends on **how they arrived**:
//!
//! - clicked from the listing (a *soft* arrival): the record opens in a quick-view overlay on
//!   top of the still-mounted listing, and the address bar changes;
//! - loaded directly, refreshed or shared (a *hard* arrival): the record renders as a full page.
//!
//! Closing the overlay steps back over its history entry, so the listing reappears exactly as
//! it was left, scroll position and filter included.
//!
//! ## Architecture Notes
//!
//! ### 1. One Foreground Loop
//! Every piece of navigation state is owned by a single [`NavigatorActor`](navigator::NavigatorActor)
//! and mutated only by its message loop. Commands are processed one at a time; the only
//! suspension point is a store lookup, which runs as a spawned task and reports back on an
//! internal channel. Nothing commits before the lookup answers.
//!
//! ### 2. Last Wins
//! Each lookup carries a generation number. A newer transition supersedes the pending one,
//! and a completion whose generation is no longer pending is discarded, so a slow lookup can
//! never overwrite a newer screen.
//!
//! ### 3. Async Context Injection
//! The record source and session reader are injected when the navigator starts
//! ([`NavigatorContext`](navigator::NavigatorContext)), not when it is built. Tests inject a
//! mock store through the same seam.
//!
//! ### 4. Observability
//! Every client method is instrumented with `tracing`, so a commit can be traced back to the
//! gesture that caused it. See [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! ### 1. The Core ([`navigation`])
//! Synchronous building blocks: address parsing, the view resolver, the overlay controller and
//! its listener registry, the history synchronizer and the scoped fallbacks.
//!
//! ### 2. The Engine ([`navigator`])
//! The actor that assembles the core into a navigation state machine.
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! Spins up the store and the navigator and wires them together.
//! - **Key items**: [`NavigationSystem`](lifecycle::NavigationSystem),
//!   [`shutdown`](lifecycle::NavigationSystem::shutdown).
//!
//! ### 4. The Interface ([`clients`])
//! - **Key items**: [`NavigatorClient`](clients::NavigatorClient), [`CatalogClient`](clients::CatalogClient).
//!
//! ### 5. Data ([`model`], [`config`])
//! The demo product catalog, the session context and [`NavigatorConfig`](config::NavigatorConfig).
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the demo walkthrough with info logs
//! RUST_LOG=info cargo run
//!
//! # Same, with a configuration file
//! RUST_LOG=info cargo run -- navigator.toml
//! ```

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod navigation;
pub mod navigator;
