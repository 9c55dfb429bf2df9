//! # Fallback & Fault Handling
//!
//! Terminal states for a render that cannot produce its record, each bound to a [`Scope`].
//!
//! - **Not found** is expected: the identifier has no record. The scoped page renders in
//!   place and the address keeps naming what the user asked for.
//! - **Faults** are unexpected (the store failed). A [`FaultBoundary`] catches them, renders a
//!   fault page for the scope and remembers enough to either **retry** the same render or
//!   **escape** to a known-good address.
//!
//! A fallback in the listing section never replaces anything outside that section: when the
//! missing record was requested as an overlay, only the modal slot shows the not-found page
//! and the listing underneath stays interactive.

use crate::config::NavigatorConfig;
use crate::navigation::address::AddressSpace;
use std::fmt;

/// Where a fallback is rendered and how far it reaches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    Global,
    /// A named section of the address space, e.g. the listing segment.
    Section(String),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => f.write_str("global scope"),
            Scope::Section(name) => write!(f, "section '{}'", name),
        }
    }
}

/// An unexpected failure caught while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeFault {
    pub message: String,
    /// Short stable fingerprint of the message, for matching log lines to fault pages.
    pub digest: String,
}

impl RuntimeFault {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        // FNV-1a
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in message.as_bytes() {
            hash ^= u64::from(*byte);
            hash = hash.wrapping_mul(0x0100_0000_01b3);
        }
        Self {
            message,
            digest: format!("{:08x}", hash >> 32),
        }
    }
}

impl fmt::Display for RuntimeFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeLink {
    pub label: String,
    pub address: String,
}

impl EscapeLink {
    fn new(label: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            address: address.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundView {
    pub scope: Scope,
    pub heading: String,
    pub message: String,
    pub links: Vec<EscapeLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultView {
    pub scope: Scope,
    pub heading: String,
    pub message: String,
    /// Only present in development.
    pub details: Option<RuntimeFault>,
    pub escape: EscapeLink,
}

/// Builds the not-found and fault pages for each scope.
#[derive(Debug, Clone)]
pub struct FallbackHandler {
    addresses: AddressSpace,
    listing_title: String,
    record_label: String,
    expose_details: bool,
}

impl FallbackHandler {
    pub fn new(config: &NavigatorConfig) -> Self {
        Self {
            addresses: AddressSpace::new(config.listing_segment.clone()),
            listing_title: config.listing_title.clone(),
            record_label: config.record_label.clone(),
            expose_details: config.environment.exposes_fault_details(),
        }
    }

    /// The scope every record address belongs to.
    pub fn section(&self) -> Scope {
        Scope::Section(self.addresses.segment().to_string())
    }

    /// Known-good address for a scope: the listing for a section, home for global.
    pub fn escape_address(&self, scope: &Scope) -> String {
        match scope {
            Scope::Global => self.addresses.home_address(),
            Scope::Section(_) => self.addresses.listing_address(),
        }
    }

    pub fn not_found(&self, scope: &Scope) -> NotFoundView {
        let home = EscapeLink::new("Go Home", self.addresses.home_address());
        let listing = EscapeLink::new(
            format!("Back to {}", self.listing_title),
            self.addresses.listing_address(),
        );
        match scope {
            Scope::Global => NotFoundView {
                scope: Scope::Global,
                heading: "Page Not Found".to_string(),
                message: "The page you're looking for doesn't exist. It might have been moved or deleted."
                    .to_string(),
                links: vec![home, listing],
            },
            Scope::Section(_) => NotFoundView {
                scope: scope.clone(),
                heading: format!("{} Not Found", self.record_label),
                message: format!(
                    "The {} you're looking for doesn't exist or has been removed.",
                    self.record_label.to_lowercase()
                ),
                links: vec![listing, home],
            },
        }
    }

    pub fn fault(&self, scope: &Scope, fault: &RuntimeFault, escape: String) -> FaultView {
        let label = if escape == self.addresses.home_address() {
            "Go Home".to_string()
        } else {
            format!("Back to {}", self.listing_title)
        };
        FaultView {
            scope: scope.clone(),
            heading: "Something went wrong!".to_string(),
            message: "We encountered an error while loading this page. This might be a temporary issue. Please try again."
                .to_string(),
            details: self.expose_details.then(|| fault.clone()),
            escape: EscapeLink::new(label, escape),
        }
    }
}

/// Catches a fault within one scope and holds what is needed to recover from it.
///
/// `R` is whatever the owner needs to re-attempt the failed render.
#[derive(Debug)]
pub struct FaultBoundary<R> {
    tripped: Option<Tripped<R>>,
}

#[derive(Debug)]
struct Tripped<R> {
    scope: Scope,
    retry: R,
    escape: String,
}

impl<R> Default for FaultBoundary<R> {
    fn default() -> Self {
        Self { tripped: None }
    }
}

impl<R> FaultBoundary<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trip(&mut self, scope: Scope, retry: R, escape: String) {
        self.tripped = Some(Tripped {
            scope,
            retry,
            escape,
        });
    }

    pub fn is_tripped(&self) -> bool {
        self.tripped.is_some()
    }

    pub fn scope(&self) -> Option<&Scope> {
        self.tripped.as_ref().map(|t| &t.scope)
    }

    /// Clears the fault and returns the render to re-attempt.
    pub fn retry(&mut self) -> Option<R> {
        self.tripped.take().map(|t| t.retry)
    }

    /// Clears the fault and returns the address to escape to.
    pub fn escape(&mut self) -> Option<String> {
        self.tripped.take().map(|t| t.escape)
    }

    pub fn clear(&mut self) {
        self.tripped = None;
    }
}
