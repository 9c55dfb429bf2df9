//! Navigation intents.

use std::fmt;

/// How the user arrived at an address.
///
/// `Soft` arrivals come from inside the application (activating a link, a history traversal)
/// and may be intercepted into an overlay. `Hard` arrivals (typing the address, reloading,
/// following an external link) always render the full page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrivalMode {
    Soft,
    Hard,
}

impl fmt::Display for ArrivalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrivalMode::Soft => f.write_str("soft"),
            ArrivalMode::Hard => f.write_str("hard"),
        }
    }
}

/// "The user wants to view this address", with how they got there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub address: String,
    pub arrival: ArrivalMode,
}

impl NavigationIntent {
    pub fn soft(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            arrival: ArrivalMode::Soft,
        }
    }

    pub fn hard(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            arrival: ArrivalMode::Hard,
        }
    }

    pub fn is_hard(&self) -> bool {
        self.arrival == ArrivalMode::Hard
    }
}
