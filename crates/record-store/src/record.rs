//! # Record Trait
//!
//! The `Record` trait is the contract every displayable item must satisfy to live in a
//! [`StoreActor`](crate::StoreActor). The store never mutates records; it only clones them
//! out to callers, so the trait is deliberately small: an identifier, a title used for
//! document titles, and an optional category used by listing filters.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// Opaque key naming exactly one record.
///
/// The same value is used as the store lookup key and as the last segment of the record's
/// canonical address, so it must be a single non-empty path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parses a path segment into an identifier.
    ///
    /// Returns `None` for empty segments and for anything containing a `/`.
    pub fn from_segment(segment: &str) -> Option<Self> {
        if segment.is_empty() || segment.contains('/') {
            return None;
        }
        Some(Self(segment.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Filter applied when listing records.
///
/// An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingFilter {
    pub category: Option<String>,
}

impl ListingFilter {
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none()
    }
}

/// Trait that any record must implement to be served by a `StoreActor`.
///
/// # Provided Methods
/// - [`Record::category`] defaults to `None` (the record is uncategorised).
/// - [`Record::matches`] compares the category against a [`ListingFilter`]; override it for
///   richer filtering.
pub trait Record: Clone + Debug + PartialEq + Send + Sync + 'static {
    /// The identifier this record is stored under.
    fn id(&self) -> &ResourceId;

    /// Human-readable title, used for document titles.
    fn title(&self) -> &str;

    fn category(&self) -> Option<&str> {
        None
    }

    /// Whether the record belongs in a listing produced with `filter`.
    fn matches(&self, filter: &ListingFilter) -> bool {
        match (&filter.category, self.category()) {
            (None, _) => true,
            (Some(wanted), Some(actual)) => wanted.eq_ignore_ascii_case(actual),
            (Some(_), None) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: ResourceId,
        category: Option<String>,
    }

    impl Record for Item {
        fn id(&self) -> &ResourceId {
            &self.id
        }

        fn title(&self) -> &str {
            "item"
        }

        fn category(&self) -> Option<&str> {
            self.category.as_deref()
        }
    }

    #[test]
    fn segment_parsing_rejects_empty_and_nested() {
        assert_eq!(ResourceId::from_segment("42"), Some(ResourceId::new("42")));
        assert_eq!(ResourceId::from_segment(""), None);
        assert_eq!(ResourceId::from_segment("a/b"), None);
    }

    #[test]
    fn default_matches_uses_category() {
        let lamp = Item {
            id: "5".into(),
            category: Some("Lighting".into()),
        };
        let loose = Item {
            id: "7".into(),
            category: None,
        };

        assert!(lamp.matches(&ListingFilter::default()));
        assert!(lamp.matches(&ListingFilter::category("lighting")));
        assert!(!lamp.matches(&ListingFilter::category("Storage")));
        assert!(loose.matches(&ListingFilter::default()));
        assert!(!loose.matches(&ListingFilter::category("Storage")));
    }
}
