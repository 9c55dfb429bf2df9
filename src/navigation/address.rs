//! Address parsing.
//!
//! The address space has three shapes: `/` (home), `/{segment}` (the listing) and
//! `/{segment}/{id}` (one record). Query strings, fragments and a single trailing slash are
//! not part of the route. Everything else is [`Route::Unknown`].

use record_store::ResourceId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Listing,
    Item(ResourceId),
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressSpace {
    segment: String,
}

impl AddressSpace {
    pub fn new(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
        }
    }

    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn home_address(&self) -> String {
        "/".to_string()
    }

    pub fn listing_address(&self) -> String {
        format!("/{}", self.segment)
    }

    /// The canonical address of one record. Overlay and full page share it.
    pub fn item_address(&self, id: &ResourceId) -> String {
        format!("/{}/{}", self.segment, id)
    }

    /// Strips the query, the fragment and a trailing slash.
    pub fn normalize(&self, address: &str) -> String {
        let end = address.find(['?', '#']).unwrap_or(address.len());
        let path = &address[..end];
        match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() && !trimmed.ends_with('/') => trimmed.to_string(),
            _ if path.is_empty() => "/".to_string(),
            _ => path.to_string(),
        }
    }

    pub fn parse(&self, address: &str) -> Route {
        let path = self.normalize(address);
        let Some(rest) = path.strip_prefix('/') else {
            return Route::Unknown;
        };
        if rest.is_empty() {
            return Route::Home;
        }

        let mut parts = rest.split('/');
        let first = parts.next();
        let second = parts.next();
        if parts.next().is_some() || first != Some(self.segment.as_str()) {
            return Route::Unknown;
        }

        match second {
            None => Route::Listing,
            Some(id) => ResourceId::from_segment(id).map_or(Route::Unknown, Route::Item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space() -> AddressSpace {
        AddressSpace::new("listing")
    }

    #[test]
    fn parses_the_three_shapes() {
        let space = space();
        assert_eq!(space.parse("/"), Route::Home);
        assert_eq!(space.parse("/listing"), Route::Listing);
        assert_eq!(space.parse("/listing/2"), Route::Item(ResourceId::new("2")));
    }

    #[test]
    fn ignores_query_fragment_and_trailing_slash() {
        let space = space();
        assert_eq!(space.parse("/listing/?sort=price"), Route::Listing);
        assert_eq!(space.parse("/listing/2#reviews"), Route::Item(ResourceId::new("2")));
        assert_eq!(space.parse("/?ref=nav"), Route::Home);
        assert_eq!(space.normalize("/listing/2/"), "/listing/2");
    }

    #[test]
    fn everything_else_is_unknown() {
        let space = space();
        for address in ["/about", "/listing/2/edit", "/listing//", "listing", "//", "/other/1"] {
            assert_eq!(space.parse(address), Route::Unknown, "{address}");
        }
    }
}
