//! Source URL modes.

use std::fmt;

/// Path marker that identifies search result URLs.
pub const SEARCH_MARKER: &str = "/vectors/";

/// How the page count of a source is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceMode {
    /// A named collection; the footer advertises the page count.
    #[default]
    Catalog,
    /// Search results; pages are visited up to a configured ceiling.
    Search,
}

impl SourceMode {
    /// Derive the mode from a URL path.
    pub fn from_path(path: &str) -> Self {
        if path.contains(SEARCH_MARKER) {
            SourceMode::Search
        } else {
            SourceMode::Catalog
        }
    }
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceMode::Catalog => write!(f, "collection"),
            SourceMode::Search => write!(f, "search"),
        }
    }
}
