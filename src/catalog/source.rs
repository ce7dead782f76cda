//! Source URL handling.

use std::fmt;

use url::Url;

use crate::config::SourceMode;
use crate::error::{Error, Result};

/// A collection or search results URL, normalized so pages can be addressed by suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUrl {
    url: String,
    mode: SourceMode,
}

impl SourceUrl {
    /// Parse a caller-supplied URL.
    ///
    /// A missing scheme becomes `https://`. Query and fragment are dropped and the path
    /// gets a trailing `/`, so `page_url(n)` is the root followed by `n`.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidSource("URL is empty".to_string()));
        }

        let with_scheme = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("https://{}", trimmed)
        };

        let mut url = Url::parse(&with_scheme)?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidSource(format!("'{}' has no path", trimmed)));
        }

        url.set_query(None);
        url.set_fragment(None);
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let mode = SourceMode::from_path(url.path());

        Ok(Self {
            url: url.to_string(),
            mode,
        })
    }

    /// The normalized root URL.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn mode(&self) -> SourceMode {
        self.mode
    }

    /// URL of a 1-based page: the root itself for page 1, root + number otherwise.
    pub fn page_url(&self, page: u32) -> String {
        if page > 1 {
            format!("{}{}", self.url, page)
        } else {
            self.url.clone()
        }
    }
}

impl fmt::Display for SourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
