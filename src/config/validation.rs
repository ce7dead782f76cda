//! Configuration and input validation logic.

use std::path::PathBuf;
use std::sync::LazyLock;

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;
use url::Url;

/// Accepted shape of a source URL.
static SOURCE_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?svgrepo\.com/(collection|vectors)/.+").unwrap()
});

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.http.user_agent.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "user_agent".to_string(),
            message: "User agent cannot be empty".to_string(),
        });
    }

    if config.options.search_page_limit == 0 {
        return Err(Error::ConfigValidation {
            field: "search_page_limit".to_string(),
            message: "Search page limit must be at least 1".to_string(),
        });
    }

    if let Err(e) = Url::parse(&config.options.base_url) {
        return Err(Error::ConfigValidation {
            field: "base_url".to_string(),
            message: format!("'{}' is not a valid URL: {}", config.options.base_url, e),
        });
    }

    Ok(())
}

/// Check that a URL points at an SVG Repo collection or search results page.
pub fn validate_source_url(input: &str) -> Result<()> {
    if SOURCE_URL_PATTERN.is_match(input.trim()) {
        Ok(())
    } else {
        Err(Error::InvalidSource(format!(
            "'{}' is not an SVG Repo collection or search URL",
            input
        )))
    }
}

/// Words of the collection (or search term) slug, e.g. `["interface", "icons"]`.
///
/// Returns an empty list when the URL has no `collection/` or `vectors/` segment.
pub fn collection_words(input: &str) -> Vec<String> {
    let with_scheme = if input.contains("://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    };

    let Ok(url) = Url::parse(&with_scheme) else {
        return Vec::new();
    };

    let Some(mut segments) = url.path_segments() else {
        return Vec::new();
    };

    while let Some(segment) = segments.next() {
        if segment == "collection" || segment == "vectors" {
            return segments
                .next()
                .filter(|slug| !slug.is_empty())
                .map(|slug| slug.split('-').map(str::to_string).collect())
                .unwrap_or_default();
        }
    }

    Vec::new()
}

/// Slug of the collection (or search term), if the URL has one.
pub fn collection_slug(input: &str) -> Option<String> {
    let words = collection_words(input);
    if words.is_empty() {
        None
    } else {
        Some(words.join("-"))
    }
}

/// Clean a directory typed or pasted by a user.
///
/// Trims whitespace and one pair of surrounding quotes. An empty input yields `None`.
pub fn sanitize_directory_input(input: &str) -> Result<Option<PathBuf>> {
    let trimmed = input.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(trimmed)
        .trim();

    if unquoted.is_empty() {
        return Ok(None);
    }

    if unquoted.contains('\0') {
        return Err(Error::ConfigValidation {
            field: "directory".to_string(),
            message: "Null bytes not allowed in path".to_string(),
        });
    }

    if unquoted.chars().any(char::is_whitespace) {
        return Err(Error::ConfigValidation {
            field: "directory".to_string(),
            message: format!("Spaces are not supported in the output path: '{}'", unquoted),
        });
    }

    Ok(Some(PathBuf::from(unquoted)))
}
