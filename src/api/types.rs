//! Fetched response types.

use reqwest::header::{HeaderMap, CONTENT_TYPE};

/// The only content type accepted for icon assets.
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// A successful GET response, fully buffered.
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    pub url: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl FetchedResponse {
    /// The declared `content-type` header, if present and valid UTF-8.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }

    /// Whether the declared content type is exactly the SVG media type.
    pub fn is_svg(&self) -> bool {
        self.content_type() == Some(SVG_CONTENT_TYPE)
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
