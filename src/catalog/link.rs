//! Asset links.

use std::fmt;

use url::Url;

use crate::error::AssetError;
use crate::fs::naming::asset_file_name;

/// One icon's remote URL, as found in the page markup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetLink(String);

impl AssetLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The path segment directly containing the asset file.
    pub fn asset_id(&self) -> Result<String, AssetError> {
        self.segments().map(|(id, _)| id)
    }

    /// Local file name: `<assetId>-<basename>`.
    pub fn file_name(&self) -> Result<String, AssetError> {
        let (id, basename) = self.segments()?;
        asset_file_name(&id, &basename).map_err(|e| self.invalid(e.to_string()))
    }

    fn segments(&self) -> Result<(String, String), AssetError> {
        let url = Url::parse(&self.0).map_err(|e| self.invalid(e.to_string()))?;
        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.collect())
            .unwrap_or_default();

        match segments.as_slice() {
            [.., id, basename] if !id.is_empty() && !basename.is_empty() => {
                Ok((id.to_string(), basename.to_string()))
            }
            _ => Err(self.invalid("expected .../<id>/<file> path".to_string())),
        }
    }

    fn invalid(&self, message: String) -> AssetError {
        AssetError::InvalidLink {
            url: self.0.clone(),
            message,
        }
    }
}

impl fmt::Display for AssetLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetLink {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}
