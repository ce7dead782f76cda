//! Error types for the svgrepo-downloader application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
///
/// Everything except [`Error::Asset`] is fatal for a run.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Invalid source URL: {0}")]
    InvalidSource(String),

    // Network errors
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    // Parse errors
    #[error("Could not determine page count from {url}")]
    PageCount { url: String },

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    // File system errors
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // Per-asset errors
    #[error(transparent)]
    Asset(#[from] AssetError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Whether this error only affects a single asset.
    pub fn is_skippable(&self) -> bool {
        matches!(self, Error::Asset(_))
    }
}

/// A failure that skips one asset without stopping the run.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Download failed: {url} ({message})")]
    Fetch { url: String, message: String },

    #[error("Response not svg file: {url} (content-type: {content_type})")]
    NotSvg { url: String, content_type: String },

    #[error("Unusable asset link: {url} ({message})")]
    InvalidLink { url: String, message: String },

    #[error("Failed to write {} for {url}: {source}", .path.display())]
    Write {
        url: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AssetError {
    /// The asset link this failure belongs to.
    pub fn url(&self) -> &str {
        match self {
            AssetError::Fetch { url, .. }
            | AssetError::NotSvg { url, .. }
            | AssetError::InvalidLink { url, .. }
            | AssetError::Write { url, .. } => url,
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    /// Also used when the user declines to continue.
    pub const SUCCESS: i32 = 0;
    pub const NETWORK_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const PARSE_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
