//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Transport timeout in seconds. Unset means requests may block indefinitely.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Run options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Site root, used to build collections index URLs.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Upper bound on pages visited for search results.
    #[serde(default = "default_search_page_limit")]
    pub search_page_limit: u32,

    /// Whether to log assets skipped because they already exist.
    #[serde(default)]
    pub show_skipped_downloads: bool,

    /// Whether to draw per-page progress bars.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_seconds: None,
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            search_page_limit: default_search_page_limit(),
            show_skipped_downloads: false,
            show_progress: true,
        }
    }
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36".to_string()
}

fn default_base_url() -> String {
    "https://www.svgrepo.com".to_string()
}

fn default_search_page_limit() -> u32 {
    99
}

fn default_true() -> bool {
    true
}

/// Platform config file location (`<config dir>/config.toml`), if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "svgrepo", "svgrepo-downloader")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load from `path` if given, else from the default location when it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                tracing::debug!("Loading configuration from {}", path.display());
                Self::load(&path)
            }
            _ => {
                tracing::debug!("No configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }
}
