//! Configuration module for the svgrepo-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Source URL modes
//! - Configuration and input validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{default_config_path, Config, HttpConfig, OptionsConfig};
pub use modes::SourceMode;
pub use validation::{
    collection_slug, collection_words, sanitize_directory_input, validate_config,
    validate_source_url,
};
