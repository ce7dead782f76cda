//! SVG Repo Downloader - bulk download of SVG Repo icon collections.
//!
//! This library scrapes a collection or search results page, walks its pages in order and
//! saves every icon as `<output>/<id>-<name>.svg`.
//!
//! # Features
//!
//! - Collection and search result pagination
//! - Skips icons already present in the output directory
//! - Per-icon failures are logged, never fatal
//! - Dry-run listing of icon URLs
//! - Collections index listing
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use svgrepo_downloader::{
//!     Config, FixedConfirm, Confirmation, NoProgress, PaginationDriver, RunOutcome, SourceUrl,
//!     SvgRepoClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let client = SvgRepoClient::new(&config.http)?;
//!     let driver = PaginationDriver::new(&client, &config.options, &NoProgress);
//!
//!     let source = SourceUrl::parse("https://www.svgrepo.com/collection/dazzle-line-icons/")?;
//!     let confirm = FixedConfirm(Confirmation::Yes);
//!     if let RunOutcome::Completed(state) =
//!         driver.download(&source, Path::new("icons"), &confirm).await?
//!     {
//!         println!("{} icons downloaded", state.downloaded);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use api::SvgRepoClient;
pub use catalog::{AssetLink, SourceUrl};
pub use config::{Config, SourceMode};
pub use download::{DownloadState, PaginationDriver, RunOutcome};
pub use error::{AssetError, Error, Result};
pub use output::{Confirm, Confirmation, FixedConfirm, NoProgress, ProgressFactory, ProgressReporter};
