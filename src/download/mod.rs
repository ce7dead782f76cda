//! Download module for icon scraping.
//!
//! This module provides:
//! - Run state tracking
//! - Per-asset downloading
//! - Page iteration for collections and search results
//! - Collections index listing

pub mod assets;
pub mod collections;
pub mod pagination;
pub mod state;

pub use assets::{download_all, download_asset, AssetOutcome};
pub use collections::{collections_index_url, list_collections};
pub use pagination::{PaginationDriver, RunOutcome};
pub use state::DownloadState;
