//! HTTP access to SVG Repo.
//!
//! This module provides:
//! - The page/asset HTTP client
//! - Fetched response types

pub mod client;
pub mod types;

pub use client::SvgRepoClient;
pub use types::{FetchedResponse, SVG_CONTENT_TYPE};
