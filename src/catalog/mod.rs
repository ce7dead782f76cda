//! Catalog pages and the links found on them.
//!
//! Provides:
//! - Source URL parsing and page addressing
//! - Asset link naming
//! - HTML extraction of page counts, asset links and collection links

pub mod link;
pub mod parser;
pub mod source;

pub use link::AssetLink;
pub use parser::{extract_asset_links, extract_collection_links, extract_page_count};
pub use source::SourceUrl;
