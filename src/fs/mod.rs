//! Filesystem module.
//!
//! Provides:
//! - Destination paths and output directory preparation
//! - Asset file naming

pub mod naming;
pub mod paths;

pub use naming::{asset_file_name, sanitize_filename};
pub use paths::{destination_entry, prepare_output_dir, DirPreparation};
