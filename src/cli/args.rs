//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

/// SVG Repo icon downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "svgrepo-downloader",
    version,
    about = "Download SVG icons from SVG Repo",
    long_about = "A CLI tool to download every SVG of an SVG Repo collection or search results page.\n\n\
                  Icons are saved as <id>-<name>.svg; files already present are skipped."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// User agent sent with every request.
    #[arg(short = 'a', long = "user-agent", env = "SVGREPO_USER_AGENT", global = true)]
    pub user_agent: Option<String>,

    /// Request timeout in seconds (no timeout by default).
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Maximum number of search result pages to visit.
    #[arg(long, env = "SVGREPO_SEARCH_PAGE_LIMIT", global = true)]
    pub search_page_limit: Option<u32>,

    /// Hide progress bars.
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show information about skipped downloads.
    #[arg(long, global = true)]
    pub show_skipped: bool,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Download every icon of a collection or search results URL.
    Download {
        /// Collection (…/collection/<slug>/) or search (…/vectors/<term>/) URL.
        url: String,

        /// Output directory. Defaults to ./<slug>.
        #[arg(short = 'd', long = "directory")]
        directory: Option<String>,

        /// Replace an existing output directory without asking.
        #[arg(short, long)]
        yes: bool,
    },

    /// Print icon URLs instead of downloading them.
    List {
        /// Collection or search URL.
        url: String,

        /// Prefix for each line, separated from the URL by a tab.
        #[arg(short, long)]
        label: Option<String>,
    },

    /// Print the collections of a category.
    Collections {
        /// Category name.
        #[arg(default_value = "all")]
        category: String,

        /// Also list the icons of every collection, labelled by collection slug.
        #[arg(long)]
        icons: bool,
    },
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(user_agent) = &self.user_agent {
            config.http.user_agent = user_agent.clone();
        }

        if let Some(timeout) = self.timeout {
            config.http.timeout_seconds = Some(timeout);
        }

        if let Some(limit) = self.search_page_limit {
            config.options.search_page_limit = limit;
        }

        // Boolean flags (only override if set to non-default)
        if self.quiet {
            config.options.show_progress = false;
        }

        if self.show_skipped {
            config.options.show_skipped_downloads = true;
        }
    }
}
