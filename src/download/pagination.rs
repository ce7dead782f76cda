//! Page iteration for collections and search results.

use std::io::Write;
use std::path::Path;

use crate::api::SvgRepoClient;
use crate::catalog::{extract_asset_links, extract_page_count, SourceUrl};
use crate::config::{OptionsConfig, SourceMode};
use crate::download::assets::download_all;
use crate::download::state::DownloadState;
use crate::error::{Error, Result};
use crate::fs::{prepare_output_dir, DirPreparation};
use crate::output::{Confirm, ProgressFactory};

/// How a download run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(DownloadState),
    /// The user declined to replace the existing output directory.
    Aborted,
}

/// Where the links of each page go.
enum Sink<'s> {
    Download(&'s Path),
    List {
        label: &'s str,
        out: &'s mut dyn Write,
    },
}

/// Walks the pages of a source in order, one at a time.
pub struct PaginationDriver<'a> {
    client: &'a SvgRepoClient,
    progress: &'a dyn ProgressFactory,
    search_page_limit: u32,
    show_skipped: bool,
}

impl<'a> PaginationDriver<'a> {
    pub fn new(
        client: &'a SvgRepoClient,
        options: &OptionsConfig,
        progress: &'a dyn ProgressFactory,
    ) -> Self {
        Self {
            client,
            progress,
            search_page_limit: options.search_page_limit,
            show_skipped: options.show_skipped_downloads,
        }
    }

    /// Download every icon of `source` into `output_dir`.
    ///
    /// The root page is fetched before the directory is touched, so an unreachable source
    /// leaves the filesystem unchanged.
    pub async fn download(
        &self,
        source: &SourceUrl,
        output_dir: &Path,
        confirm: &dyn Confirm,
    ) -> Result<RunOutcome> {
        let total_pages = self.total_pages(source).await?;

        match prepare_output_dir(output_dir, confirm)? {
            DirPreparation::Declined => return Ok(RunOutcome::Aborted),
            DirPreparation::Created | DirPreparation::Recreated => {}
        }

        let state = self
            .run(source, total_pages, Sink::Download(output_dir))
            .await?;
        Ok(RunOutcome::Completed(state))
    }

    /// Write `<label>\t<link>` for every icon of `source`, without downloading.
    pub async fn list(
        &self,
        source: &SourceUrl,
        label: Option<&str>,
        out: &mut dyn Write,
    ) -> Result<DownloadState> {
        let total_pages = self.total_pages(source).await?;
        let sink = Sink::List {
            label: label.unwrap_or(""),
            out,
        };
        self.run(source, total_pages, sink).await
    }

    /// Fetch the root page and decide how many pages to visit.
    async fn total_pages(&self, source: &SourceUrl) -> Result<u32> {
        let root = self.client.fetch_page(source.as_str()).await?;

        match source.mode() {
            SourceMode::Search => Ok(self.search_page_limit),
            SourceMode::Catalog => extract_page_count(&root)?.ok_or_else(|| Error::PageCount {
                url: source.to_string(),
            }),
        }
    }

    async fn run(
        &self,
        source: &SourceUrl,
        total_pages: u32,
        mut sink: Sink<'_>,
    ) -> Result<DownloadState> {
        let mut state = DownloadState::new(total_pages);

        for page in 1..=total_pages {
            let page_url = source.page_url(page);
            let html = self.client.fetch_page(&page_url).await?;
            let links = extract_asset_links(&html)?;
            state.pages_visited += 1;

            if links.is_empty() {
                tracing::debug!("No icons on page {}, stopping", page);
                break;
            }

            tracing::info!("Page {}/{}: {} icons", page, total_pages, links.len());
            state.links_found += links.len() as u64;

            match &mut sink {
                Sink::List { label, out } => {
                    for link in &links {
                        writeln!(out, "{}\t{}", label, link)?;
                        state.listed += 1;
                    }
                }
                Sink::Download(output_dir) => {
                    let progress = self.progress.page_batch(page, total_pages, links.len());
                    download_all(
                        self.client,
                        &links,
                        *output_dir,
                        progress.as_ref(),
                        self.show_skipped,
                        &mut state,
                    )
                    .await;
                }
            }
        }

        Ok(state)
    }
}
