//! Progress reporting.

use indicatif::{ProgressBar, ProgressStyle};

/// Receives one unit per asset written. Observational only.
pub trait ProgressReporter {
    fn advance(&self);

    /// Run `log` with any bar hidden, so log lines do not tear the bar.
    fn suspend(&self, log: &mut dyn FnMut()) {
        log();
    }

    fn finish(&self) {}
}

/// Hands out one reporter per page batch.
pub trait ProgressFactory {
    fn page_batch(&self, page: u32, total_pages: u32, assets: usize) -> Box<dyn ProgressReporter>;
}

impl ProgressReporter for ProgressBar {
    fn advance(&self) {
        self.inc(1);
    }

    fn suspend(&self, log: &mut dyn FnMut()) {
        ProgressBar::suspend(self, || log());
    }

    fn finish(&self) {
        ProgressBar::finish(self);
    }
}

/// Create a progress bar for one page of assets.
pub fn create_page_bar(page: u32, total_pages: u32, assets: u64) -> ProgressBar {
    let bar = ProgressBar::new(assets);
    let template = format!(
        "Collection on page {}/{} [{{bar:40.cyan/blue}}] {{percent}}% {{eta}}",
        page, total_pages
    );
    match ProgressStyle::default_bar().template(&template) {
        Ok(style) => bar.set_style(style.progress_chars("#>-")),
        Err(e) => tracing::debug!("Invalid progress template: {}", e),
    }
    bar
}

/// Terminal progress bars, or hidden ones when disabled.
#[derive(Debug, Clone, Copy)]
pub struct TerminalProgress {
    visible: bool,
}

impl TerminalProgress {
    pub fn new(visible: bool) -> Self {
        Self { visible }
    }
}

impl ProgressFactory for TerminalProgress {
    fn page_batch(&self, page: u32, total_pages: u32, assets: usize) -> Box<dyn ProgressReporter> {
        if self.visible {
            Box::new(create_page_bar(page, total_pages, assets as u64))
        } else {
            Box::new(ProgressBar::hidden())
        }
    }
}

/// Discards all progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn advance(&self) {}
}

impl ProgressFactory for NoProgress {
    fn page_batch(&self, _page: u32, _total_pages: u32, _assets: usize) -> Box<dyn ProgressReporter> {
        Box::new(NoProgress)
    }
}
