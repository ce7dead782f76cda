//! Download state tracking.

/// Counters for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadState {
    /// Page count used for iteration (a ceiling in search mode).
    pub total_pages: u32,
    /// Pages fetched, including the empty page that ended iteration.
    pub pages_visited: u32,
    pub links_found: u64,
    pub downloaded: u64,
    /// Assets skipped because the destination file already existed.
    pub skipped_existing: u64,
    /// Assets skipped because of a fetch, validation or write failure.
    pub failed: u64,
    /// Links written in listing mode.
    pub listed: u64,
}

impl DownloadState {
    pub fn new(total_pages: u32) -> Self {
        Self {
            total_pages,
            ..Default::default()
        }
    }

    pub fn increment_downloaded(&mut self) {
        self.downloaded += 1;
    }

    pub fn increment_skipped(&mut self) {
        self.skipped_existing += 1;
    }

    pub fn increment_failed(&mut self) {
        self.failed += 1;
    }

    /// Assets for which a fetch was issued.
    pub fn attempted(&self) -> u64 {
        self.downloaded + self.failed
    }
}
