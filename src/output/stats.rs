//! Statistics reporting.

use console::style;

use crate::download::DownloadState;

/// Print statistics for a finished download run.
pub fn print_run_summary(state: &DownloadState) {
    eprintln!();
    eprintln!("{}", style("Statistics:").bold());
    eprintln!("  Pages:      {}", state.pages_visited);
    eprintln!("  Icons:      {}", state.links_found);
    eprintln!("  Downloaded: {}", style(state.downloaded).green());
    eprintln!("  Skipped:    {} (already present)", state.skipped_existing);
    if state.failed > 0 {
        eprintln!("  Failed:     {}", style(state.failed).red());
    }
}
