//! Output module for console output, prompts and progress.
//!
//! Provides:
//! - Colored console output
//! - Yes/no confirmation prompts
//! - Progress bars
//! - Run summaries

pub mod console;
pub mod progress;
pub mod prompt;
pub mod stats;

pub use console::{print_banner, print_error, print_info, print_success, print_warning};
pub use progress::{create_page_bar, NoProgress, ProgressFactory, ProgressReporter, TerminalProgress};
pub use prompt::{Confirm, Confirmation, FixedConfirm, TerminalConfirm};
pub use stats::print_run_summary;
