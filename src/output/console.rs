//! Console output utilities.
//!
//! Everything goes to stderr; stdout is reserved for link listings.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    eprintln!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    eprintln!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     SVG Repo Downloader                               ║
║     Download SVGs from https://www.svgrepo.com/       ║
╚═══════════════════════════════════════════════════════╝
"#;
    eprintln!("{}", style(banner).cyan());
}
