//! Terminal output helpers for the run header and fatal errors.

use log::info;
use owo_colors::OwoColorize;

/// Check if color should be used (respects NO_COLOR environment variable)
pub fn should_use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print a section header
pub fn print_section(title: &str) {
    info!("");
    if should_use_color() {
        info!("===== {} =====", title.to_uppercase().cyan());
    } else {
        info!("===== {} =====", title.to_uppercase());
    }
    info!("");
}

/// Print a status line (key-value pair)
pub fn print_status(label: &str, value: &str) {
    const LABEL_WIDTH: usize = 12;
    let padding = LABEL_WIDTH.saturating_sub(label.chars().count()).max(1);

    if should_use_color() {
        info!("  {}:{}{}", label.bold(), " ".repeat(padding), value);
    } else {
        info!("  {}:{}{}", label, " ".repeat(padding), value);
    }
}

/// Print a fatal error to stderr. Not routed through the logger so it is
/// shown whatever RUST_LOG says.
pub fn print_fatal(message: &str) {
    if should_use_color() {
        eprintln!("{} {}", "Error:".red().bold(), message);
    } else {
        eprintln!("Error: {message}");
    }
}
