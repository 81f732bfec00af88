//! Colored output for install progress reporting
//!
//! Uses owo-colors for terminal colors.

use owo_colors::OwoColorize;

/// Print an action header (blue, bold)
/// Example: "==> Installing sallycms/image-resize"
pub fn action(message: &str) {
    println!("{} {}", "==>".blue().bold(), message.bold());
}

/// Print a sub-action (cyan arrow)
/// Example: "  -> sync assets"
pub fn sub_action(step: &str) {
    println!("  {} {}", "->".cyan(), step);
}

/// Print a detail line (dimmed)
/// Example: "     copying assets to data/dyn/public/vendor/pkg"
pub fn detail(message: &str) {
    println!("     {}", message.dimmed());
}

/// Print a success message (green)
/// Example: "==> sallycms/image-resize installed"
pub fn success(message: &str) {
    println!("{} {}", "==>".green().bold(), message.green());
}

/// Print a warning message (yellow)
pub fn warning(message: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), message.yellow());
}
