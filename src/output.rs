//! User-facing output utilities for clean, colored terminal messages
//!
//! These helpers print to stderr without internal logging noise
//! (timestamps, log levels, crate names). The extraction summary
//! itself goes to stdout and does not pass through here.

use owo_colors::OwoColorize;

/// Display an error message to the user in red with padding
///
/// Format: blank line + red message + blank line
///
/// # Example
/// ```ignore
/// output::error("Error: Failed to open input header MaterialSymbols.h");
/// ```
pub fn error(message: &str) {
    eprintln!("\n{}\n", message.red());
}
