//! icon-extract: flat name-list generator for Material Symbols headers
//!
//! Scans a C header containing `#define ICON_MS_* "..."` macro
//! definitions and writes the identifier names, one per line and in
//! encounter order, to a text file. Duplicates are kept; lines that do
//! not match the macro shape are skipped silently.
//!
//! # Example Usage
//!
//! ```no_run
//! use icon_extract::extract::{self, INPUT_FILE, OUTPUT_FILE};
//!
//! let stats = extract::extract_icon_names(INPUT_FILE, OUTPUT_FILE).unwrap();
//! println!("extracted {} names", stats.names_written);
//! ```

pub mod extract;
pub mod output;

// Re-export commonly used types
pub use extract::{ExtractStats, INPUT_FILE, OUTPUT_FILE, extract_icon_names, match_icon_name};
