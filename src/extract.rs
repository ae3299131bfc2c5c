//! Single-pass extraction of icon-name macros from a header file
//!
//! Reads the input header line by line, matches each line against an
//! anchored `#define ICON_MS_*` pattern, and writes every captured
//! identifier to the output file in encounter order. One linear pass,
//! no state carried between lines.
//!
//! # Matching Rules
//!
//! A line contributes a name only if it starts with `#define` at
//! column zero (leading whitespace disqualifies it), followed by
//! whitespace, an `ICON_MS_[A-Za-z0-9_]+` identifier, whitespace, and
//! the opening `"` of the string literal. Everything else is skipped
//! without a warning: a malformed or empty header yields an empty
//! output file and a count of zero, which is not an error.

use anyhow::{Context, Result};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Instant;

/// Fixed relative path of the header scanned by each run
pub const INPUT_FILE: &str = "MaterialSymbols.h";

/// Fixed relative path of the name list produced by each run (fully overwritten)
pub const OUTPUT_FILE: &str = "icon_names.txt";

// Compiled once on first use (the pattern is a literal, compilation cannot fail)
static ICON_PATTERN: OnceLock<Regex> = OnceLock::new();

fn icon_pattern() -> &'static Regex {
    ICON_PATTERN.get_or_init(|| {
        Regex::new(r#"^#define\s+(ICON_MS_[A-Za-z0-9_]+)\s+""#)
            .expect("icon macro pattern should compile")
    })
}

/// Summary of a completed extraction pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractStats {
    /// Total lines read from the input header
    pub lines_scanned: usize,
    /// Icon names written to the output file, duplicates included
    pub names_written: usize,
}

/// Match a single header line against the icon macro pattern
///
/// Returns the captured identifier (a slice of `line`) for a line of
/// the form `#define ICON_MS_<suffix> "<value>"`, or `None` for any
/// other line. The match is anchored at the start of the line, so
/// commented-out or indented definitions never match.
///
/// # Example
/// ```
/// use icon_extract::extract::match_icon_name;
///
/// assert_eq!(
///     match_icon_name("#define ICON_MS_HOME \"\\uf000\""),
///     Some("ICON_MS_HOME")
/// );
/// assert_eq!(match_icon_name("#define ICON_FA_HOME \"x\""), None);
/// ```
pub fn match_icon_name(line: &str) -> Option<&str> {
    icon_pattern()
        .captures(line)
        .map(|caps| caps.get(1).expect("pattern has one capture group").as_str())
}

/// Run the extraction pass: scan `input` and write the name list to `output`
///
/// Opens the input for buffered reading and the output for buffered
/// writing (truncating any previous content), then performs one
/// sequential scan. Matched identifiers are written in encounter
/// order, one per line; duplicates are retained.
///
/// # Errors
///
/// Fails if the input cannot be opened or read, or if the output
/// cannot be created or written. Errors propagate immediately with the
/// offending path attached; nothing is retried. File handles are
/// released on every exit path, but a failed run makes no guarantee
/// about partially written output.
pub fn extract_icon_names(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<ExtractStats> {
    let input = input.as_ref();
    let output = output.as_ref();
    let start = Instant::now();

    let reader = BufReader::new(
        File::open(input).with_context(|| format!("Failed to open input header {}", input.display()))?,
    );
    let mut writer = BufWriter::new(
        File::create(output)
            .with_context(|| format!("Failed to create output file {}", output.display()))?,
    );

    let mut lines_scanned = 0;
    let mut names_written = 0;

    for line in reader.lines() {
        let line =
            line.with_context(|| format!("Failed to read line from {}", input.display()))?;
        lines_scanned += 1;

        if let Some(name) = match_icon_name(&line) {
            writeln!(writer, "{}", name)
                .with_context(|| format!("Failed to write to {}", output.display()))?;
            names_written += 1;
        }
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush output file {}", output.display()))?;

    log::debug!(
        "Scanned {} lines, extracted {} names in {:?}",
        lines_scanned,
        names_written,
        start.elapsed()
    );

    Ok(ExtractStats { lines_scanned, names_written })
}
