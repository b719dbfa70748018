// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display helpers for the recfile CLI.
//!
//! Plain 16-color ANSI, nothing fancy: a section header, a record row, and a
//! key/value line for layout dumps. Respects `NO_COLOR` and falls back to
//! plain text when stdout is not a TTY, so `recfile show | grep` behaves.

use recfile::format::TEXT_FIELDS;
use recfile::Record;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const CYAN: &str = "\x1b[36m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply color if TTY, otherwise return plain text
pub fn color(c: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", c, text, RESET)
    } else {
        text.to_string()
    }
}

/// Print a section header: "── First five records ──…"
pub fn heading(label: &str) {
    let styled = color(&format!("{}{}", BOLD, CYAN), label);
    println!("── {} {}", styled, "─".repeat(50usize.saturating_sub(label.len())));
}

/// One record as a display row.
///
/// Field values are stored padded; trim only for display, the underlying
/// data is untouched.
pub fn record_row(record: &Record) -> String {
    format!(
        "  [{}] {}  issued {:>10}  retired {:>10}  since {}",
        color(GREEN, record.id.trim_end()),
        record.name.trim_end(),
        record.issued,
        record.retired,
        record.first_year,
    )
}

/// Key/value line for inspect output.
pub fn field_line(name: &str, value: &str) -> String {
    // Pad before coloring so escape bytes don't skew the column
    format!("  {} {}", color(YELLOW, &format!("{:<12}", name)), value)
}

/// Footer widths, one line per field in on-disk order.
pub fn widths_lines(widths: &[u32; 9]) -> Vec<String> {
    TEXT_FIELDS
        .iter()
        .zip(widths)
        .map(|(field, w)| field_line(field, &format!("{} bytes", w)))
        .collect()
}
