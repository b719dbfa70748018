// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for record file access.
//!
//! Two failure classes: `Io` wraps anything the underlying handle reports,
//! everything else is a structural violation of the format. Both abort the
//! current operation and carry enough context (offset, expected byte count)
//! to diagnose a bad file without a hex editor.
//!
//! A search that finds nothing is NOT an error. It comes back as `Ok(None)`
//! from [`RecordFile::search`](crate::RecordFile::search), because an absent
//! key is a perfectly normal answer to a perfectly normal question.

use std::io;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while opening or reading a record file.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying handle failed to seek or read.
    #[error("io: {0}")]
    Io(#[from] io::Error),

    /// File is too short to hold the 36-byte trailing footer.
    #[error("file too short for footer: {len} bytes, need at least 36")]
    FileTooShort { len: u64 },

    /// A footer width decoded to a negative value.
    #[error("negative width {width} for field '{field}'")]
    NegativeWidth { field: &'static str, width: i32 },

    /// All nine text widths are zero; such a schema describes nothing.
    #[error("degenerate schema: all text field widths are zero")]
    EmptySchema,

    /// The data region is not a whole number of records.
    #[error("file does not hold a whole number of records: {trailing} trailing bytes at record length {record_len}")]
    PartialRecord { trailing: u64, record_len: u64 },

    /// A record read hit end-of-file before `expected` bytes arrived.
    #[error("truncated record at offset {offset}: expected {expected} more bytes")]
    Truncated { offset: u64, expected: usize },

    /// A text field held bytes that are not valid UTF-8.
    #[error("field '{field}' at offset {offset} is not valid UTF-8")]
    InvalidText { field: &'static str, offset: u64 },

    /// Encode-side: a text value does not match its declared width.
    #[error("field '{field}' is {actual} bytes but the schema declares {expected}")]
    WidthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl Error {
    /// True for structural format violations (as opposed to plain I/O trouble).
    pub fn is_format(&self) -> bool {
        !matches!(self, Error::Io(_))
    }
}
