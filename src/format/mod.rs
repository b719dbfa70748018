// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The self-describing binary record format.
//!
//! A record file is a flat run of fixed-schema records followed by a 36-byte
//! footer. The footer is the only metadata in the file: nine big-endian
//! 4-byte signed integers giving the byte width of each text field. There is
//! no magic number, no version byte, no per-record length prefix, and no
//! separators: the format is fixed by the paired external producer and must
//! stay byte-compatible with it.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ record 0                                                 │
//! │   9 text runs (widths from footer, same for every record)│
//! │   4 × i32 big-endian (issued, retired, remaining, year)  │
//! ├──────────────────────────────────────────────────────────┤
//! │ record 1 … record N-1                                    │
//! ├──────────────────────────────────────────────────────────┤
//! │ FOOTER (36 bytes): 9 × i32 big-endian text field widths  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Because the metadata trails the data, the format cannot be parsed from a
//! stream of unknown length: you must be able to ask for the total length
//! before decoding anything. That is the price of a producer that only knows
//! its column widths after it has seen every row.
//!
//! The field order lives once, in [`TEXT_FIELDS`] and [`INT_FIELDS`]. Footer
//! decoding, record decoding, and width fitting all index through these
//! constants, so the order cannot drift between read and write paths.

mod footer;
mod layout;
mod record;

pub use footer::FieldWidths;
pub use layout::RecordLayout;
pub use record::Record;

/// Number of variable-width text fields per record.
pub const TEXT_FIELD_COUNT: usize = 9;

/// Number of fixed 4-byte integer fields per record.
pub const INT_FIELD_COUNT: usize = 4;

/// Bytes occupied by the integer fields of one record.
pub const INT_BYTES: u64 = 4 * INT_FIELD_COUNT as u64;

/// Footer length in bytes: one 4-byte width per text field.
pub const FOOTER_LEN: u64 = 4 * TEXT_FIELD_COUNT as u64;

/// Text field names, in on-disk order.
pub const TEXT_FIELDS: [&str; TEXT_FIELD_COUNT] = [
    "id",
    "name",
    "status",
    "scope",
    "kind",
    "methodology",
    "region",
    "country",
    "subregion",
];

/// Integer field names, in on-disk order.
pub const INT_FIELDS: [&str; INT_FIELD_COUNT] = ["issued", "retired", "remaining", "first_year"];
