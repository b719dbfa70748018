// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Record layout derivation.
//!
//! Pure arithmetic from footer widths and total file length. The invariant
//! `record_count * record_len + 36 == file_len` must hold exactly; a file
//! with trailing bytes that do not make a whole record is corrupt and is
//! rejected rather than silently truncated.

use crate::error::{Error, Result};

use super::footer::FieldWidths;
use super::{FOOTER_LEN, INT_BYTES};

/// Derived byte layout of a record file: record length and record count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLayout {
    record_len: u64,
    record_count: u64,
}

impl RecordLayout {
    /// Derive the layout from footer widths and total file length.
    pub fn derive(widths: &FieldWidths, file_len: u64) -> Result<Self> {
        if file_len < FOOTER_LEN {
            return Err(Error::FileTooShort { len: file_len });
        }
        if widths.text_bytes() == 0 {
            return Err(Error::EmptySchema);
        }

        let record_len = INT_BYTES + widths.text_bytes();
        let data_len = file_len - FOOTER_LEN;
        let trailing = data_len % record_len;
        if trailing != 0 {
            return Err(Error::PartialRecord {
                trailing,
                record_len,
            });
        }

        Ok(Self {
            record_len,
            record_count: data_len / record_len,
        })
    }

    /// Total bytes occupied by one record.
    pub fn record_len(&self) -> u64 {
        self.record_len
    }

    /// Number of whole records in the file.
    pub fn record_count(&self) -> u64 {
        self.record_count
    }

    /// Byte offset of record `index` from the start of the file.
    pub fn offset_of(&self, index: u64) -> u64 {
        index * self.record_len
    }
}
