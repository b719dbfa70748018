// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The trailing width footer.
//!
//! `FieldWidths` is read exactly once per file and shared read-only by every
//! downstream operation. Widths of zero are legal (an empty column), negative
//! widths are not: a negative value in the footer means the file was never
//! written by the paired producer.

use std::io::{Read, Seek, SeekFrom, Write};

use log::debug;

use crate::error::{Error, Result};

use super::record::Record;
use super::{FOOTER_LEN, TEXT_FIELDS, TEXT_FIELD_COUNT};

/// Byte widths of the nine text fields, in on-disk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldWidths([u32; TEXT_FIELD_COUNT]);

impl FieldWidths {
    pub fn new(widths: [u32; TEXT_FIELD_COUNT]) -> Self {
        Self(widths)
    }

    /// Decode the footer from a handle of known total length.
    ///
    /// Seeks to `file_len − 36` and reads nine consecutive big-endian `i32`
    /// widths. The handle's cursor position afterwards is unspecified.
    pub fn read<R: Read + Seek>(handle: &mut R, file_len: u64) -> Result<Self> {
        if file_len < FOOTER_LEN {
            return Err(Error::FileTooShort { len: file_len });
        }
        handle.seek(SeekFrom::Start(file_len - FOOTER_LEN))?;

        let mut buf = [0u8; FOOTER_LEN as usize];
        handle.read_exact(&mut buf)?;

        let mut widths = [0u32; TEXT_FIELD_COUNT];
        for (i, chunk) in buf.chunks_exact(4).enumerate() {
            let raw = i32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            if raw < 0 {
                return Err(Error::NegativeWidth {
                    field: TEXT_FIELDS[i],
                    width: raw,
                });
            }
            widths[i] = raw as u32;
        }
        debug!("footer widths: {:?}", widths);
        Ok(Self(widths))
    }

    /// Encode the footer. The writer must call this after the last record.
    pub fn write<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        for &width in &self.0 {
            w.write_all(&(width as i32).to_be_bytes())?;
        }
        Ok(())
    }

    pub fn widths(&self) -> &[u32; TEXT_FIELD_COUNT] {
        &self.0
    }

    /// Total bytes the text fields of one record occupy.
    pub fn text_bytes(&self) -> u64 {
        self.0.iter().map(|&w| u64::from(w)).sum()
    }

    /// Compute the narrowest widths that fit every record.
    ///
    /// This is what the paired producer does: scan all rows, take the maximum
    /// byte length per column. Records narrower than the fitted width must be
    /// padded before encoding (see [`Record::padded`]).
    pub fn fit(records: &[Record]) -> Self {
        let mut widths = [0u32; TEXT_FIELD_COUNT];
        for record in records {
            for (slot, value) in widths.iter_mut().zip(record.text_fields()) {
                *slot = (*slot).max(value.len() as u32);
            }
        }
        Self(widths)
    }
}
