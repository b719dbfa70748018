// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The record codec.
//!
//! A record is nine fixed-width text runs followed by four big-endian `i32`s,
//! with no separators anywhere. The stored width is the ONLY way to know
//! where a text field ends, which is why decode takes [`FieldWidths`] and
//! never guesses.
//!
//! Padding is preserved verbatim: a value stored as `"US   "` decodes as
//! `"US   "`, trailing spaces and all. Trimming here would be friendlier but
//! would break the decode-then-encode byte fidelity the paired producer
//! relies on. Callers that want display-clean text can trim at the edge.

use std::io::{self, Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::footer::FieldWidths;
use super::{INT_FIELD_COUNT, TEXT_FIELDS, TEXT_FIELD_COUNT};

/// One registry record: nine text fields and four integer fields.
///
/// Field order matches the on-disk order in [`TEXT_FIELDS`] and
/// [`INT_FIELDS`](super::INT_FIELDS). `issued` is the search key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub status: String,
    pub scope: String,
    pub kind: String,
    pub methodology: String,
    pub region: String,
    pub country: String,
    pub subregion: String,
    pub issued: i32,
    pub retired: i32,
    pub remaining: i32,
    pub first_year: i32,
}

impl Record {
    /// Decode one record from a handle positioned at a record boundary.
    ///
    /// Reads exactly `record_len` bytes. `offset` is the absolute position of
    /// the record start, used only to contextualize errors.
    pub fn read_from<R: Read>(handle: &mut R, widths: &FieldWidths, offset: u64) -> Result<Self> {
        let mut texts: [String; TEXT_FIELD_COUNT] = Default::default();
        let mut pos = offset;

        for (i, slot) in texts.iter_mut().enumerate() {
            let width = widths.widths()[i] as usize;
            let mut buf = vec![0u8; width];
            handle
                .read_exact(&mut buf)
                .map_err(|e| truncated(e, pos, width))?;
            *slot = String::from_utf8(buf).map_err(|_| Error::InvalidText {
                field: TEXT_FIELDS[i],
                offset: pos,
            })?;
            pos += width as u64;
        }

        let mut ints = [0i32; INT_FIELD_COUNT];
        for slot in &mut ints {
            let mut buf = [0u8; 4];
            handle
                .read_exact(&mut buf)
                .map_err(|e| truncated(e, pos, 4))?;
            *slot = i32::from_be_bytes(buf);
            pos += 4;
        }

        let [id, name, status, scope, kind, methodology, region, country, subregion] = texts;
        Ok(Self {
            id,
            name,
            status,
            scope,
            kind,
            methodology,
            region,
            country,
            subregion,
            issued: ints[0],
            retired: ints[1],
            remaining: ints[2],
            first_year: ints[3],
        })
    }

    /// Encode one record: nine text runs then four big-endian `i32`s.
    ///
    /// Every text value must already equal its declared width in bytes;
    /// anything else would make the file unparseable, so it is rejected here
    /// rather than discovered by the next reader.
    pub fn write_to<W: Write>(&self, w: &mut W, widths: &FieldWidths) -> Result<()> {
        for ((value, &width), field) in self
            .text_fields()
            .iter()
            .zip(widths.widths())
            .zip(TEXT_FIELDS)
        {
            if value.len() != width as usize {
                return Err(Error::WidthMismatch {
                    field,
                    expected: width as usize,
                    actual: value.len(),
                });
            }
            w.write_all(value.as_bytes())?;
        }
        for value in [self.issued, self.retired, self.remaining, self.first_year] {
            w.write_all(&value.to_be_bytes())?;
        }
        Ok(())
    }

    /// Copy of this record with each text field right-padded with spaces to
    /// the given widths. Values already at width are left untouched; values
    /// wider than the target are NOT shortened (encode will reject them).
    pub fn padded(&self, widths: &FieldWidths) -> Self {
        let mut out = self.clone();
        for (value, &width) in out.text_fields_mut().into_iter().zip(widths.widths()) {
            while value.len() < width as usize {
                value.push(' ');
            }
        }
        out
    }

    /// The search key: total credits issued.
    pub fn key(&self) -> i32 {
        self.issued
    }

    /// Text field values in on-disk order.
    pub(crate) fn text_fields(&self) -> [&str; TEXT_FIELD_COUNT] {
        [
            &self.id,
            &self.name,
            &self.status,
            &self.scope,
            &self.kind,
            &self.methodology,
            &self.region,
            &self.country,
            &self.subregion,
        ]
    }

    fn text_fields_mut(&mut self) -> [&mut String; TEXT_FIELD_COUNT] {
        [
            &mut self.id,
            &mut self.name,
            &mut self.status,
            &mut self.scope,
            &mut self.kind,
            &mut self.methodology,
            &mut self.region,
            &mut self.country,
            &mut self.subregion,
        ]
    }
}

fn truncated(e: io::Error, offset: u64, expected: usize) -> Error {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        Error::Truncated { offset, expected }
    } else {
        Error::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (FieldWidths, Record) {
        let widths = FieldWidths::new([2, 2, 1, 1, 1, 1, 1, 1, 1]);
        let record = Record {
            id: "A1".into(),
            name: "N ".into(),
            status: "R".into(),
            scope: "F".into(),
            kind: "X".into(),
            methodology: "M".into(),
            region: "E".into(),
            country: "D".into(),
            subregion: "B".into(),
            issued: 10,
            retired: 2,
            remaining: 8,
            first_year: 2019,
        };
        (widths, record)
    }

    #[test]
    fn codec_round_trips_byte_for_byte() {
        let (widths, record) = sample();
        let mut bytes = Vec::new();
        record.write_to(&mut bytes, &widths).unwrap();
        assert_eq!(bytes.len(), 27);

        let decoded = Record::read_from(&mut bytes.as_slice(), &widths, 0).unwrap();
        assert_eq!(decoded, record);
        // Padding survives: "N " stays "N ", no trimming
        assert_eq!(decoded.name, "N ");

        let mut again = Vec::new();
        decoded.write_to(&mut again, &widths).unwrap();
        assert_eq!(again, bytes);
    }

    #[test]
    fn truncated_record_reports_offset_and_expected() {
        let (widths, record) = sample();
        let mut bytes = Vec::new();
        record.write_to(&mut bytes, &widths).unwrap();
        bytes.truncate(20);

        let err = Record::read_from(&mut bytes.as_slice(), &widths, 0).unwrap_err();
        assert!(matches!(err, Error::Truncated { .. }));
    }

    #[test]
    fn encode_rejects_wrong_width() {
        let (widths, mut record) = sample();
        record.status = "TOO WIDE".into();
        let err = record.write_to(&mut Vec::new(), &widths).unwrap_err();
        assert!(matches!(
            err,
            Error::WidthMismatch {
                field: "status",
                expected: 1,
                actual: 8
            }
        ));
    }

    #[test]
    fn padded_fills_to_width() {
        let widths = FieldWidths::new([4, 4, 1, 1, 1, 1, 1, 1, 1]);
        let (_, record) = sample();
        let padded = record.padded(&widths);
        assert_eq!(padded.id, "A1  ");
        assert_eq!(padded.name, "N   ");
        assert_eq!(padded.status, "R");
        padded.write_to(&mut Vec::new(), &widths).unwrap();
    }
}
