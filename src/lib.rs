// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Random-access retrieval and keyed search over footer-described binary
//! record files.
//!
//! A record file is a flat run of fixed-schema, variable-width records whose
//! text column widths are recorded in a 36-byte footer at the END of the
//! file. Nothing else describes the layout: record boundaries are derived
//! purely from the footer and the total file length, and the file itself is
//! the index, addressed by arithmetic.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ format::    │────▶│ format::     │────▶│ RecordFile       │
//! │ footer      │     │ layout       │     │  (open once)     │
//! │ (FieldWidths│     │ (RecordLayout│     └────────┬─────────┘
//! │  from last  │     │  = len+count)│              │
//! │  36 bytes)  │     └──────────────┘       ┌──────┴──────┐
//! └─────────────┘                            ▼             ▼
//!                                      ┌──────────┐  ┌──────────┐
//!                                      │ window   │  │ search   │
//!                                      │ first/   │  │ ternary, │
//!                                      │ mid/last │  │ 2 probes │
//!                                      └────┬─────┘  └────┬─────┘
//!                                           └─────┬───────┘
//!                                                 ▼
//!                                          format::record
//!                                          (decode at offset)
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use recfile::{RecordFile, WindowKind};
//!
//! # fn main() -> recfile::Result<()> {
//! let mut file = RecordFile::open_path("registry.bin")?;
//! println!("{} records", file.record_count());
//!
//! for record in file.window(WindowKind::First) {
//!     println!("{}", record?.id);
//! }
//!
//! // Requires the file to be sorted ascending by `issued`
//! if let Some(hit) = file.search(125_000)? {
//!     println!("found {}", hit.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The write path ([`writer`]) exists symmetrically so tests and the `pack`
//! command can build files byte-identical to the paired producer's output.

pub mod error;
pub mod format;
pub mod writer;

mod file;
mod search;
mod window;

pub use error::{Error, Result};
pub use file::RecordFile;
pub use format::{FieldWidths, Record, RecordLayout};
pub use window::{Window, WindowKind, WINDOW_SIZE};

#[cfg(test)]
mod tests {
    //! End-to-end tests over in-memory files.

    use super::*;
    use proptest::prelude::*;
    use std::io::Cursor;

    fn record(issued: i32) -> Record {
        Record {
            id: format!("P{:04}", issued),
            name: format!("Project {}", issued),
            status: "Registered".into(),
            scope: "Forestry".into(),
            kind: "ARR".into(),
            methodology: "AR-ACM0003".into(),
            region: "Europe".into(),
            country: "Germany".into(),
            subregion: "Bavaria".into(),
            issued,
            retired: issued / 4,
            remaining: issued - issued / 4,
            first_year: 2010,
        }
    }

    fn open_sorted(keys: &[i32]) -> RecordFile<Cursor<Vec<u8>>> {
        let records: Vec<Record> = keys.iter().map(|&k| record(k)).collect();
        let bytes = writer::pack(&records).unwrap();
        RecordFile::open(Cursor::new(bytes)).unwrap()
    }

    #[test]
    fn open_derives_count_from_footer_and_length() {
        let file = open_sorted(&[10, 20, 30]);
        assert_eq!(file.record_count(), 3);
    }

    #[test]
    fn search_finds_middle_key_in_two_probes() {
        // The worked example: range [0, 2] puts both dividers on decodable
        // records, so key 20 must be found without recursing.
        let mut file = open_sorted(&[10, 20, 30]);
        let hit = file.search(20).unwrap().unwrap();
        assert_eq!(hit.issued, 20);
    }

    #[test]
    fn search_on_empty_file_is_not_found() {
        // One-column schema keeps the file non-degenerate at zero records.
        let widths = FieldWidths::new([1, 0, 0, 0, 0, 0, 0, 0, 0]);
        let mut bytes = Vec::new();
        widths.write(&mut bytes).unwrap();
        let mut file = RecordFile::open(Cursor::new(bytes)).unwrap();
        assert_eq!(file.record_count(), 0);
        assert!(file.search(42).unwrap().is_none());
    }

    #[test]
    fn windows_collapse_to_whole_file_when_small() {
        let mut file = open_sorted(&[1, 2, 3]);
        let first: Vec<i32> = file
            .window(WindowKind::First)
            .map(|r| r.unwrap().issued)
            .collect();
        let last: Vec<i32> = file
            .window(WindowKind::Last)
            .map(|r| r.unwrap().issued)
            .collect();
        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(first, last);
    }

    proptest! {
        #[test]
        fn every_present_key_is_found(keys in prop::collection::btree_set(-1_000_000i32..1_000_000, 1..60)) {
            let keys: Vec<i32> = keys.iter().copied().collect();
            let mut file = open_sorted(&keys);
            for &key in &keys {
                let hit = file.search(key).unwrap();
                prop_assert_eq!(hit.map(|r| r.issued), Some(key));
            }
        }

        #[test]
        fn absent_keys_are_not_found(keys in prop::collection::btree_set(0i32..10_000, 1..40), probe in 0i32..10_000) {
            let keys: Vec<i32> = keys.iter().copied().collect();
            prop_assume!(!keys.contains(&probe));
            let mut file = open_sorted(&keys);
            prop_assert!(file.search(probe).unwrap().is_none());
        }

        #[test]
        fn decoded_windows_never_overrun(keys in prop::collection::btree_set(0i32..100_000, 0..30)) {
            let keys: Vec<i32> = keys.iter().copied().collect();
            prop_assume!(!keys.is_empty());
            let mut file = open_sorted(&keys);
            for kind in [WindowKind::First, WindowKind::Middle, WindowKind::Last] {
                for item in file.window(kind) {
                    prop_assert!(item.is_ok());
                }
            }
        }
    }
}
