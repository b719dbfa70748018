// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared fixtures for the integration suites.
//!
//! Files are built through the crate's own write path, which is exercised by
//! `format.rs` for byte fidelity, so the other suites can trust it.

#![allow(dead_code)]

use std::io::Cursor;

use recfile::{writer, Record, RecordFile};

/// A plausible registry record keyed by `issued`.
pub fn registry_record(issued: i32) -> Record {
    Record {
        id: format!("VCS-{:05}", issued),
        name: format!("Offset Project {}", issued),
        status: "Registered".into(),
        scope: "Forestry".into(),
        kind: "ARR".into(),
        methodology: "AR-ACM0003".into(),
        region: "Latin America".into(),
        country: "Peru".into(),
        subregion: "Loreto".into(),
        issued,
        retired: issued / 3,
        remaining: issued - issued / 3,
        first_year: 2012,
    }
}

/// Complete file bytes for the given keys, in the given order.
pub fn file_bytes(keys: &[i32]) -> Vec<u8> {
    let records: Vec<Record> = keys.iter().map(|&k| registry_record(k)).collect();
    writer::pack(&records).expect("pack fixture")
}

/// An opened in-memory file over the given keys.
pub fn open_file(keys: &[i32]) -> RecordFile<Cursor<Vec<u8>>> {
    RecordFile::open(Cursor::new(file_bytes(keys))).expect("open fixture")
}
