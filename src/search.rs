// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recursive ternary search over record offsets.
//!
//! The file itself is the index: each level of the recursion decodes exactly
//! two candidate records (the third-point dividers of the current range) and
//! narrows to one of three disjoint sub-ranges. Termination is either a
//! direct hit on a divider or an empty range.
//!
//! Requires ascending sort on the key field; see
//! [`RecordFile::search`](crate::RecordFile::search) for the contract.

use std::io::{Read, Seek};

use log::trace;

use crate::error::Result;
use crate::file::RecordFile;
use crate::format::Record;

/// Search `[lo, hi]` (inclusive, record indices) for a record with `key`.
///
/// Bounds are signed so the empty range shows up naturally as `lo > hi`
/// (including the zero-record case, where the caller passes `hi = -1`).
pub(crate) fn ternary<R: Read + Seek>(
    file: &mut RecordFile<R>,
    key: i32,
    lo: i64,
    hi: i64,
) -> Result<Option<Record>> {
    if lo > hi {
        return Ok(None);
    }

    let lower = lo + (hi - lo) / 3;
    let upper = hi - (hi - lo) / 3;
    trace!("probing {} and {} in [{}, {}]", lower, upper, lo, hi);

    let lower_rec = file.read_at(lower as u64)?;
    if lower_rec.issued == key {
        return Ok(Some(lower_rec));
    }

    let upper_rec = file.read_at(upper as u64)?;
    if upper_rec.issued == key {
        return Ok(Some(upper_rec));
    }

    if key < lower_rec.issued {
        ternary(file, key, lo, lower - 1)
    } else if key > upper_rec.issued {
        ternary(file, key, upper + 1, hi)
    } else {
        ternary(file, key, lower + 1, upper - 1)
    }
}
