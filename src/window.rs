// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Windowed reads: bounded runs of records from the start, middle, or end.
//!
//! Each window yields at most `min(5, record_count)` records through direct
//! offset seeks: never a linear scan. The middle window is the odd one out:
//! it shrinks to 4 records when the record count is even, so the window stays
//! centered on the true middle instead of leaning one off to a side.

use std::io::{Read, Seek};

use crate::error::Result;
use crate::file::RecordFile;
use crate::format::Record;

/// Maximum records per window.
pub const WINDOW_SIZE: u64 = 5;

/// Which region of the file to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    First,
    Middle,
    Last,
}

impl WindowKind {
    /// Starting index and length of this window for a file of `record_count`
    /// records.
    pub(crate) fn bounds(self, record_count: u64) -> (u64, u64) {
        match self {
            WindowKind::First => (0, record_count.min(WINDOW_SIZE)),
            WindowKind::Last => (
                record_count.saturating_sub(WINDOW_SIZE),
                record_count.min(WINDOW_SIZE),
            ),
            WindowKind::Middle => {
                // Even counts take 4 records, odd counts take 5; both start
                // at count/2 − 2 once the file is big enough to center.
                let span = if record_count % 2 == 0 {
                    WINDOW_SIZE - 1
                } else {
                    WINDOW_SIZE
                };
                let start = if record_count < span {
                    0
                } else {
                    record_count / 2 - 2
                };
                (start, record_count.min(span))
            }
        }
    }
}

/// Lazy, finite, non-restartable sequence of records from one window.
///
/// Decoding happens on each `next()` call; the first decode error ends the
/// iteration after being yielded.
pub struct Window<'a, R> {
    file: &'a mut RecordFile<R>,
    next: u64,
    end: u64,
    failed: bool,
}

impl<'a, R: Read + Seek> Window<'a, R> {
    pub(crate) fn new(file: &'a mut RecordFile<R>, kind: WindowKind) -> Self {
        let (start, len) = kind.bounds(file.record_count());
        Self {
            file,
            next: start,
            end: start + len,
            failed: false,
        }
    }
}

impl<R: Read + Seek> Iterator for Window<'_, R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.next >= self.end {
            return None;
        }
        let item = self.file.read_at(self.next);
        self.next += 1;
        if item.is_err() {
            self.failed = true;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = (self.end - self.next) as usize;
        (0, Some(remaining))
    }
}
