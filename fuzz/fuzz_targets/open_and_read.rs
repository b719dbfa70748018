// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Record file parsing under adversarial input.
//!
//! A crafted file should produce an error, never a panic or a runaway
//! allocation. The footer widths are attacker-controlled, so the layout
//! arithmetic and every decode path get hammered with garbage here:
//! truncated footers, widths that overflow the data region, text runs full
//! of invalid UTF-8.

#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use recfile::{RecordFile, WindowKind};

fuzz_target!(|data: &[u8]| {
    // Opening must terminate safely on any input.
    let Ok(mut file) = RecordFile::open(Cursor::new(data.to_vec())) else {
        return;
    };

    // If the layout was accepted, its invariant must hold exactly.
    let layout = *file.layout();
    assert_eq!(
        layout.record_count() * layout.record_len() + 36,
        data.len() as u64
    );

    // Windowed decodes may fail (bad UTF-8) but must not panic.
    for kind in [WindowKind::First, WindowKind::Middle, WindowKind::Last] {
        for item in file.window(kind) {
            let _ = item;
        }
    }

    // A couple of searches through attacker-shaped records.
    let _ = file.search(0);
    let _ = file.search(i32::MAX);
});
