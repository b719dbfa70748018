// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the recfile command-line interface.
//!
//! Four subcommands: `show` prints the first/middle/last five records the way
//! the original report did, `search` looks records up by issued credits
//! (interactively when no keys are given), `inspect` dumps the footer and
//! derived layout, and `pack` builds a record file from a JSON array.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "recfile",
    about = "Inspect and search footer-described binary record files",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the first, middle, and last five records plus the record count
    Show {
        /// Path to the record file
        file: String,
    },

    /// Search records by total credits issued (file must be sorted on it)
    Search {
        /// Path to the record file
        file: String,

        /// Keys to look up; with none given, reads keys from stdin until -1
        #[arg(allow_negative_numbers = true)]
        keys: Vec<i32>,
    },

    /// Print footer widths and the derived record layout
    Inspect {
        /// Path to the record file
        file: String,

        /// Verify ascending sort on the key field (reads every record)
        #[arg(long)]
        check_sorted: bool,
    },

    /// Build a record file from a JSON array of records
    Pack {
        /// Input JSON file (array of record objects)
        input: String,

        /// Output record file
        output: String,
    },
}
