// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! recfile CLI: show, search, inspect, and pack record files.

use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;

use recfile::{writer, Record, RecordFile, WindowKind};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Show { file } => run_show(&file),
        Commands::Search { file, keys } => run_search(&file, &keys),
        Commands::Inspect { file, check_sorted } => run_inspect(&file, check_sorted),
        Commands::Pack { input, output } => run_pack(&input, &output),
    };
    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run_show(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = RecordFile::open_path(path)?;

    let groups = [
        ("First five records", WindowKind::First),
        ("Middle five records", WindowKind::Middle),
        ("Last five records", WindowKind::Last),
    ];
    for (label, kind) in groups {
        display::heading(label);
        for item in file.window(kind) {
            println!("{}", display::record_row(&item?));
        }
    }

    display::heading("Number of records");
    println!("{}", file.record_count());
    Ok(())
}

fn run_search(path: &str, keys: &[i32]) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = RecordFile::open_path(path)?;

    if !keys.is_empty() {
        for &key in keys {
            report_search(&mut file, key)?;
        }
        return Ok(());
    }

    // Interactive loop, as the original report ran it: whitespace-separated
    // keys per line, -1 shuts down, anything unparseable restarts the prompt.
    let stdin = io::stdin();
    loop {
        print!("Search for records by credits issued: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        for token in line.split_whitespace() {
            let Ok(key) = token.parse::<i32>() else {
                break;
            };
            if key == -1 {
                println!("Program shutting down.");
                return Ok(());
            }
            report_search(&mut file, key)?;
        }
    }
    Ok(())
}

fn report_search<R: io::Read + io::Seek>(
    file: &mut RecordFile<R>,
    key: i32,
) -> recfile::Result<()> {
    match file.search(key)? {
        Some(record) => println!("{}", display::record_row(&record)),
        None => println!(
            "Search returned 0 records for criteria [Total Credits Issued: {}].",
            key
        ),
    }
    Ok(())
}

fn run_inspect(path: &str, check_sorted: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = RecordFile::open_path(path)?;

    display::heading("Footer widths");
    for line in display::widths_lines(file.widths().widths()) {
        println!("{}", line);
    }

    display::heading("Layout");
    println!(
        "{}",
        display::field_line("record_len", &format!("{} bytes", file.layout().record_len()))
    );
    println!(
        "{}",
        display::field_line("records", &file.record_count().to_string())
    );

    if check_sorted {
        display::heading("Sort check");
        match first_unsorted(&mut file)? {
            None => println!("  sorted ascending by issued credits"),
            Some(index) => {
                println!("  NOT sorted: record {} has a smaller key than its predecessor", index);
                println!("  ternary search results on this file are undefined");
            }
        }
    }
    Ok(())
}

/// Full scan; returns the first index whose key decreases.
fn first_unsorted<R: io::Read + io::Seek>(file: &mut RecordFile<R>) -> recfile::Result<Option<u64>> {
    let mut prev: Option<i32> = None;
    for index in 0..file.record_count() {
        let key = file.read_at(index)?.issued;
        if let Some(p) = prev {
            if key < p {
                return Ok(Some(index));
            }
        }
        prev = Some(key);
    }
    Ok(None)
}

fn run_pack(input: &str, output: &str) -> Result<(), Box<dyn std::error::Error>> {
    let json = fs::read_to_string(input)?;
    let records: Vec<Record> = serde_json::from_str(&json)?;
    let bytes = writer::pack(&records)?;
    fs::write(output, &bytes)?;
    println!(
        "packed {} records into {} ({} bytes)",
        records.len(),
        output,
        bytes.len()
    );
    Ok(())
}
