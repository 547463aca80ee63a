// lugat-console: interactive lookups against a dataset.
//
// Reads commands from stdin, one per line:
//   v2o VISENC     convert visenc to Arabic script
//   o2v TEXT       convert Arabic script to visenc
//   t WORD         prefix search on Turkish Latin spellings
//   v VISENC       prefix search on visenc spellings
//   u TEXT         prefix search on Arabic-script spellings
//   a NUMBER       abjad value search
//   WORD           auto-detected search
//
// Usage:
//   lugat-console [-i DATASET]

use std::io::{self, BufRead, Write};

use lugat_core::visenc;
use lugat_index::{Index, SearchField};

/// Upper bound on results printed per command.
const RESULT_LIMIT: usize = 100;

fn run_command(index: &Index, line: &str) -> Result<String, String> {
    if let Some(rest) = line.strip_prefix("v2o ") {
        return Ok(visenc::visenc_to_unicode(rest));
    }
    if let Some(rest) = line.strip_prefix("o2v ") {
        return Ok(visenc::unicode_to_visenc(rest));
    }
    if let Some(rest) = line.strip_prefix("t ") {
        return Ok(lugat_cli::print_roots(&index.prefix_search(
            SearchField::Latin,
            rest,
            RESULT_LIMIT,
        )));
    }
    if let Some(rest) = line.strip_prefix("v ") {
        return Ok(lugat_cli::print_roots(&index.prefix_search(
            SearchField::Visenc,
            rest,
            RESULT_LIMIT,
        )));
    }
    if let Some(rest) = line.strip_prefix("u ") {
        return Ok(lugat_cli::print_roots(&index.prefix_search(
            SearchField::Unicode,
            rest,
            RESULT_LIMIT,
        )));
    }
    if let Some(rest) = line.strip_prefix("a ") {
        let value: i32 = rest
            .trim()
            .parse()
            .map_err(|_| format!("need a number for abjad search, got {rest:?}"))?;
        return Ok(lugat_cli::print_roots(&index.abjad_search(value, RESULT_LIMIT)));
    }

    let results = index
        .auto_search(line, RESULT_LIMIT)
        .map_err(|e| e.to_string())?;
    Ok(lugat_cli::print_roots(&results))
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if lugat_cli::wants_help(&args) {
        println!("lugat-console: interactive lookups against a dataset.");
        println!();
        println!("Usage: lugat-console [-i DATASET]");
        println!();
        println!("Commands (one per line on stdin):");
        println!("  v2o VISENC   convert visenc to Arabic script");
        println!("  o2v TEXT     convert Arabic script to visenc");
        println!("  t WORD       prefix search, Turkish Latin");
        println!("  v VISENC     prefix search, visenc");
        println!("  u TEXT       prefix search, Arabic script");
        println!("  a NUMBER     abjad search");
        println!("  WORD         auto-detected search");
        return;
    }

    let (dataset, remaining) = lugat_cli::parse_flag(&args, "-i", "--dataset");
    if !remaining.is_empty() {
        lugat_cli::fatal(&format!("unknown arguments: {remaining:?}"));
    }
    let path = lugat_cli::dataset_path(dataset);

    let index = match lugat_index::init_search(&path) {
        Ok(index) => index,
        Err(e) => lugat_cli::fatal(&format!("cannot load dataset {}: {e}", path.display())),
    };
    eprintln!("loaded {} roots from {}", index.roots().len(), path.display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match run_command(&index, line) {
            Ok(output) => {
                let _ = writeln!(out, "{}", output.trim_end());
                let _ = out.flush();
            }
            Err(e) => eprintln!("{e}"),
        }
    }
}
