// lugat-build: build a dataset file from CSV word lists.
//
// The data directory holds one subdirectory per part of speech, each with
// any number of two-column CSV files (latin,visenc):
//   v/  verbs
//   n/  nouns
//   p/  proper nouns
//
// Usage:
//   lugat-build [-d DATA_DIR] [-o DATASET]

use std::fs::File;
use std::path::{Path, PathBuf};

use lugat_core::{PartOfSpeech, Root, RootSet};

const DEFAULT_DATA_DIR: &str = "assets/rootdata";

/// CSV files of one part-of-speech subdirectory, in name order so builds
/// are reproducible.
fn csv_files(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();
    let entries =
        std::fs::read_dir(dir).map_err(|e| format!("cannot read {}: {e}", dir.display()))?;
    for entry in entries {
        let entry = entry.map_err(|e| format!("cannot read {}: {e}", dir.display()))?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "csv") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn load_all(data_dir: &Path) -> Result<Vec<Root>, String> {
    let sections = [
        ("v", PartOfSpeech::Verb),
        ("n", PartOfSpeech::Noun),
        ("p", PartOfSpeech::ProperNoun),
    ];

    let mut roots = Vec::new();
    for (subdir, pos) in sections {
        let dir = data_dir.join(subdir);
        if !dir.is_dir() {
            eprintln!("skipping missing directory {}", dir.display());
            continue;
        }
        for path in csv_files(&dir)? {
            let file =
                File::open(&path).map_err(|e| format!("cannot open {}: {e}", path.display()))?;
            let mut batch = lugat_cli::read_roots_csv(file, pos)
                .map_err(|e| format!("{}: {e}", path.display()))?;
            eprintln!("{}: {} roots", path.display(), batch.len());
            roots.append(&mut batch);
        }
    }
    Ok(roots)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if lugat_cli::wants_help(&args) {
        println!("lugat-build: build a dataset file from CSV word lists.");
        println!();
        println!("Usage: lugat-build [-d DATA_DIR] [-o DATASET]");
        println!();
        println!("Options:");
        println!("  -d, --data-dir DIR   CSV word lists, v/ n/ p/ subdirectories");
        println!("                       (default: {DEFAULT_DATA_DIR})");
        println!("  -o, --output PATH    Dataset file to write (default: $LUGAT_DATASET or");
        println!("                       {})", lugat_cli::DEFAULT_DATASET);
        println!("  -h, --help           Print this help");
        return;
    }

    tracing_subscriber::fmt().with_target(false).init();

    let (data_dir, remaining) = lugat_cli::parse_flag(&args, "-d", "--data-dir");
    let (output, remaining) = lugat_cli::parse_flag(&remaining, "-o", "--output");
    if !remaining.is_empty() {
        lugat_cli::fatal(&format!("unknown arguments: {remaining:?}"));
    }

    let data_dir = PathBuf::from(data_dir.unwrap_or_else(|| DEFAULT_DATA_DIR.to_string()));
    let output = lugat_cli::dataset_path(output);

    let roots = match load_all(&data_dir) {
        Ok(roots) => roots,
        Err(e) => lugat_cli::fatal(&e),
    };
    if roots.is_empty() {
        lugat_cli::fatal(&format!("no roots found under {}", data_dir.display()));
    }

    let rootset = RootSet::new(roots);
    if let Err(e) = lugat_index::save(&output, &rootset) {
        lugat_cli::fatal(&format!("cannot write {}: {e}", output.display()));
    }
    println!("{}: {} roots", output.display(), rootset.len());
}
