// lugat-dump: write a dataset back out as CSV.
//
// Produces three columns per row: latin,visenc,pos-tag. Writes to stdout
// unless -o is given.
//
// Usage:
//   lugat-dump [-i DATASET] [-o OUTPUT.csv]

use std::fs::File;
use std::io;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if lugat_cli::wants_help(&args) {
        println!("lugat-dump: write a dataset back out as CSV.");
        println!();
        println!("Usage: lugat-dump [-i DATASET] [-o OUTPUT.csv]");
        println!();
        println!("Options:");
        println!("  -i, --dataset PATH   Dataset file to read (default: $LUGAT_DATASET or");
        println!("                       {})", lugat_cli::DEFAULT_DATASET);
        println!("  -o, --output PATH    CSV file to write (default: stdout)");
        println!("  -h, --help           Print this help");
        return;
    }

    let (dataset, remaining) = lugat_cli::parse_flag(&args, "-i", "--dataset");
    let (output, remaining) = lugat_cli::parse_flag(&remaining, "-o", "--output");
    if !remaining.is_empty() {
        lugat_cli::fatal(&format!("unknown arguments: {remaining:?}"));
    }

    let path = lugat_cli::dataset_path(dataset);
    let rootset = match lugat_index::load(&path) {
        Ok(rootset) => rootset,
        Err(e) => lugat_cli::fatal(&format!("cannot load dataset {}: {e}", path.display())),
    };

    let result = match output {
        Some(out_path) => match File::create(&out_path) {
            Ok(file) => lugat_cli::write_roots_csv(file, &rootset.roots),
            Err(e) => lugat_cli::fatal(&format!("cannot create {out_path}: {e}")),
        },
        None => lugat_cli::write_roots_csv(io::stdout().lock(), &rootset.roots),
    };

    if let Err(e) = result {
        lugat_cli::fatal(&e);
    }
    eprintln!("dumped {} roots", rootset.len());
}
