// lugat-cli: shared utilities for the command-line tools.

use std::io;
use std::path::PathBuf;
use std::process;

use lugat_core::{PartOfSpeech, Root};

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATASET: &str = "assets/lugat-rootset.bin";

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Pull a single-value flag (`-i PATH` / `--dataset PATH` style) out of the
/// argument list. Returns the value and the remaining arguments.
pub fn parse_flag(args: &[String], short: &str, long: &str) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(v) = arg.strip_prefix(&format!("{long}=")) {
            value = Some(v.to_string());
        } else if arg == short || arg == long {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Resolve the dataset path: explicit flag value, then `LUGAT_DATASET`,
/// then the default location.
pub fn dataset_path(explicit: Option<String>) -> PathBuf {
    explicit
        .or_else(|| std::env::var("LUGAT_DATASET").ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET))
}

/// Read roots from a two-column CSV (`latin,visenc`). Lines starting with
/// `#` are comments; rows with fewer than two fields are skipped.
pub fn read_roots_csv<R: io::Read>(reader: R, pos: PartOfSpeech) -> Result<Vec<Root>, String> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut roots = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| format!("csv read failed: {e}"))?;
        if record.len() < 2 {
            eprintln!("skipping short row: {record:?}");
            continue;
        }
        let latin = record[0].trim();
        let visenc = record[1].trim();
        if latin.is_empty() && visenc.is_empty() {
            continue;
        }
        let root = Root::new(latin, visenc, pos)
            .map_err(|e| format!("bad root {latin:?}/{visenc:?}: {e}"))?;
        roots.push(root);
    }
    Ok(roots)
}

/// Write roots as three-column CSV (`latin,visenc,pos-tag`).
pub fn write_roots_csv<W: io::Write>(writer: W, roots: &[Root]) -> Result<(), String> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for root in roots {
        csv_writer
            .write_record([
                root.turkish_latin.as_str(),
                root.ottoman.visenc.as_str(),
                root.part_of_speech.tag(),
            ])
            .map_err(|e| format!("csv write failed: {e}"))?;
    }
    csv_writer.flush().map_err(|e| format!("csv flush failed: {e}"))
}

/// Format roots the way the console prints them, one record per line.
pub fn print_roots(roots: &[&Root]) -> String {
    let mut out = String::new();
    for (i, root) in roots.iter().enumerate() {
        out.push_str(&format!(
            "{i} - {} | {} | {} | {}\n",
            root.turkish_latin, root.ottoman.unicode, root.ottoman.visenc, root.ottoman.abjad
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flag_variants() {
        let args: Vec<String> = ["-i", "a.bin", "rest"].iter().map(|s| s.to_string()).collect();
        let (value, remaining) = parse_flag(&args, "-i", "--dataset");
        assert_eq!(value.as_deref(), Some("a.bin"));
        assert_eq!(remaining, vec!["rest".to_string()]);

        let args: Vec<String> = ["--dataset=b.bin"].iter().map(|s| s.to_string()).collect();
        let (value, _) = parse_flag(&args, "-i", "--dataset");
        assert_eq!(value.as_deref(), Some("b.bin"));
    }

    #[test]
    fn read_roots_skips_comments_and_short_rows() {
        let csv = "# comment line\nemre,emrh\nshort\nkitap,kbo2ebu1\n";
        let roots = read_roots_csv(csv.as_bytes(), PartOfSpeech::Noun).unwrap();
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].turkish_latin, "emre");
        assert_eq!(roots[1].turkish_latin, "kitap");
    }

    #[test]
    fn csv_round_trip_keeps_spellings_and_pos() {
        let originals = vec![
            Root::new("emre", "emrh", PartOfSpeech::ProperNoun).unwrap(),
            Root::new("gitmek", "kydmk", PartOfSpeech::Verb).unwrap(),
        ];
        let mut buf = Vec::new();
        write_roots_csv(&mut buf, &originals).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(text.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "emre");
        assert_eq!(&rows[0][1], "emrh");
        assert_eq!(&rows[0][2], "p");
        assert_eq!(&rows[1][2], "v");
    }

    #[test]
    fn print_roots_is_one_line_per_root() {
        let root = Root::new("emre", "emrh", PartOfSpeech::ProperNoun).unwrap();
        let out = print_roots(&[&root]);
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("emre"));
        assert!(out.contains("246"));
    }
}
