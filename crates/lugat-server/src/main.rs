// lugat-server: serve the root lexicon over REST.
//
// Loads the dataset, builds the in-memory index once, then serves the
// /v1/json/... routes until shutdown. Dataset load failure is the one fatal
// error; everything after startup degrades to empty results or 4xx.
//
// Usage:
//   lugat-server [-i DATASET] [-a ADDR]
//
// Options:
//   -i, --dataset PATH   Dataset file (default: $LUGAT_DATASET or
//                        assets/lugat-rootset.bin)
//   -a, --addr ADDR      Bind address (default: $LUGAT_ADDR or 0.0.0.0:9876)
//   -h, --help           Print help

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_DATASET: &str = "assets/lugat-rootset.bin";
const DEFAULT_ADDR: &str = "0.0.0.0:9876";

fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Pull `-i/--dataset` and `-a/--addr` out of the argument list, with
/// environment variable fallbacks.
fn parse_args(args: &[String]) -> (PathBuf, String) {
    let mut dataset = None;
    let mut addr = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-i" | "--dataset" => match iter.next() {
                Some(value) => dataset = Some(value.clone()),
                None => fatal(&format!("{arg} requires a value")),
            },
            "-a" | "--addr" => match iter.next() {
                Some(value) => addr = Some(value.clone()),
                None => fatal(&format!("{arg} requires a value")),
            },
            other => fatal(&format!("unknown argument: {other}")),
        }
    }

    let dataset = dataset
        .or_else(|| std::env::var("LUGAT_DATASET").ok())
        .unwrap_or_else(|| DEFAULT_DATASET.to_string());
    let addr = addr
        .or_else(|| std::env::var("LUGAT_ADDR").ok())
        .unwrap_or_else(|| DEFAULT_ADDR.to_string());

    (PathBuf::from(dataset), addr)
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("lugat-server: serve the root lexicon over REST.");
        println!();
        println!("Usage: lugat-server [-i DATASET] [-a ADDR]");
        println!();
        println!("Options:");
        println!("  -i, --dataset PATH   Dataset file (default: $LUGAT_DATASET or");
        println!("                       {DEFAULT_DATASET})");
        println!("  -a, --addr ADDR      Bind address (default: $LUGAT_ADDR or {DEFAULT_ADDR})");
        println!("  -h, --help           Print this help");
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let (dataset, addr) = parse_args(&args);

    let index = match lugat_index::init_search(&dataset) {
        Ok(index) => Arc::new(index),
        Err(e) => fatal(&format!("cannot load dataset {}: {e}", dataset.display())),
    };
    info!(roots = index.roots().len(), dataset = %dataset.display(), "index ready");

    let app = lugat_server::router(index);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => fatal(&format!("cannot bind {addr}: {e}")),
    };
    info!(%addr, "listening");

    if let Err(e) = axum::serve(listener, app).await {
        fatal(&format!("server error: {e}"));
    }
}
