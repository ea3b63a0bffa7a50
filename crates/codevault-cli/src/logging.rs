//! Diagnostic logging to stderr.
//!
//! User-facing progress goes to stdout via `println!`; tracing events from the
//! catalog library are filtered by `RUST_LOG`, falling back to a level picked
//! from `-v` occurrences.

use tracing_subscriber::EnvFilter;

pub fn init(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed (tests); keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
