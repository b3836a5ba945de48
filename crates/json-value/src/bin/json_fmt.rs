//! `json-fmt`: reformat a JSON document.
//!
//! Usage:
//!   json-fmt [--pretty] [<path-or-file-url>]
//!
//! The document is read from the given locator, or from stdin when none is
//! given, and written back compact (default) or pretty. Set `RUST_LOG=debug`
//! to see read/write events on stderr. Built with the `cli` feature.

use json_value::{JsonError, JsonValue, PrintOptions};
use std::io;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(locator: Option<&str>, options: PrintOptions) -> Result<(), JsonError> {
    let doc = match locator {
        Some(locator) => JsonValue::read_url(locator)?,
        None => JsonValue::read_from(io::stdin().lock())?,
    };
    doc.write_line_to(io::stdout().lock(), options)
}

fn main() {
    init_tracing();

    let mut options = PrintOptions::Compact;
    let mut locator = None;
    for arg in std::env::args().skip(1) {
        if arg == "--pretty" || arg == "-p" {
            options = PrintOptions::Pretty;
        } else if arg == "--compact" || arg == "-c" {
            options = PrintOptions::Compact;
        } else if locator.is_none() {
            locator = Some(arg);
        } else {
            eprintln!("Usage: json-fmt [--pretty] [<path-or-file-url>]");
            std::process::exit(1);
        }
    }

    if let Err(e) = run(locator.as_deref(), options) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
