//! passwd-parser binary entry point.
//!
//! Parses arguments, runs the join and maps the outcome to an exit status:
//! `0` clean, `1` when diagnostics were printed, `2` when an input could not be read.
//!
use std::process::ExitCode;

use clap::Parser;

mod cli;

/// Exit status when an input file cannot be read; no document is printed.
const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}
