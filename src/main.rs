// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use confdiff_core::{RunStatus, presentation::cli};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Exit status when the report was written but some inputs were skipped.
const EXIT_PARTIAL: u8 = 2;

fn main() -> ExitCode {
    let args = cli::parse_args();
    init_tracing(args.verbose);

    match confdiff_core::run(args) {
        Ok(RunStatus::Complete) => ExitCode::SUCCESS,
        Ok(RunStatus::Partial) => ExitCode::from(EXIT_PARTIAL),
        Err(err) => {
            eprintln!("confdiff: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
