//! restcountries: query the country catalogue from the terminal.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` or `-v`; stdout
//! carries only the JSON result.

use clap::Parser;
use restcountries_cli::args::CliArgs;
use restcountries_cli::{open_catalog, run, Outcome};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    let args = CliArgs::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();

    let index = open_catalog(&args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = run(&args, &index, &mut out)?;
    out.flush()?;

    Ok(match outcome {
        Outcome::Found => ExitCode::SUCCESS,
        Outcome::NotFound => ExitCode::from(4),
    })
}
