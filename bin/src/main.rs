//! candela CLI - aggregates price ticks on stdin into OHLC candles on stdout.

use anyhow::Result;
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

mod pipeline;

#[derive(Parser)]
#[command(name = "candela")]
#[command(
    about = "Aggregate instrument,price,timestamp ticks from stdin into 1, 2 and 5 minute OHLC candles",
    long_about = None
)]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    // Diagnostics go to stderr; stdout carries only CSV.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    pipeline::run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
