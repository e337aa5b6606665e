//! csv-sample - draw a reproducible random sample from a CSV dataset
//! and write it to a new file.

use anyhow::Result;
use clap::Parser;
use csv_sampling::{pipeline, SampleConfig};
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Draw a fixed-size random sample from a CSV dataset, without
/// replacement, and write it to a new CSV file.
#[derive(Parser, Debug, Clone)]
#[command(name = "csv-sample")]
#[command(version, about, long_about = None)]
struct CliArgs {
    /// Source CSV file (first record is the header)
    input: PathBuf,

    /// Destination CSV file (created or overwritten)
    output: PathBuf,

    /// Number of rows to draw
    #[arg(short = 'n', long = "rows", default_value_t = 1_000_000)]
    rows: usize,

    /// Seed for the random generator; the same seed over the same input
    /// reproduces the same sample
    #[arg(long = "seed", default_value_t = 42)]
    seed: u64,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn build_config(args: &CliArgs) -> SampleConfig {
    SampleConfig::builder(&args.input, &args.output)
        .sample_size(args.rows)
        .seed(args.seed)
        .build()
}

fn run() -> Result<()> {
    let args = CliArgs::parse();
    setup_logging(args.verbose, args.quiet);

    let config = build_config(&args);
    let report = pipeline::run(&config)?;

    info!(
        "sampled {} of {} rows into {} (seed {})",
        report.rows_written,
        report.rows_read,
        config.output.display(),
        report.seed
    );
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}
