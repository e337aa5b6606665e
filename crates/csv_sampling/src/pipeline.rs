//! The sampling pipeline: load a CSV dataset into memory, select a
//! seeded random subset of its rows, write the subset to a new file.
//!
//! The pipeline is a single linear pass with no recovery points; any
//! error (missing input, malformed record, shortfall, unwritable
//! output) propagates to the caller and aborts the run.

use crate::config::SampleConfig;
use crate::readers::CsvSource;
use crate::sampler::{RandomSampler, Sampler};
use crate::writers::CsvSink;
use anyhow::{Context, Result};
use rand::Rng;
use tracing::{debug, info};

/// What a completed run did, for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleReport {
    /// Rows in the source table (header excluded)
    pub rows_read: usize,
    /// Rows in the written sample (header excluded)
    pub rows_written: usize,
    /// The seed the selection was made with. Either `config.seed` or,
    /// when that was `None`, the entropy-drawn seed of this run.
    pub seed: u64,
}

/// Runs the read -> sample -> write pipeline described by `config`.
pub fn run(config: &SampleConfig) -> Result<SampleReport> {
    config.validate()?;
    let num_samples = config
        .sample_size
        .context("Specify the number of rows to sample")?;
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());

    let table = CsvSource::new(&config.input).load()?;
    info!(
        rows = table.len(),
        columns = table.columns().len(),
        input = %config.input.display(),
        "loaded dataset"
    );

    debug!(num_samples, seed, "building sampler");
    let sampler = RandomSampler::new(table.len(), false, Some(num_samples), seed)?;
    let indices: Vec<usize> = sampler.indices().collect();
    let sample = table.select(&indices)?;

    let rows_written = CsvSink::new(&config.output).write(&sample)?;
    info!(
        rows = rows_written,
        output = %config.output.display(),
        "wrote sample"
    );

    Ok(SampleReport {
        rows_read: table.len(),
        rows_written,
        seed,
    })
}
