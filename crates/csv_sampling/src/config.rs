//! Configuration for a sampling run.
//!
//! The `SampleConfig` struct stores the parameters that control how a
//! dataset is sampled.
//!
//! Example:
//! ```ignore
//! let config = SampleConfig::builder("cars.csv", "cars_sampled.csv")
//!     .sample_size(1_000_000)
//!     .seed(42)
//!     .build();
//! ```

use anyhow::{ensure, Result};
use std::path::PathBuf;

/// Configuration for a sampling run
#[derive(Debug, Clone)]
pub struct SampleConfig {
    /// Path of the source CSV file
    pub input: PathBuf,
    /// Path of the destination CSV file (created or overwritten)
    pub output: PathBuf,
    /// Number of rows to draw, without replacement
    pub sample_size: Option<usize>,
    /// Seed for reproducible selection. `None` draws a fresh seed from
    /// OS entropy at run time, so selections differ between runs.
    pub seed: Option<u64>,
}

impl SampleConfig {
    pub fn builder(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> SampleConfigBuilder {
        SampleConfigBuilder {
            config: SampleConfig {
                input: input.into(),
                output: output.into(),
                sample_size: None,
                seed: None,
            },
        }
    }

    /// Checks the parameter combination before a run.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.sample_size.is_some(),
            "Specify the number of rows to sample"
        );
        Ok(())
    }
}

/// Builder for SampleConfig with method chaining
pub struct SampleConfigBuilder {
    config: SampleConfig,
}

impl SampleConfigBuilder {
    /// Set the number of rows to draw
    pub fn sample_size(mut self, size: usize) -> Self {
        self.config.sample_size = Some(size);
        self
    }

    /// Set the random seed for reproducible selection.
    ///
    /// When unset, every run draws its own seed and selections differ
    /// between runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> SampleConfig {
        self.config
    }
}
