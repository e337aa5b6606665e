use anyhow::{ensure, Result};
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A `Sampler` defines the strategy for selecting row indices from a
/// dataset of known size.
///
/// # Method
/// - `indices()`: returns the selected sequence of row indices. The
///   sequence is fully determined by the sampler's construction
///   parameters, so calling it twice yields the same selection.
pub trait Sampler {
    fn indices(&self) -> Box<dyn Iterator<Item = usize> + '_>;
}

/// Uniform random selection over `0..dataset_size`, with optional replacement.
///
/// # Arguments:
/// - `dataset_size`: Total number of rows available.
/// - `replacement`: If `true`, each draw is independent and indices may repeat;
///                  If `false`, each index can only appear once.
/// - `num_samples`: Number of indices to draw (defaults to `dataset_size` if `None`).
///                  If `replacement=false`, callers must have num_samples <= dataset_size.
/// - `seed`: RNG seed.
///
/// # Seed Handling
/// - Fixed seed -> identical selection every run. The RNG is
///   `StdRng::seed_from_u64(seed)`, so the same seed against the same
///   input file reproduces the exact same sample.
///
/// # Example usage
/// ```ignore
/// // Without replacement
/// let sampler1 = RandomSampler::new(1000, false, Some(100), 42)?;
///
/// // With replacement
/// let sampler2 = RandomSampler::new(1000, true, Some(100), 42)?;
/// ```
#[derive(Debug, Clone)]
pub struct RandomSampler {
    dataset_size: usize,
    replacement: bool,
    num_samples: usize,
    seed: u64,
}

impl RandomSampler {
    pub fn new(
        dataset_size: usize,
        replacement: bool,
        num_samples: Option<usize>,
        seed: u64,
    ) -> Result<Self> {
        let num_samples = num_samples.unwrap_or(dataset_size);

        if !replacement {
            ensure!(
                num_samples <= dataset_size,
                "Cannot sample {} rows from a dataset of {} rows without replacement \
                 (short by {}); reduce the sample size",
                num_samples,
                dataset_size,
                num_samples - dataset_size
            );
        }

        Ok(Self {
            dataset_size,
            replacement,
            num_samples,
            seed,
        })
    }

    #[inline]
    fn derive_rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

impl Sampler for RandomSampler {
    fn indices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        let mut rng = self.derive_rng();
        if self.replacement {
            Box::new((0..self.num_samples).map(move |_| rng.random_range(0..self.dataset_size)))
        } else {
            let mut indices: Vec<_> = (0..self.dataset_size).collect();
            indices.shuffle(&mut rng);
            indices.truncate(self.num_samples);
            Box::new(indices.into_iter())
        }
    }
}
