//! Seeded sampling of the enriched trade table.

use polars::prelude::*;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("Cannot sample {requested} rows from a table of {available}")]
    InsufficientData { requested: usize, available: usize },
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Draws the fixed-size display sample.
pub struct DataSampler;

impl DataSampler {
    /// Uniform sample of exactly `size` rows without replacement.
    ///
    /// The same frame and seed always give the same rows in the same order.
    pub fn sample(df: &DataFrame, size: usize, seed: u64) -> Result<DataFrame, SampleError> {
        if df.height() < size {
            return Err(SampleError::InsufficientData {
                requested: size,
                available: df.height(),
            });
        }

        let sample = df.sample_n_literal(size, false, true, Some(seed))?;
        info!(rows = sample.height(), of = df.height(), seed, "sampled trade data");
        Ok(sample)
    }
}
