//! Startup pipeline: load, enrich and sample once per session.

use crate::config::DashboardConfig;
use crate::data::{
    DataEnricher, DataLoader, DataSampler, EnrichError, LoadError, SampleError,
};
use polars::prelude::DataFrame;
use thiserror::Error;
use tracing::info;

/// Failures that stop the dashboard before any chart is drawn.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Enrich(#[from] EnrichError),
    #[error(transparent)]
    Sample(#[from] SampleError),
}

/// Build the display sample described by `config`.
pub fn prepare_sample(config: &DashboardConfig) -> Result<DataFrame, StartupError> {
    let mut loader = DataLoader::new();
    let enriched = DataEnricher::enrich(loader.load_csv(&config.input_path)?)?;
    info!(
        path = ?loader.get_file_path(),
        rows = loader.get_row_count(),
        columns = ?loader.get_columns(),
        "source table ready"
    );

    Ok(DataSampler::sample(&enriched, config.sample_size, config.seed)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::many;
    use crate::data::TOTAL_VALUE;
    use anyhow::Result;
    use tempfile::tempdir;

    fn config_for(dir: &std::path::Path, rows: usize, sample_size: usize) -> Result<DashboardConfig> {
        let input_path = dir.join("group_project.csv");
        std::fs::write(&input_path, many(rows))?;
        Ok(DashboardConfig {
            input_path,
            export_path: dir.join("sampled_trade_data.csv"),
            sample_size,
            ..DashboardConfig::default()
        })
    }

    #[test]
    fn two_runs_over_the_same_file_agree() -> Result<()> {
        let dir = tempdir()?;
        let config = config_for(dir.path(), 3200, 3001)?;

        let first = prepare_sample(&config)?;
        let second = prepare_sample(&config)?;

        assert_eq!(first.height(), 3001);
        assert!(first.equals_missing(&second));
        assert!(first.column(TOTAL_VALUE).is_ok());
        Ok(())
    }

    #[test]
    fn small_source_aborts_startup() -> Result<()> {
        let dir = tempdir()?;
        let config = config_for(dir.path(), 3000, 3001)?;

        let err = prepare_sample(&config).unwrap_err();
        assert!(matches!(
            err,
            StartupError::Sample(SampleError::InsufficientData {
                requested: 3001,
                available: 3000
            })
        ));
        Ok(())
    }

    #[test]
    fn missing_source_aborts_startup() -> Result<()> {
        let dir = tempdir()?;
        let config = DashboardConfig {
            input_path: dir.path().join("absent.csv"),
            ..DashboardConfig::default()
        };

        assert!(matches!(
            prepare_sample(&config).unwrap_err(),
            StartupError::Load(LoadError::Io { .. })
        ));
        Ok(())
    }
}
