//! Sample Exporter Module
//! Writes the current sample, derived columns included, back to CSV.

use polars::prelude::*;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, PersistError};
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: PersistError,
    },
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub rows: usize,
}

/// Serialises the sample to a fixed destination.
pub struct DataExporter;

impl DataExporter {
    /// Write `df` as CSV with a header row, replacing any file at `path`.
    ///
    /// Rows go to a temporary file beside the target which is then renamed
    /// over it, so a failed write never leaves a truncated file behind.
    pub fn export_csv(df: &DataFrame, path: &Path) -> Result<ExportReport, ExportError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let result = Self::write_then_replace(df, dir, path);

        match &result {
            Ok(report) => info!(path = %report.path.display(), rows = report.rows, "exported sample"),
            Err(err) => error!(path = %path.display(), %err, "export failed"),
        }
        result
    }

    fn write_then_replace(
        df: &DataFrame,
        dir: &Path,
        path: &Path,
    ) -> Result<ExportReport, ExportError> {
        let mut tmp = NamedTempFile::new_in(dir)?;
        let mut out = df.clone();
        CsvWriter::new(tmp.as_file_mut())
            .include_header(true)
            .finish(&mut out)?;
        tmp.as_file_mut().flush()?;

        tmp.persist(path).map_err(|source| ExportError::Persist {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(ExportReport {
            path: path.to_path_buf(),
            rows: df.height(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::many;
    use crate::data::{DataEnricher, DataLoader, REQUIRED_COLUMNS, MONTH, TOTAL_VALUE, YEAR};
    use anyhow::Result;
    use tempfile::tempdir;

    fn sample_frame(n: usize) -> Result<DataFrame> {
        let dir = tempdir()?;
        let src = dir.path().join("source.csv");
        std::fs::write(&src, many(n))?;
        let mut loader = DataLoader::new();
        Ok(DataEnricher::enrich(loader.load_csv(&src)?)?)
    }

    #[test]
    fn export_writes_every_row_and_derived_columns() -> Result<()> {
        let df = sample_frame(40)?;
        let dir = tempdir()?;
        let target = dir.path().join("sampled_trade_data.csv");

        let report = DataExporter::export_csv(&df, &target)?;
        assert_eq!(report.rows, 40);
        assert_eq!(report.path, target);

        let text = std::fs::read_to_string(&target)?;
        let mut lines = text.lines();
        let header: Vec<&str> = lines.next().unwrap_or_default().split(',').collect();
        assert_eq!(lines.count(), 40);

        for name in REQUIRED_COLUMNS.iter().chain([TOTAL_VALUE, YEAR, MONTH].iter()) {
            assert!(header.contains(name), "header lacks {name}");
        }
        Ok(())
    }

    #[test]
    fn export_overwrites_existing_file() -> Result<()> {
        let dir = tempdir()?;
        let target = dir.path().join("sampled_trade_data.csv");
        std::fs::write(&target, "stale\n")?;

        DataExporter::export_csv(&sample_frame(5)?, &target)?;

        let text = std::fs::read_to_string(&target)?;
        assert!(!text.contains("stale"));
        assert_eq!(text.lines().count(), 6);
        Ok(())
    }

    #[test]
    fn export_into_missing_directory_fails_cleanly() -> Result<()> {
        let dir = tempdir()?;
        let target = dir.path().join("no_such_dir").join("out.csv");

        let err = DataExporter::export_csv(&sample_frame(3)?, &target).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
        assert!(!target.exists());
        Ok(())
    }
}
