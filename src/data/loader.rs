//! CSV Data Loader Module
//! Handles trade CSV loading, schema validation and column typing using Polars.

use super::{
    CATEGORY, COUNTRY, DATE, IMPORT_EXPORT, PRODUCT, QUANTITY, REQUIRED_COLUMNS, VALUE, WEIGHT,
};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Missing required columns: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Handles CSV file loading with Polars for high performance.
pub struct DataLoader {
    df: Option<DataFrame>,
    file_path: Option<PathBuf>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            df: None,
            file_path: None,
        }
    }

    /// Load a trade CSV file and normalise the required columns.
    ///
    /// The whole table loads or an error is returned; extra columns are dropped.
    pub fn load_csv(&mut self, file_path: impl AsRef<Path>) -> Result<&DataFrame, LoadError> {
        let path = file_path.as_ref();
        std::fs::File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.file_path = Some(path.to_path_buf());

        let raw = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;
        debug!(rows = raw.height(), columns = raw.width(), "parsed csv");

        Self::check_schema(&raw)?;
        let df = Self::normalize(&raw)?;
        info!(path = %path.display(), rows = df.height(), "loaded trade data");

        Ok(&*self.df.insert(df))
    }

    /// Fail with every required column the frame lacks.
    pub fn check_schema(df: &DataFrame) -> Result<(), LoadError> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| df.get_column_index(name).is_none())
            .map(|name| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(LoadError::Schema { missing })
        }
    }

    /// Keep only the required columns, each cast to its working dtype.
    /// Cells that do not convert become null. Text keys are trimmed and blank
    /// keys become null.
    pub fn normalize(df: &DataFrame) -> Result<DataFrame, LoadError> {
        let typed = |name: &str, dtype: &DataType| -> PolarsResult<Column> {
            df.column(name)?.cast(dtype)
        };
        let key = |name: &str| -> PolarsResult<Column> {
            let text = typed(name, &DataType::String)?;
            let trimmed: Vec<Option<&str>> = text
                .str()?
                .into_iter()
                .map(|v| v.map(str::trim).filter(|v| !v.is_empty()))
                .collect();
            Ok(Column::new(name.into(), trimmed))
        };

        let columns = vec![
            key(CATEGORY)?,
            key(IMPORT_EXPORT)?,
            key(COUNTRY)?,
            key(PRODUCT)?,
            typed(VALUE, &DataType::Float64)?,
            typed(QUANTITY, &DataType::Int64)?,
            typed(WEIGHT, &DataType::Float64)?,
            typed(DATE, &DataType::String)?,
        ];

        Ok(DataFrame::new(columns)?)
    }

    /// Get list of column names from loaded DataFrame.
    pub fn get_columns(&self) -> Vec<String> {
        self.df
            .as_ref()
            .map(|df| {
                df.get_column_names()
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get the number of rows in the DataFrame.
    pub fn get_row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    /// Get file path.
    pub fn get_file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{csv, row};
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_tmp(content: &str) -> Result<NamedTempFile> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        Ok(tmp)
    }

    #[test]
    fn loads_required_columns_with_types() -> Result<()> {
        let tmp = write_tmp(&csv(&[
            row("France", "Import", 10.0, 2),
            row("Japan", "Export", 2.5, 4),
        ]))?;

        let mut loader = DataLoader::new();
        let df = loader.load_csv(tmp.path())?;

        assert_eq!(df.height(), 2);
        assert_eq!(df.column(VALUE)?.dtype(), &DataType::Float64);
        assert_eq!(df.column(QUANTITY)?.dtype(), &DataType::Int64);
        assert_eq!(df.column(DATE)?.dtype(), &DataType::String);
        assert_eq!(loader.get_row_count(), 2);
        assert_eq!(loader.get_columns(), REQUIRED_COLUMNS.map(String::from).to_vec());
        assert_eq!(loader.get_file_path().map(|p| p.as_path()), Some(tmp.path()));
        Ok(())
    }

    #[test]
    fn extra_columns_are_dropped() -> Result<()> {
        let content = "Transaction_ID,Category,Import_Export,Country,Product,Value,Quantity,Weight,Date\n\
                       t1,Toys,Export,Chile,kite,3.0,2,0.5,01-01-2020\n";
        let tmp = write_tmp(content)?;

        let mut loader = DataLoader::new();
        let df = loader.load_csv(tmp.path())?;

        assert_eq!(df.width(), REQUIRED_COLUMNS.len());
        assert!(df.column("Transaction_ID").is_err());
        Ok(())
    }

    #[test]
    fn key_cells_are_trimmed_and_blanks_become_null() -> Result<()> {
        let content = "Category,Import_Export,Country,Product,Value,Quantity,Weight,Date\n\
                       Toys, Export ,Chile ,kite,3.0,2,0.5,01-01-2020\n\
                       Toys,,,kite,1.0,1,0.5,01-01-2020\n\
                       Toys,Import,  ,kite,1.0,1,0.5,01-01-2020\n";
        let tmp = write_tmp(content)?;

        let mut loader = DataLoader::new();
        let df = loader.load_csv(tmp.path())?;

        let flows: Vec<Option<&str>> = df.column(IMPORT_EXPORT)?.str()?.into_iter().collect();
        assert_eq!(flows, vec![Some("Export"), None, Some("Import")]);
        let countries: Vec<Option<&str>> = df.column(COUNTRY)?.str()?.into_iter().collect();
        assert_eq!(countries, vec![Some("Chile"), None, None]);
        Ok(())
    }

    #[test]
    fn missing_columns_are_a_schema_error() -> Result<()> {
        let tmp = write_tmp("Category,Country,Value\nToys,Chile,1.0\n")?;

        let err = DataLoader::new().load_csv(tmp.path()).unwrap_err();
        match err {
            LoadError::Schema { missing } => {
                assert_eq!(
                    missing,
                    vec!["Import_Export", "Product", "Quantity", "Weight", "Date"]
                );
            }
            other => panic!("expected schema error, got {other}"),
        }
        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = DataLoader::new()
            .load_csv("/definitely/not/here/group_project.csv")
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
