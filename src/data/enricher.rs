//! Data Enricher Module
//! Derives Total_Value, parsed Date, Year and Month from a loaded trade table.

use super::{DATE, MONTH, QUANTITY, TOTAL_VALUE, VALUE, YEAR};
use chrono::{Datelike, NaiveDate};
use polars::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

/// Source date format (day-month-year).
pub const DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// A single cell that did not parse. Recovered locally as null.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unparseable date {raw:?}")]
pub struct RowParseError {
    pub raw: String,
}

/// Parse a `DD-MM-YYYY` date.
pub fn parse_trade_date(raw: &str) -> Result<NaiveDate, RowParseError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| RowParseError {
        raw: raw.to_string(),
    })
}

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}

/// Adds the computed columns to a trade table.
pub struct DataEnricher;

impl DataEnricher {
    /// Return a new frame with Total_Value, Date (as a date), Year and Month.
    ///
    /// Total_Value is always recomputed from Value and Quantity. Dates that do
    /// not match the source format become null, together with Year and Month.
    pub fn enrich(df: &DataFrame) -> Result<DataFrame, EnrichError> {
        let total_value = Self::total_value(df)?;

        let raw_dates = df.column(DATE)?.cast(&DataType::String)?;
        let mut days: Vec<Option<i32>> = Vec::with_capacity(df.height());
        let mut years: Vec<Option<i32>> = Vec::with_capacity(df.height());
        let mut months: Vec<Option<String>> = Vec::with_capacity(df.height());
        let mut rejected = 0usize;

        for raw in raw_dates.str()?.into_iter() {
            let parsed = raw.map(parse_trade_date);
            match parsed {
                Some(Ok(date)) => {
                    days.push(Some((date - epoch()).num_days() as i32));
                    years.push(Some(date.year()));
                    months.push(Some(date.format("%Y-%m").to_string()));
                }
                Some(Err(err)) => {
                    debug!(%err, "date set to null");
                    rejected += 1;
                    days.push(None);
                    years.push(None);
                    months.push(None);
                }
                None => {
                    days.push(None);
                    years.push(None);
                    months.push(None);
                }
            }
        }

        if rejected > 0 {
            warn!(rejected, "rows with malformed dates kept without Year/Month");
        }

        let mut enriched = df.clone();
        enriched.with_column(total_value)?;
        enriched.with_column(Column::new(DATE.into(), days).cast(&DataType::Date)?)?;
        enriched.with_column(Column::new(YEAR.into(), years))?;
        enriched.with_column(Column::new(MONTH.into(), months))?;

        Ok(enriched)
    }

    fn total_value(df: &DataFrame) -> Result<Column, EnrichError> {
        let value = df.column(VALUE)?.cast(&DataType::Float64)?;
        let quantity = df.column(QUANTITY)?.cast(&DataType::Int64)?;

        let totals: Vec<Option<f64>> = value
            .f64()?
            .into_iter()
            .zip(quantity.i64()?.into_iter())
            .map(|(v, q)| match (v, q) {
                (Some(v), Some(q)) => Some(v * q as f64),
                _ => None,
            })
            .collect();

        Ok(Column::new(TOTAL_VALUE.into(), totals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{frame, row, Row};
    use anyhow::Result;

    #[test]
    fn total_value_is_value_times_quantity() -> Result<()> {
        let df = frame(&[
            row("France", "Import", 10.0, 2),
            row("Japan", "Export", 2.5, 4),
            row("Chile", "Export", 0.0, 9),
        ]);

        let enriched = DataEnricher::enrich(&df)?;
        let totals: Vec<Option<f64>> = enriched.column(TOTAL_VALUE)?.f64()?.into_iter().collect();

        assert_eq!(totals, vec![Some(20.0), Some(10.0), Some(0.0)]);
        Ok(())
    }

    #[test]
    fn valid_dates_produce_year_and_month() -> Result<()> {
        let mut r = row("France", "Import", 1.0, 1);
        r.date = "07-11-2022";
        let enriched = DataEnricher::enrich(&frame(&[r]))?;

        assert_eq!(enriched.column(DATE)?.dtype(), &DataType::Date);
        assert_eq!(enriched.column(YEAR)?.i32()?.get(0), Some(2022));
        assert_eq!(enriched.column(MONTH)?.str()?.get(0), Some("2022-11"));
        Ok(())
    }

    #[test]
    fn malformed_dates_become_null_without_failing() -> Result<()> {
        let rows: Vec<Row<'_>> = ["2022-11-07", "31-02-2021", "not a date", "01-01-2020"]
            .into_iter()
            .map(|d| {
                let mut r = row("France", "Import", 1.0, 1);
                r.date = d;
                r
            })
            .collect();

        let enriched = DataEnricher::enrich(&frame(&rows))?;
        let years: Vec<Option<i32>> = enriched.column(YEAR)?.i32()?.into_iter().collect();
        let months: Vec<Option<&str>> = enriched.column(MONTH)?.str()?.into_iter().collect();

        assert_eq!(enriched.height(), 4);
        assert_eq!(years, vec![None, None, None, Some(2020)]);
        assert_eq!(months, vec![None, None, None, Some("2020-01")]);
        assert_eq!(enriched.column(DATE)?.null_count(), 3);
        Ok(())
    }

    #[test]
    fn parse_trade_date_is_day_first() {
        let date = parse_trade_date("05-04-2019").unwrap();
        assert_eq!((date.day(), date.month(), date.year()), (5, 4, 2019));
        assert!(parse_trade_date("2019-04-05").is_err());
    }
}
