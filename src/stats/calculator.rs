//! Statistics Calculator Module
//! Headline metrics for the sample and descriptive statistics for the panels.

use crate::data::{QUANTITY, TOTAL_VALUE, VALUE, WEIGHT};
use polars::prelude::*;
use statrs::statistics::{Data, Median, Statistics};

/// The three summary tiles plus per-transaction averages.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMetrics {
    pub total_trade_value: f64,
    pub total_quantity: i64,
    pub total_transactions: usize,
    pub mean_transaction_value: f64,
    pub median_transaction_value: f64,
}

/// Handles statistical calculations over the sample.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute the summary tiles over the sample.
    pub fn key_metrics(df: &DataFrame) -> PolarsResult<KeyMetrics> {
        let totals = Self::values(df, TOTAL_VALUE)?;
        let total_quantity = df.column(QUANTITY)?.cast(&DataType::Int64)?.i64()?.sum();

        let (mean, median) = if totals.is_empty() {
            (f64::NAN, f64::NAN)
        } else {
            (totals.iter().mean(), Data::new(totals.clone()).median())
        };

        Ok(KeyMetrics {
            total_trade_value: totals.iter().sum(),
            total_quantity: total_quantity.unwrap_or(0),
            total_transactions: df.height(),
            mean_transaction_value: mean,
            median_transaction_value: median,
        })
    }

    /// Pearson correlation between Weight and Value, over rows where both
    /// are present. `None` when fewer than two rows or either side is constant.
    pub fn weight_value_correlation(df: &DataFrame) -> PolarsResult<Option<f64>> {
        let weight = df.column(WEIGHT)?.cast(&DataType::Float64)?;
        let value = df.column(VALUE)?.cast(&DataType::Float64)?;

        let (xs, ys): (Vec<f64>, Vec<f64>) = weight
            .f64()?
            .into_iter()
            .zip(value.f64()?.into_iter())
            .filter_map(|pair| match pair {
                (Some(w), Some(v)) if w.is_finite() && v.is_finite() => Some((w, v)),
                _ => None,
            })
            .unzip();

        Ok(Self::pearson(&xs, &ys))
    }

    fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
        if xs.len() < 2 || xs.len() != ys.len() {
            return None;
        }
        let sx = xs.iter().std_dev();
        let sy = ys.iter().std_dev();
        if sx == 0.0 || sy == 0.0 {
            return None;
        }
        let cov = xs.iter().covariance(ys.iter());
        Some((cov / (sx * sy)).clamp(-1.0, 1.0))
    }

    /// Non-null values of a numeric column as f64.
    fn values(df: &DataFrame, name: &str) -> PolarsResult<Vec<f64>> {
        let column = df.column(name)?.cast(&DataType::Float64)?;
        Ok(column.f64()?.into_iter().flatten().collect())
    }
}

/// `$1,234,567.89`
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let cents = (value.abs() * 100.0).round() as u128;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// `1,234,567`
pub fn format_count(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(value.unsigned_abs() as u128))
}

fn group_thousands(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn frame(values: &[f64], quantities: &[i64], weights: &[f64]) -> DataFrame {
        let totals: Vec<f64> = values
            .iter()
            .zip(quantities)
            .map(|(v, q)| v * *q as f64)
            .collect();
        DataFrame::new(vec![
            Column::new(VALUE.into(), values.to_vec()),
            Column::new(QUANTITY.into(), quantities.to_vec()),
            Column::new(WEIGHT.into(), weights.to_vec()),
            Column::new(TOTAL_VALUE.into(), totals),
        ])
        .unwrap()
    }

    #[test]
    fn key_metrics_sum_over_the_sample() -> Result<()> {
        let df = frame(&[10.0, 2.5, 4.0], &[2, 4, 1], &[1.0, 2.0, 3.0]);
        let metrics = StatsCalculator::key_metrics(&df)?;

        assert_eq!(metrics.total_trade_value, 34.0);
        assert_eq!(metrics.total_quantity, 7);
        assert_eq!(metrics.total_transactions, 3);
        assert!((metrics.mean_transaction_value - 34.0 / 3.0).abs() < 1e-9);
        assert_eq!(metrics.median_transaction_value, 10.0);
        Ok(())
    }

    #[test]
    fn correlation_detects_linear_relationship() -> Result<()> {
        let df = frame(&[2.0, 4.0, 6.0, 8.0], &[1, 1, 1, 1], &[1.0, 2.0, 3.0, 4.0]);
        let r = StatsCalculator::weight_value_correlation(&df)?.unwrap();
        assert!((r - 1.0).abs() < 1e-9);

        let df = frame(&[8.0, 6.0, 4.0, 2.0], &[1, 1, 1, 1], &[1.0, 2.0, 3.0, 4.0]);
        let r = StatsCalculator::weight_value_correlation(&df)?.unwrap();
        assert!((r + 1.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn correlation_needs_two_varying_points() -> Result<()> {
        let single = frame(&[1.0], &[1], &[1.0]);
        assert_eq!(StatsCalculator::weight_value_correlation(&single)?, None);

        let flat = frame(&[1.0, 2.0, 3.0], &[1, 1, 1], &[5.0, 5.0, 5.0]);
        assert_eq!(StatsCalculator::weight_value_correlation(&flat)?, None);
        Ok(())
    }

    #[test]
    fn currency_and_counts_use_thousands_separators() {
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(0.5), "$0.50");
        assert_eq!(format_currency(-1000.0), "-$1,000.00");
        assert_eq!(format_currency(f64::NAN), "-");
        assert_eq!(format_count(3001), "3,001");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(-12345), "-12,345");
    }
}
