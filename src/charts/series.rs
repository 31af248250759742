//! Chart Series Module
//! Turns summary tables into plot-ready series, independent of the GUI.

use crate::data::{CATEGORY, TOTAL_VALUE, VALUE, WEIGHT};
use polars::prelude::*;

const MISSING_LABEL: &str = "Unknown";
const MIN_RADIUS: f32 = 2.0;
const MAX_RADIUS: f32 = 10.0;

/// One named run of values aligned with a label axis.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// Bars on a label axis, one stacked segment per series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StackedBars {
    pub labels: Vec<String>,
    pub series: Vec<NamedSeries>,
}

/// Lines over an ordered label axis; `points` x values index into `x_labels`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendLines {
    pub x_labels: Vec<String>,
    pub lines: Vec<(String, Vec<[f64; 2]>)>,
}

/// A single ranked bar series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankedBars {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Scatter points for one category, with a marker radius per point.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterGroup {
    pub category: String,
    pub points: Vec<[f64; 2]>,
    pub radii: Vec<f32>,
}

/// String column values; nulls become a placeholder label.
pub fn labels(df: &DataFrame, name: &str) -> PolarsResult<Vec<String>> {
    let column = df.column(name)?.cast(&DataType::String)?;
    Ok(column
        .str()?
        .into_iter()
        .map(|v| v.unwrap_or(MISSING_LABEL).to_string())
        .collect())
}

/// Numeric column values as f64, keeping nulls.
fn optional_numbers(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<f64>>> {
    let column = df.column(name)?.cast(&DataType::Float64)?;
    Ok(column.f64()?.into_iter().collect())
}

/// Numeric column values as f64; nulls become 0.
pub fn numbers(df: &DataFrame, name: &str) -> PolarsResult<Vec<f64>> {
    Ok(optional_numbers(df, name)?
        .into_iter()
        .map(|v| v.unwrap_or(0.0))
        .collect())
}

fn position_or_push(items: &mut Vec<String>, item: &str) -> usize {
    match items.iter().position(|x| x == item) {
        Some(idx) => idx,
        None => {
            items.push(item.to_string());
            items.len() - 1
        }
    }
}

/// Spread a long table (label, stack, value) into stacked bars. Labels and
/// stacks keep their order of first appearance; absent cells are 0.
pub fn stacked_bars(
    df: &DataFrame,
    label_col: &str,
    stack_col: &str,
    value_col: &str,
) -> PolarsResult<StackedBars> {
    let label_values = labels(df, label_col)?;
    let stack_values = labels(df, stack_col)?;
    let values = numbers(df, value_col)?;

    let mut out = StackedBars::default();
    let mut stack_names: Vec<String> = Vec::new();

    for ((label, stack), value) in label_values.iter().zip(&stack_values).zip(&values) {
        let li = position_or_push(&mut out.labels, label);
        let si = position_or_push(&mut stack_names, stack);
        if si == out.series.len() {
            out.series.push(NamedSeries {
                name: stack.clone(),
                values: Vec::new(),
            });
        }
        let series = &mut out.series[si].values;
        if series.len() <= li {
            series.resize(li + 1, 0.0);
        }
        series[li] += value;
    }

    let width = out.labels.len();
    for series in &mut out.series {
        series.values.resize(width, 0.0);
    }
    Ok(out)
}

/// One line per distinct `series_col` value over the sorted `x_col` axis.
pub fn trend_lines(
    df: &DataFrame,
    x_col: &str,
    series_col: &str,
    value_col: &str,
) -> PolarsResult<TrendLines> {
    let xs = labels(df, x_col)?;
    let names = labels(df, series_col)?;
    let values = numbers(df, value_col)?;

    let mut x_labels = xs.clone();
    x_labels.sort();
    x_labels.dedup();

    let mut out = TrendLines {
        x_labels,
        lines: Vec::new(),
    };
    for ((x, name), value) in xs.iter().zip(&names).zip(&values) {
        let xi = out.x_labels.binary_search(x).unwrap_or_default() as f64;
        match out.lines.iter_mut().find(|(n, _)| n == name) {
            Some((_, points)) => points.push([xi, *value]),
            None => out.lines.push((name.clone(), vec![[xi, *value]])),
        }
    }
    for (_, points) in &mut out.lines {
        points.sort_by(|a, b| a[0].total_cmp(&b[0]));
    }
    Ok(out)
}

/// Labels and values of an already ranked table.
pub fn ranked_bars(df: &DataFrame, label_col: &str, value_col: &str) -> PolarsResult<RankedBars> {
    Ok(RankedBars {
        labels: labels(df, label_col)?,
        values: numbers(df, value_col)?,
    })
}

/// Group the scatter view by category and size markers by Total_Value.
/// Records without a Weight or a Value have no position and are skipped.
pub fn scatter_groups(df: &DataFrame) -> PolarsResult<Vec<ScatterGroup>> {
    let weights = optional_numbers(df, WEIGHT)?;
    let values = optional_numbers(df, VALUE)?;
    let totals = numbers(df, TOTAL_VALUE)?;
    let categories = labels(df, CATEGORY)?;

    let max_total = totals
        .iter()
        .zip(weights.iter().zip(&values))
        .filter(|(_, (w, v))| w.is_some() && v.is_some())
        .map(|(total, _)| *total)
        .fold(0.0_f64, f64::max);
    let radius = |total: f64| -> f32 {
        if max_total <= 0.0 {
            return MIN_RADIUS;
        }
        let share = (total.max(0.0) / max_total).sqrt() as f32;
        MIN_RADIUS + (MAX_RADIUS - MIN_RADIUS) * share
    };

    let mut groups: Vec<ScatterGroup> = Vec::new();
    for i in 0..weights.len() {
        let (Some(weight), Some(value)) = (weights[i], values[i]) else {
            continue;
        };
        let idx = match groups.iter().position(|g| g.category == categories[i]) {
            Some(idx) => idx,
            None => {
                groups.push(ScatterGroup {
                    category: categories[i].clone(),
                    points: Vec::new(),
                    radii: Vec::new(),
                });
                groups.len() - 1
            }
        };
        groups[idx].points.push([weight, value]);
        groups[idx].radii.push(radius(totals[i]));
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn long_table() -> DataFrame {
        DataFrame::new(vec![
            Column::new("Country".into(), ["A", "A", "B", "C"]),
            Column::new("Category".into(), ["Toys", "Food", "Food", "Toys"]),
            Column::new("Total_Value".into(), [1.0, 2.0, 3.0, 4.0]),
        ])
        .unwrap()
    }

    #[test]
    fn stacked_bars_fill_missing_cells_with_zero() -> Result<()> {
        let bars = stacked_bars(&long_table(), "Country", "Category", "Total_Value")?;

        assert_eq!(bars.labels, vec!["A", "B", "C"]);
        assert_eq!(bars.series.len(), 2);
        assert_eq!(bars.series[0].name, "Toys");
        assert_eq!(bars.series[0].values, vec![1.0, 0.0, 4.0]);
        assert_eq!(bars.series[1].name, "Food");
        assert_eq!(bars.series[1].values, vec![2.0, 3.0, 0.0]);
        Ok(())
    }

    #[test]
    fn trend_lines_index_sorted_labels() -> Result<()> {
        let df = DataFrame::new(vec![
            Column::new("Month".into(), ["2021-02", "2021-01", "2021-02"]),
            Column::new("Import_Export".into(), ["Export", "Export", "Import"]),
            Column::new("Total_Value".into(), [5.0, 7.0, 1.0]),
        ])?;

        let trend = trend_lines(&df, "Month", "Import_Export", "Total_Value")?;
        assert_eq!(trend.x_labels, vec!["2021-01", "2021-02"]);
        assert_eq!(trend.lines[0].0, "Export");
        assert_eq!(trend.lines[0].1, vec![[0.0, 7.0], [1.0, 5.0]]);
        assert_eq!(trend.lines[1], ("Import".to_string(), vec![[1.0, 1.0]]));
        Ok(())
    }

    #[test]
    fn numeric_axis_labels_work_for_years() -> Result<()> {
        let df = DataFrame::new(vec![
            Column::new("Year".into(), [2020i32, 2021]),
            Column::new("Import_Export".into(), ["Import", "Import"]),
            Column::new("Total_Value".into(), [1.0, 2.0]),
        ])?;

        let trend = trend_lines(&df, "Year", "Import_Export", "Total_Value")?;
        assert_eq!(trend.x_labels, vec!["2020", "2021"]);
        Ok(())
    }

    #[test]
    fn scatter_groups_by_category_and_scales_markers() -> Result<()> {
        let df = DataFrame::new(vec![
            Column::new(WEIGHT.into(), [1.0, 2.0, 3.0]),
            Column::new(VALUE.into(), [10.0, 20.0, 30.0]),
            Column::new(TOTAL_VALUE.into(), [0.0, 25.0, 100.0]),
            Column::new(CATEGORY.into(), ["Toys", "Food", "Toys"]),
        ])?;

        let groups = scatter_groups(&df)?;
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Toys");
        assert_eq!(groups[0].points, vec![[1.0, 10.0], [3.0, 30.0]]);
        assert_eq!(groups[0].radii, vec![MIN_RADIUS, MAX_RADIUS]);
        assert!(groups[1].radii[0] > MIN_RADIUS && groups[1].radii[0] < MAX_RADIUS);
        Ok(())
    }

    #[test]
    fn scatter_skips_records_without_a_position() -> Result<()> {
        let df = DataFrame::new(vec![
            Column::new(WEIGHT.into(), [None, Some(2.0), Some(4.0)]),
            Column::new(VALUE.into(), [Some(500.0), Some(20.0), None]),
            Column::new(TOTAL_VALUE.into(), [Some(500.0), Some(40.0), None]),
            Column::new(CATEGORY.into(), ["Toys", "Toys", "Food"]),
        ])?;

        let groups = scatter_groups(&df)?;
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, "Toys");
        assert_eq!(groups[0].points, vec![[2.0, 20.0]]);
        // Only the plotted record sets the marker scale.
        assert_eq!(groups[0].radii, vec![MAX_RADIUS]);
        Ok(())
    }

    #[test]
    fn null_labels_get_a_placeholder() -> Result<()> {
        let df = DataFrame::new(vec![Column::new("Country".into(), [Some("A"), None])])?;
        assert_eq!(labels(&df, "Country")?, vec!["A", "Unknown"]);
        Ok(())
    }
}
