//! Aggregator Module
//! The nine summary tables behind the dashboard charts, each a pure function
//! of the sample.

use super::geo;
use crate::data::{
    TradeFlow, CATEGORY, COUNTRY, IMPORT_EXPORT, MONTH, PRODUCT, TOTAL_VALUE, VALUE, WEIGHT,
    YEAR,
};
use polars::prelude::*;
use std::collections::HashSet;

pub const TOP_COUNTRIES: usize = 15;
pub const TOP_PRODUCTS: usize = 10;
pub const TOP_BALANCE_COUNTRIES: usize = 10;

/// Pivoted per-flow totals and their difference in the trade-balance view.
pub const EXPORT_TOTAL: &str = "Export";
pub const IMPORT_TOTAL: &str = "Import";
pub const TRADE_BALANCE: &str = "Trade_Balance";
/// Map key added by the geographic view.
pub const ISO_ALPHA3: &str = "ISO_Alpha3";

/// Descending sort that keeps input order among equal keys.
fn descending() -> SortMultipleOptions {
    SortMultipleOptions::default()
        .with_order_descending(true)
        .with_nulls_last(true)
        .with_maintain_order(true)
}

fn ascending() -> SortMultipleOptions {
    SortMultipleOptions::default().with_maintain_order(true)
}

/// Rows with every key present.
fn keys_present(keys: &[&str]) -> Expr {
    keys.iter().fold(lit(true), |acc, key| acc.and(col(*key).is_not_null()))
}

/// Total_Value per key combination. Rows with a null key are left out.
fn sum_total_by(df: &DataFrame, keys: &[&str]) -> LazyFrame {
    let exprs: Vec<Expr> = keys.iter().map(|k| col(*k)).collect();
    df.clone()
        .lazy()
        .filter(keys_present(keys))
        .group_by_stable(exprs)
        .agg([col(TOTAL_VALUE).sum()])
}

/// Rows whose Country satisfies `keep`. Null countries never match.
fn rows_where_country(df: &DataFrame, keep: impl Fn(&str) -> bool) -> PolarsResult<DataFrame> {
    let mask: BooleanChunked = df
        .column(COUNTRY)?
        .str()?
        .into_iter()
        .map(|country| country.is_some_and(&keep))
        .collect();
    df.filter(&mask)
}

/// Total_Value by (Category, Import_Export).
pub fn category_breakdown(df: &DataFrame) -> PolarsResult<DataFrame> {
    sum_total_by(df, &[CATEGORY, IMPORT_EXPORT])
        .sort([CATEGORY, IMPORT_EXPORT], ascending())
        .collect()
}

/// Total_Value by (Year, Import_Export); rows without a Year are left out.
pub fn yearly_trend(df: &DataFrame) -> PolarsResult<DataFrame> {
    sum_total_by(df, &[YEAR, IMPORT_EXPORT])
        .sort([YEAR, IMPORT_EXPORT], ascending())
        .collect()
}

/// The 15 countries with the largest Total_Value.
pub fn top_countries(df: &DataFrame) -> PolarsResult<DataFrame> {
    let ranked = sum_total_by(df, &[COUNTRY])
        .sort([TOTAL_VALUE], descending())
        .collect()?;
    Ok(ranked.head(Some(TOP_COUNTRIES)))
}

/// The 10 products with the largest Total_Value.
pub fn top_products(df: &DataFrame) -> PolarsResult<DataFrame> {
    let ranked = sum_total_by(df, &[PRODUCT])
        .sort([TOTAL_VALUE], descending())
        .collect()?;
    Ok(ranked.head(Some(TOP_PRODUCTS)))
}

/// Per-record Weight, Value, Total_Value and Category.
pub fn weight_value_scatter(df: &DataFrame) -> PolarsResult<DataFrame> {
    df.select([WEIGHT, VALUE, TOTAL_VALUE, CATEGORY])
}

/// Total_Value by Country for countries the gazetteer can place on a map,
/// with their alpha-3 code.
pub fn geographic_totals(df: &DataFrame) -> PolarsResult<DataFrame> {
    let mappable = rows_where_country(df, geo::is_recognized)?;
    let mut totals = sum_total_by(&mappable, &[COUNTRY])
        .sort([TOTAL_VALUE], descending())
        .collect()?;

    let codes: Vec<Option<&str>> = totals
        .column(COUNTRY)?
        .str()?
        .into_iter()
        .map(|country| country.and_then(geo::iso_alpha3))
        .collect();
    totals.with_column(Column::new(ISO_ALPHA3.into(), codes))?;
    Ok(totals)
}

/// Export and Import totals per Country and their difference, largest
/// surplus first. A country with no flow on one side counts 0 for it; rows
/// without a Country or a flow are left out.
pub fn trade_balance(df: &DataFrame) -> PolarsResult<DataFrame> {
    let flow_total = |flow: TradeFlow, alias: &str| {
        col(TOTAL_VALUE)
            .filter(col(IMPORT_EXPORT).eq(lit(flow.as_str())))
            .sum()
            .fill_null(lit(0.0))
            .alias(alias)
    };

    df.clone()
        .lazy()
        .filter(keys_present(&[COUNTRY, IMPORT_EXPORT]))
        .group_by_stable([col(COUNTRY)])
        .agg([
            flow_total(TradeFlow::Export, EXPORT_TOTAL),
            flow_total(TradeFlow::Import, IMPORT_TOTAL),
        ])
        .with_column((col(EXPORT_TOTAL) - col(IMPORT_TOTAL)).alias(TRADE_BALANCE))
        .sort([TRADE_BALANCE], descending())
        .collect()
}

/// Total_Value by (Month, Import_Export); rows without a Month are left out.
pub fn monthly_trend(df: &DataFrame) -> PolarsResult<DataFrame> {
    sum_total_by(df, &[MONTH, IMPORT_EXPORT])
        .sort([MONTH, IMPORT_EXPORT], ascending())
        .collect()
}

/// The leading countries of a trade-balance table, in rank order.
pub fn top_balance_countries(balance: &DataFrame) -> PolarsResult<Vec<String>> {
    Ok(balance
        .head(Some(TOP_BALANCE_COUNTRIES))
        .column(COUNTRY)?
        .str()?
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect())
}

/// Total_Value by (Country, Category), restricted to the top-10 countries of
/// `balance`, which must be the trade-balance view of the same sample.
pub fn category_mix(df: &DataFrame, balance: &DataFrame) -> PolarsResult<DataFrame> {
    let leaders: HashSet<String> = top_balance_countries(balance)?.into_iter().collect();
    let subset = rows_where_country(df, |country| leaders.contains(country))?;
    sum_total_by(&subset, &[COUNTRY, CATEGORY])
        .sort([COUNTRY, CATEGORY], ascending())
        .collect()
}

/// All nine summary tables for one render pass.
#[derive(Debug, Clone)]
pub struct TradeViews {
    pub category_breakdown: DataFrame,
    pub yearly_trend: DataFrame,
    pub top_countries: DataFrame,
    pub top_products: DataFrame,
    pub scatter: DataFrame,
    pub geographic: DataFrame,
    pub trade_balance: DataFrame,
    pub monthly_trend: DataFrame,
    pub category_mix: DataFrame,
}

impl TradeViews {
    /// Compute every view from the sample. The category mix is derived after,
    /// and from, the trade balance.
    pub fn compute(df: &DataFrame) -> PolarsResult<Self> {
        let trade_balance = trade_balance(df)?;
        let category_mix = category_mix(df, &trade_balance)?;

        Ok(Self {
            category_breakdown: category_breakdown(df)?,
            yearly_trend: yearly_trend(df)?,
            top_countries: top_countries(df)?,
            top_products: top_products(df)?,
            scatter: weight_value_scatter(df)?,
            geographic: geographic_totals(df)?,
            trade_balance,
            monthly_trend: monthly_trend(df)?,
            category_mix,
        })
    }
}
