//! Stats module - headline metrics and descriptive statistics

mod calculator;

pub use calculator::{format_count, format_currency, KeyMetrics, StatsCalculator};
