//! Views module - summary tables for each chart

mod aggregator;
mod geo;

pub use aggregator::{
    TradeViews, ISO_ALPHA3, TOP_BALANCE_COUNTRIES, TOP_COUNTRIES, TOP_PRODUCTS, TRADE_BALANCE,
};
