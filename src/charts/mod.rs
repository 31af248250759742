//! Charts module - plot-ready series and chart drawing

mod plotter;
mod series;

pub use plotter::ChartPlotter;
pub use series::{
    labels as series_labels, ranked_bars, scatter_groups, stacked_bars, trend_lines,
};
