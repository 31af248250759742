//! Chart Plotter Module
//! Draws the dashboard charts using egui_plot.

use super::series::{RankedBars, ScatterGroup, StackedBars, TrendLines};
use crate::data::TradeFlow;
use crate::stats::format_currency;
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints, Points};
use std::ops::RangeInclusive;

pub const IMPORT_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
pub const EXPORT_COLOR: Color32 = Color32::from_rgb(243, 156, 18); // Orange
pub const SURPLUS_COLOR: Color32 = Color32::from_rgb(26, 188, 156); // Teal
pub const DEFICIT_COLOR: Color32 = Color32::from_rgb(233, 30, 99); // Pink

pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(255, 87, 34),  // Deep Orange
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

const CHART_HEIGHT: f32 = 320.0;
const BAR_WIDTH: f64 = 0.7;

/// Label for an integer grid mark, empty between bars.
fn index_label(labels: &[String], mark: GridMark) -> String {
    let rounded = mark.value.round();
    if (mark.value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

fn money_axis(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    format_currency(mark.value)
}

/// Draws the dashboard charts.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Colour for a series name: fixed for trade flows, palette otherwise.
    pub fn series_color(name: &str, index: usize) -> Color32 {
        match name.parse::<TradeFlow>() {
            Ok(TradeFlow::Import) => IMPORT_COLOR,
            Ok(TradeFlow::Export) => EXPORT_COLOR,
            Err(_) => PALETTE[index % PALETTE.len()],
        }
    }

    /// Vertical bars with one stacked segment per series.
    pub fn draw_stacked_bars(ui: &mut egui::Ui, id: &str, bars: &StackedBars, x_title: &str) {
        let labels = bars.labels.clone();

        let mut charts: Vec<BarChart> = Vec::with_capacity(bars.series.len());
        for (si, series) in bars.series.iter().enumerate() {
            let color = Self::series_color(&series.name, si);
            let items: Vec<Bar> = series
                .values
                .iter()
                .enumerate()
                .map(|(i, &v)| {
                    Bar::new(i as f64, v)
                        .width(BAR_WIDTH)
                        .name(format!("{} / {}", bars.labels[i], series.name))
                })
                .collect();
            let below: Vec<&BarChart> = charts.iter().collect();
            let chart = BarChart::new(items)
                .name(&series.name)
                .color(color)
                .stack_on(&below);
            charts.push(chart);
        }

        Plot::new(id)
            .height(CHART_HEIGHT)
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label(x_title)
            .y_axis_label("Total Trade Value")
            .x_axis_formatter(move |mark, _range| index_label(&labels, mark))
            .y_axis_formatter(money_axis)
            .show(ui, |plot_ui| {
                for chart in charts {
                    plot_ui.bar_chart(chart);
                }
            });
    }

    /// Line chart with markers, one line per series.
    pub fn draw_trend_lines(ui: &mut egui::Ui, id: &str, trend: &TrendLines, x_title: &str) {
        let labels = trend.x_labels.clone();

        Plot::new(id)
            .height(CHART_HEIGHT)
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label(x_title)
            .y_axis_label("Total Trade Value")
            .x_axis_formatter(move |mark, _range| index_label(&labels, mark))
            .y_axis_formatter(money_axis)
            .show(ui, |plot_ui| {
                for (i, (name, points)) in trend.lines.iter().enumerate() {
                    let color = Self::series_color(name, i);
                    plot_ui.line(
                        Line::new(PlotPoints::from(points.clone()))
                            .color(color)
                            .width(2.0)
                            .name(name),
                    );
                    plot_ui.points(
                        Points::new(PlotPoints::from(points.clone()))
                            .radius(4.0)
                            .color(color)
                            .name(name),
                    );
                }
            });
    }

    /// Ranked bars. Horizontal charts list the first label at the top.
    pub fn draw_ranked_bars(
        ui: &mut egui::Ui,
        id: &str,
        ranked: &RankedBars,
        horizontal: bool,
        color_for: impl Fn(usize, f64) -> Color32,
    ) {
        let n = ranked.labels.len();
        let position = |i: usize| if horizontal { (n - 1 - i) as f64 } else { i as f64 };

        let bars: Vec<Bar> = ranked
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                Bar::new(position(i), v)
                    .width(BAR_WIDTH)
                    .name(&ranked.labels[i])
                    .fill(color_for(i, v))
            })
            .collect();

        let mut axis_labels = ranked.labels.clone();
        if horizontal {
            axis_labels.reverse();
        }

        let mut chart = BarChart::new(bars).name("Total Trade Value");
        let mut plot = Plot::new(id)
            .height(CHART_HEIGHT.max(n as f32 * 18.0))
            .allow_scroll(false);

        if horizontal {
            chart = chart.horizontal();
            plot = plot
                .y_axis_formatter(move |mark, _range| index_label(&axis_labels, mark))
                .x_axis_formatter(money_axis);
        } else {
            plot = plot
                .x_axis_formatter(move |mark, _range| index_label(&axis_labels, mark))
                .y_axis_formatter(money_axis);
        }

        plot.show(ui, |plot_ui| plot_ui.bar_chart(chart));
    }

    /// Weight against Value, coloured by category, sized by Total_Value.
    pub fn draw_scatter(ui: &mut egui::Ui, id: &str, groups: &[ScatterGroup]) {
        Plot::new(id)
            .height(CHART_HEIGHT + 80.0)
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label("Weight")
            .y_axis_label("Trade Value")
            .show(ui, |plot_ui| {
                for (gi, group) in groups.iter().enumerate() {
                    let color = PALETTE[gi % PALETTE.len()].gamma_multiply(0.7);
                    for (point, radius) in group.points.iter().zip(&group.radii) {
                        plot_ui.points(
                            Points::new(PlotPoints::from(vec![*point]))
                                .radius(*radius)
                                .color(color)
                                .name(&group.category),
                        );
                    }
                }
            });
    }

    /// Country, code and total table for the geographic view.
    pub fn draw_geo_table(ui: &mut egui::Ui, id: &str, countries: &RankedBars, codes: &[String]) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt(id)
                    .max_height(220.0)
                    .show(ui, |ui| {
                        egui::Grid::new(ui.make_persistent_id(id))
                            .striped(true)
                            .min_col_width(70.0)
                            .spacing([12.0, 4.0])
                            .show(ui, |ui| {
                                ui.label(RichText::new("Country").strong().size(11.0));
                                ui.label(RichText::new("ISO-3").strong().size(11.0));
                                ui.label(RichText::new("Total Trade Value").strong().size(11.0));
                                ui.end_row();

                                for ((country, code), total) in
                                    countries.labels.iter().zip(codes).zip(&countries.values)
                                {
                                    ui.label(RichText::new(country).size(11.0));
                                    ui.label(RichText::new(code).size(11.0).monospace());
                                    ui.label(RichText::new(format_currency(*total)).size(11.0));
                                    ui.end_row();
                                }
                            });
                    });
            });
    }

    /// Bar colour that follows the sign of a balance.
    pub fn balance_color(_index: usize, value: f64) -> Color32 {
        if value >= 0.0 {
            SURPLUS_COLOR
        } else {
            DEFICIT_COLOR
        }
    }

    /// One palette colour per bar.
    pub fn palette_color(index: usize, _value: f64) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Darker bars for larger values, relative to the largest.
    pub fn intensity_color(max: f64) -> impl Fn(usize, f64) -> Color32 {
        move |_index, value| {
            let share = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
            let t = 0.35 + 0.65 * share as f32;
            Color32::from_rgb(
                (240.0 - 170.0 * t) as u8,
                (200.0 - 170.0 * t) as u8,
                (120.0 + 40.0 * t) as u8,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flows_have_fixed_colours() {
        assert_eq!(ChartPlotter::series_color("Import", 5), IMPORT_COLOR);
        assert_eq!(ChartPlotter::series_color("Export", 0), EXPORT_COLOR);
        assert_eq!(ChartPlotter::series_color("Toys", 11), PALETTE[1]);
    }

    #[test]
    fn balance_colour_follows_sign() {
        assert_eq!(ChartPlotter::balance_color(0, 3.0), SURPLUS_COLOR);
        assert_eq!(ChartPlotter::balance_color(0, -0.5), DEFICIT_COLOR);
    }

    #[test]
    fn index_labels_only_on_whole_positions() {
        let labels = vec!["a".to_string(), "b".to_string()];
        let mark = |value| GridMark {
            value,
            step_size: 1.0,
        };
        assert_eq!(index_label(&labels, mark(1.0)), "b");
        assert_eq!(index_label(&labels, mark(0.5)), "");
        assert_eq!(index_label(&labels, mark(2.0)), "");
        assert_eq!(index_label(&labels, mark(-1.0)), "");
    }
}
