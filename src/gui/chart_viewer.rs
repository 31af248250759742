//! Chart Viewer Widget
//! Central scrollable panel with the nine numbered chart panels.

use crate::charts::{
    ranked_bars, scatter_groups, series_labels, stacked_bars, trend_lines, ChartPlotter,
};
use crate::data::{CATEGORY, COUNTRY, IMPORT_EXPORT, MONTH, PRODUCT, TOTAL_VALUE, YEAR};
use crate::views::{
    TradeViews, ISO_ALPHA3, TOP_BALANCE_COUNTRIES, TOP_COUNTRIES, TOP_PRODUCTS, TRADE_BALANCE,
};
use egui::{Color32, RichText, ScrollArea};
use polars::prelude::PolarsResult;
use tracing::debug;

const PANEL_SPACING: f32 = 15.0;
const ERROR_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

/// Scrollable column of chart panels, each with a heading and a one-line
/// interpretation.
#[derive(Default)]
pub struct ChartViewer;

impl ChartViewer {
    pub fn new() -> Self {
        Self
    }

    /// Draw every panel from freshly computed views.
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        views: &PolarsResult<TradeViews>,
        correlation: Option<f64>,
    ) {
        let views = match views {
            Ok(views) => views,
            Err(err) => {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new(format!("Could not summarise the sample: {err}"))
                            .size(16.0)
                            .color(ERROR_COLOR),
                    );
                });
                return;
            }
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Self::panel(
                    ui,
                    "1. Trade Breakdown by Category and Import/Export Type",
                    "This chart shows the distribution of total trade value across categories, \
                     split into imports and exports. Taller stacks indicate higher trade values.",
                    |ui| {
                        let bars = stacked_bars(
                            &views.category_breakdown,
                            CATEGORY,
                            IMPORT_EXPORT,
                            TOTAL_VALUE,
                        )?;
                        ChartPlotter::draw_stacked_bars(ui, "category_breakdown", &bars, "Category");
                        Ok(())
                    },
                );

                Self::panel(
                    ui,
                    "2. Yearly Trade Volume Trend",
                    "The line chart illustrates how trade volume has changed over the years for \
                     imports and exports. Peaks indicate periods of increased trade activity.",
                    |ui| {
                        let trend =
                            trend_lines(&views.yearly_trend, YEAR, IMPORT_EXPORT, TOTAL_VALUE)?;
                        ChartPlotter::draw_trend_lines(ui, "yearly_trend", &trend, "Year");
                        Ok(())
                    },
                );

                Self::panel(
                    ui,
                    &format!("3. Top {TOP_COUNTRIES} Countries by Trade Value"),
                    "This chart highlights the countries with the highest trade value. Each bar \
                     represents a country's share of the total trade value.",
                    |ui| {
                        let ranked = ranked_bars(&views.top_countries, COUNTRY, TOTAL_VALUE)?;
                        let max = ranked.values.first().copied().unwrap_or(0.0);
                        ChartPlotter::draw_ranked_bars(
                            ui,
                            "top_countries",
                            &ranked,
                            true,
                            ChartPlotter::intensity_color(max),
                        );
                        Ok(())
                    },
                );

                Self::panel(
                    ui,
                    &format!("4. Top {TOP_PRODUCTS} Products by Trade Value"),
                    "The bar chart shows the top products in terms of trade value, identifying \
                     the most economically significant products in the dataset.",
                    |ui| {
                        let ranked = ranked_bars(&views.top_products, PRODUCT, TOTAL_VALUE)?;
                        ChartPlotter::draw_ranked_bars(
                            ui,
                            "top_products",
                            &ranked,
                            false,
                            ChartPlotter::palette_color,
                        );
                        Ok(())
                    },
                );

                Self::panel(
                    ui,
                    "5. Weight vs. Value of Trades",
                    "This scatter plot shows the relationship between the weight and value of \
                     trades across categories. Larger markers represent higher total trade values.",
                    |ui| {
                        if let Some(r) = correlation {
                            ui.label(
                                RichText::new(format!("Pearson correlation (Weight, Value): {r:.3}"))
                                    .size(12.0)
                                    .color(Color32::GRAY),
                            );
                        }
                        let groups = scatter_groups(&views.scatter)?;
                        ChartPlotter::draw_scatter(ui, "weight_value", &groups);
                        Ok(())
                    },
                );

                Self::panel(
                    ui,
                    "6. Geographic Distribution of Trade Value",
                    "Trade value by country for every location that can be placed on a map. \
                     Darker bars indicate higher trade values, allowing regional comparison.",
                    |ui| {
                        let ranked = ranked_bars(&views.geographic, COUNTRY, TOTAL_VALUE)?;
                        let codes = series_labels(&views.geographic, ISO_ALPHA3)?;
                        let max = ranked.values.first().copied().unwrap_or(0.0);
                        ChartPlotter::draw_ranked_bars(
                            ui,
                            "geographic",
                            &ranked,
                            true,
                            ChartPlotter::intensity_color(max),
                        );
                        ui.add_space(8.0);
                        ChartPlotter::draw_geo_table(ui, "geographic_table", &ranked, &codes);
                        Ok(())
                    },
                );

                Self::panel(
                    ui,
                    "7. Trade Balance by Country",
                    "This bar chart displays the trade balance (exports - imports) for each \
                     country, indicating whether it is a net exporter or a net importer.",
                    |ui| {
                        let ranked = ranked_bars(&views.trade_balance, COUNTRY, TRADE_BALANCE)?;
                        ChartPlotter::draw_ranked_bars(
                            ui,
                            "trade_balance",
                            &ranked,
                            false,
                            ChartPlotter::balance_color,
                        );
                        Ok(())
                    },
                );

                Self::panel(
                    ui,
                    "8. Monthly Trade Value Trend",
                    "This line chart shows the monthly trend in trade values for imports and \
                     exports, revealing seasonal patterns and monthly fluctuations.",
                    |ui| {
                        let trend =
                            trend_lines(&views.monthly_trend, MONTH, IMPORT_EXPORT, TOTAL_VALUE)?;
                        ChartPlotter::draw_trend_lines(ui, "monthly_trend", &trend, "Month");
                        Ok(())
                    },
                );

                Self::panel(
                    ui,
                    "9. Trade Value by Category for Top Countries",
                    &format!(
                        "This stacked bar chart shows how trade value splits across categories \
                         for the {TOP_BALANCE_COUNTRIES} countries with the highest trade balance."
                    ),
                    |ui| {
                        let bars =
                            stacked_bars(&views.category_mix, COUNTRY, CATEGORY, TOTAL_VALUE)?;
                        ChartPlotter::draw_stacked_bars(ui, "category_mix", &bars, "Country");
                        Ok(())
                    },
                );
            });
    }

    /// One numbered panel. A failure while preparing the chart is shown in
    /// place of the chart and does not affect the other panels.
    fn panel(
        ui: &mut egui::Ui,
        title: &str,
        interpretation: &str,
        draw: impl FnOnce(&mut egui::Ui) -> PolarsResult<()>,
    ) {
        egui::Frame::none()
            .rounding(8.0)
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(title).size(18.0).strong());
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Interpretation: {interpretation}"))
                        .size(13.0)
                        .italics(),
                );
                ui.add_space(8.0);

                if let Err(err) = draw(ui) {
                    debug!(panel = title, %err, "chart could not be drawn");
                    ui.label(
                        RichText::new(format!("Chart unavailable: {err}"))
                            .color(ERROR_COLOR),
                    );
                }
            });
        ui.add_space(PANEL_SPACING);
    }
}
