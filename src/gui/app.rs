//! Trade Dashboard Main Application
//! Main window with the metrics panel and the chart viewer.

use crate::config::DashboardConfig;
use crate::data::DataExporter;
use crate::gui::control_panel::ExportStatus;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::stats::{KeyMetrics, StatsCalculator};
use crate::views::TradeViews;
use egui::SidePanel;
use polars::prelude::DataFrame;
use tracing::debug;

/// Main application window.
///
/// Holds the sample for the whole session. Summary tables are rebuilt from
/// it on every frame.
pub struct TradeDashboardApp {
    sample: DataFrame,
    config: DashboardConfig,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl TradeDashboardApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        sample: DataFrame,
        config: DashboardConfig,
    ) -> Self {
        Self {
            sample,
            config,
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(),
        }
    }

    /// Write the sample to the fixed export path and report the outcome.
    fn handle_download(&mut self) {
        let status = match DataExporter::export_csv(&self.sample, &self.config.export_path) {
            Ok(report) => ExportStatus::Saved(report),
            Err(e) => ExportStatus::Failed(e.to_string()),
        };
        self.control_panel.set_export_status(status);
    }

    fn metrics(&self) -> KeyMetrics {
        StatsCalculator::key_metrics(&self.sample).unwrap_or_else(|e| {
            debug!(%e, "key metrics unavailable");
            KeyMetrics {
                total_trade_value: f64::NAN,
                total_quantity: 0,
                total_transactions: self.sample.height(),
                mean_transaction_value: f64::NAN,
                median_transaction_value: f64::NAN,
            }
        })
    }
}

impl eframe::App for TradeDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let metrics = self.metrics();
        let views = TradeViews::compute(&self.sample);
        let correlation = StatsCalculator::weight_value_correlation(&self.sample)
            .ok()
            .flatten();

        // Left panel - Title, metrics, download
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui, &metrics);

                    match action {
                        ControlPanelAction::Download => self.handle_download(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui, &views, correlation);
        });
    }
}
