//! Control Panel Widget
//! Left side panel with the title, key metrics and the download control.

use crate::data::ExportReport;
use crate::stats::{format_count, format_currency, KeyMetrics};
use egui::{Color32, RichText};

const SUCCESS_COLOR: Color32 = Color32::from_rgb(40, 167, 69);
const ERROR_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

/// Result of the last download, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ExportStatus {
    #[default]
    Idle,
    Saved(ExportReport),
    Failed(String),
}

/// Left side control panel with metrics and the export trigger.
#[derive(Default)]
pub struct ControlPanel {
    pub export_status: ExportStatus,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui, metrics: &KeyMetrics) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🌍 Global Trade Insights Dashboard")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(8.0);
        ui.label(
            RichText::new(
                "This dashboard provides an interactive analysis of international trade \
                 trends from imports and exports. Explore trade data by year, category, \
                 country, and more.",
            )
            .size(12.0),
        );
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Key Metrics =====
        ui.label(RichText::new("📊 Key Metrics").size(14.0).strong());
        ui.add_space(5.0);

        Self::metric_tile(ui, "Total Trade Value", &format_currency(metrics.total_trade_value));
        Self::metric_tile(ui, "Total Quantity", &format_count(metrics.total_quantity));
        Self::metric_tile(
            ui,
            "Total Transactions",
            &format_count(metrics.total_transactions as i64),
        );

        ui.add_space(5.0);
        ui.label(
            RichText::new(format!(
                "Mean transaction {} · median {}",
                format_currency(metrics.mean_transaction_value),
                format_currency(metrics.median_transaction_value),
            ))
            .size(11.0)
            .color(Color32::GRAY),
        );

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Download =====
        ui.vertical_centered(|ui| {
            let button = egui::Button::new(RichText::new("💾 Download Sampled Data").size(14.0))
                .min_size(egui::vec2(200.0, 32.0));
            if ui.add(button).clicked() {
                action = ControlPanelAction::Download;
            }
        });

        ui.add_space(8.0);
        match &self.export_status {
            ExportStatus::Idle => {}
            ExportStatus::Saved(report) => {
                ui.label(
                    RichText::new(format!(
                        "Data has been saved as '{}'",
                        report.path.display()
                    ))
                    .size(11.0)
                    .color(SUCCESS_COLOR),
                );
            }
            ExportStatus::Failed(error) => {
                ui.label(
                    RichText::new(format!("Export failed: {error}"))
                        .size(11.0)
                        .color(ERROR_COLOR),
                );
            }
        }

        action
    }

    fn metric_tile(ui: &mut egui::Ui, label: &str, value: &str) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(label).size(11.0).color(Color32::GRAY));
                ui.label(RichText::new(value).size(20.0).strong());
            });
        ui.add_space(4.0);
    }

    /// Record the outcome of a download.
    pub fn set_export_status(&mut self, status: ExportStatus) {
        self.export_status = status;
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    Download,
}
