//! Global Trade Insights Dashboard
//!
//! Loads a trade CSV, draws a seeded sample and shows nine summary charts in a
//! native window.

mod charts;
mod config;
mod data;
mod gui;
mod pipeline;
mod stats;
mod views;

use anyhow::{anyhow, Context, Result};
use config::DashboardConfig;
use eframe::egui;
use gui::TradeDashboardApp;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // Load, enrich and sample before any window opens; failures end the session.
    let config = DashboardConfig::default();
    let sample = pipeline::prepare_sample(&config)
        .with_context(|| format!("preparing data from {}", config.input_path.display()))?;
    info!(rows = sample.height(), "sample ready, opening dashboard");

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1100.0, 700.0])
            .with_title("Global Trade Insights Dashboard"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Global Trade Insights Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(TradeDashboardApp::new(cc, sample, config)))),
    )
    .map_err(|e| anyhow!("dashboard window failed: {e}"))
}
