mod app;
mod charts;
mod color;
mod config;
mod data;
mod page;
mod reactive;
mod selectors;
mod state;
mod ui;

use anyhow::{anyhow, Context};
use app::LaunchDashboardApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // The dashboard cannot run without its data: any load error ends the process here.
    let dataset = data::loader::load_file(&config.data_path).with_context(|| {
        format!("loading launch records from {}", config.data_path.display())
    });
    let dataset = match dataset {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Failed to load dataset: {e:#}");
            return Err(e);
        }
    };
    log::info!(
        "Loaded {} launches from {} sites (payload bounds {:?})",
        dataset.len(),
        dataset.sites().len(),
        dataset.payload_bounds()
    );
    if dataset.is_empty() {
        log::warn!("No launches in {}; both charts will be empty", config.data_path.display());
    }

    let state = AppState::new(dataset, &config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        &config.title,
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashboardApp::new(state)))),
    )
    .map_err(|e| anyhow!("running the dashboard window: {e}"))
}
